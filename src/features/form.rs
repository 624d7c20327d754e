//! Contact form submission over `fetch`.
//!
//! Fields are posted as a flat JSON object to the form's `action`. The
//! button shows progress, then the outcome, then reverts; see
//! `motion::form` for the lifecycle.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use motion::form::FormPayload;

/// Build the request body from `FormData` entries. Entries without a
/// string name or value (file inputs) are skipped.
pub fn payload_from_entries<I>(entries: I) -> FormPayload
where
    I: IntoIterator<Item = (Option<String>, Option<String>)>,
{
    FormPayload::from_pairs(entries.into_iter().filter_map(|(name, value)| Some((name?, value?))))
}

#[cfg(feature = "hydrate")]
pub use web::setup;

#[cfg(feature = "hydrate")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use motion::form::{self, ButtonView, ContactForm, FormError, FormPayload, decode_response};
    use wasm_bindgen::JsCast;
    use web_sys::{Element, Event, FormData, HtmlButtonElement, HtmlFormElement};

    use super::payload_from_entries;
    use crate::app::Ctx;
    use crate::dom::{self, DomError, by_id, listen};

    const FORM_ID: &str = "contactForm";

    #[derive(Clone)]
    struct FormNodes {
        form: HtmlFormElement,
        button: HtmlButtonElement,
        label: Element,
    }

    impl FormNodes {
        fn apply(&self, view: &ButtonView, clear_fields: bool) {
            self.label.set_text_content(Some(&view.label));
            dom::set_style(&self.button, "background", view.background.unwrap_or(""));
            self.button.set_disabled(view.disabled);
            if clear_fields {
                self.form.reset();
            }
        }
    }

    pub fn setup(ctx: &Ctx) -> Result<(), DomError> {
        let form: HtmlFormElement = by_id(&ctx.document, FORM_ID)?;
        let button: HtmlButtonElement = form
            .query_selector("button[type=\"submit\"]")?
            .ok_or(DomError::MissingChild("submit button", FORM_ID))?
            .dyn_into()
            .map_err(|_| DomError::WrongType(FORM_ID))?;
        // The label span keeps any icon beside it; fall back to the button.
        let label = form
            .query_selector("button[type=\"submit\"] span:first-child")?
            .unwrap_or_else(|| button.clone().into());
        let state = Rc::new(RefCell::new(ContactForm::new(
            &label.text_content().unwrap_or_default(),
            &ctx.cfg,
        )));
        let nodes = FormNodes { form: form.clone(), button, label };
        let sched = Rc::clone(&ctx.sched);

        listen(&form, "submit", move |ev: Event| {
            ev.prevent_default();
            let begun = state.borrow_mut().begin();
            match begun {
                Ok(view) => nodes.apply(&view, false),
                Err(err) => {
                    log::debug!("contact form: {err}");
                    return;
                }
            }
            let (state, nodes, sched) = (Rc::clone(&state), nodes.clone(), Rc::clone(&sched));
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match collect(&nodes.form) {
                    Ok(payload) => send(&nodes.form.action(), &payload).await,
                    Err(err) => Err(FormError::Transport(err.to_string())),
                };
                form::settle(&state, &sched, outcome, move |view: &ButtonView, clear: bool| {
                    nodes.apply(view, clear);
                });
            });
        })
    }

    fn collect(form: &HtmlFormElement) -> Result<FormPayload, DomError> {
        let data = FormData::new_with_form(form)?;
        let mut entries = Vec::new();
        if let Some(iter) = js_sys::try_iter(&data)? {
            for entry in iter {
                let pair = js_sys::Array::from(&entry?);
                entries.push((pair.get(0).as_string(), pair.get(1).as_string()));
            }
        }
        Ok(payload_from_entries(entries))
    }

    async fn send(endpoint: &str, payload: &FormPayload) -> Result<(), FormError> {
        let body = payload.to_json()?;
        let resp = gloo_net::http::Request::post(endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| FormError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| FormError::Transport(e.to_string()))?;
        let text = resp.text().await.map_err(|e| FormError::Transport(e.to_string()))?;
        decode_response(&text)
    }
}
