//! DOM access for the feature setups.
//!
//! [`DomPage`] and [`DomElement`] implement the `motion::page` traits over
//! `web_sys`, so the counter and reveal logic run against the real document
//! unchanged. The rest are small helpers the setups share: typed lookup,
//! class and style writes, geometry reads, and page-lifetime listeners.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Failure while wiring a feature to the page.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    #[error("missing {0} inside #{1}")]
    MissingChild(&'static str, &'static str),
    #[error("#{0} is not the expected element type")]
    WrongType(&'static str),
    #[error("dom call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Whole milliseconds for a timer. Negative and non-finite delays run at
/// once; delays past `u32::MAX` saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn timer_ms(ms: f64) -> u32 {
    if ms.is_nan() || ms <= 0.0 {
        return 0;
    }
    ms.round().min(f64::from(u32::MAX)) as u32
}

/// Media query matched by mice and trackpads, not touch screens.
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";

#[cfg(feature = "hydrate")]
pub use web::*;

#[cfg(feature = "hydrate")]
mod web {
    use motion::geom::{Point, Rect};
    use motion::page::{ElementSource, Marker, PageElement};
    use wasm_bindgen::convert::FromWasmAbi;
    use wasm_bindgen::{JsCast, closure::Closure};
    use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, MouseEvent, Window};

    use super::{DomError, FINE_POINTER_QUERY};

    /// A page element as seen by the motion core.
    #[derive(Clone)]
    pub struct DomElement(pub Element);

    impl PageElement for DomElement {
        fn text(&self) -> String {
            self.0.text_content().unwrap_or_default()
        }

        fn set_text(&self, text: &str) {
            self.0.set_text_content(Some(text));
        }

        fn attribute(&self, name: &str) -> Option<String> {
            self.0.get_attribute(name)
        }

        fn within(&self, region: Marker) -> bool {
            matches!(self.0.closest(region.selector()), Ok(Some(_)))
        }
    }

    pub struct DomPage {
        document: Document,
    }

    impl DomPage {
        #[must_use]
        pub fn new(document: Document) -> Self {
            Self { document }
        }
    }

    impl ElementSource for DomPage {
        type Element = DomElement;

        fn find_all(&self, marker: Marker) -> Vec<DomElement> {
            match self.document.query_selector_all(marker.selector()) {
                Ok(list) => elements(&list).into_iter().map(DomElement).collect(),
                Err(err) => {
                    log::warn!("query {:?} failed: {:?}", marker.selector(), err);
                    Vec::new()
                }
            }
        }

        // One walk over the parent's children per element; never compares
        // elements pairwise across the page.
        fn sibling_index(&self, el: &DomElement, marker: Marker) -> usize {
            let Some(parent) = el.0.parent_element() else {
                return 0;
            };
            let children = parent.children();
            let mut index = 0;
            for child in (0..children.length()).filter_map(|i| children.item(i)) {
                if child.is_same_node(Some(el.0.as_ref())) {
                    return index;
                }
                if child.matches(marker.selector()).unwrap_or(false) {
                    index += 1;
                }
            }
            0
        }
    }

    /// The elements of a `NodeList`, skipping text and comment nodes.
    #[must_use]
    pub fn elements(list: &web_sys::NodeList) -> Vec<Element> {
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    /// Look up `#id` as a specific element type.
    ///
    /// # Errors
    ///
    /// [`DomError::MissingElement`] if absent, [`DomError::WrongType`] if the
    /// element is not a `T`.
    pub fn by_id<T: JsCast>(document: &Document, id: &'static str) -> Result<T, DomError> {
        document
            .get_element_by_id(id)
            .ok_or(DomError::MissingElement(id))?
            .dyn_into::<T>()
            .map_err(|_| DomError::WrongType(id))
    }

    #[must_use]
    pub fn html(el: &Element) -> Option<HtmlElement> {
        el.dyn_ref::<HtmlElement>().cloned()
    }

    /// Set an inline style property; an empty value removes it so the
    /// stylesheet applies again.
    pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
        let style = el.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(drop)
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            log::debug!("style {property}: {err:?}");
        }
    }

    pub fn set_class(el: &Element, class: &str, on: bool) {
        if let Err(err) = el.class_list().toggle_with_force(class, on) {
            log::debug!("class {class}: {err:?}");
        }
    }

    #[must_use]
    pub fn client_rect(el: &Element) -> Rect {
        let r = el.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }

    #[must_use]
    pub fn pointer(ev: &MouseEvent) -> Point {
        Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
    }

    /// `document.readyState`, read reflectively.
    #[must_use]
    pub fn ready_state(document: &Document) -> String {
        js_sys::Reflect::get(document, &wasm_bindgen::JsValue::from_str("readyState"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    /// Vertical scroll position of the page.
    #[must_use]
    pub fn page_y(window: &Window) -> f64 {
        window.page_y_offset().unwrap_or(0.0)
    }

    /// Whether the primary pointer hovers precisely (mouse, trackpad).
    #[must_use]
    pub fn pointer_is_fine(window: &Window) -> bool {
        window
            .match_media(FINE_POINTER_QUERY)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }

    /// Attach a listener for the life of the page.
    ///
    /// # Errors
    ///
    /// Propagates the browser's rejection of the listener.
    pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<(), DomError>
    where
        E: FromWasmAbi + 'static,
    {
        let cb = Closure::<dyn FnMut(E)>::new(handler);
        target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
        cb.forget();
        Ok(())
    }

    /// [`listen`], marked passive so scrolling never waits on the handler.
    ///
    /// # Errors
    ///
    /// Propagates the browser's rejection of the listener.
    pub fn listen_passive<E>(
        target: &EventTarget,
        event: &str,
        handler: impl FnMut(E) + 'static,
    ) -> Result<(), DomError>
    where
        E: FromWasmAbi + 'static,
    {
        let cb = Closure::<dyn FnMut(E)>::new(handler);
        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            cb.as_ref().unchecked_ref(),
            &opts,
        )?;
        cb.forget();
        Ok(())
    }
}
