use super::*;

#[test]
fn errors_name_the_element() {
    assert_eq!(DomError::MissingElement("card3d").to_string(), "missing element #card3d");
    assert_eq!(
        DomError::MissingChild("submit button", "contactForm").to_string(),
        "missing submit button inside #contactForm"
    );
    assert_eq!(DomError::WrongType("contactForm").to_string(), "#contactForm is not the expected element type");
}

#[test]
fn timer_ms_rounds_and_clamps() {
    assert_eq!(timer_ms(360.0), 360);
    assert_eq!(timer_ms(119.6), 120);
    assert_eq!(timer_ms(-5.0), 0);
    assert_eq!(timer_ms(f64::NAN), 0);
    assert_eq!(timer_ms(f64::INFINITY), u32::MAX);
}
