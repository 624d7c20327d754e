use super::*;

#[test]
fn find_all_keeps_document_order() {
    let mut page = MemoryPage::new();
    page.add(Marker::StatValue, MemoryElement::new("1"));
    page.add(Marker::Reveal, MemoryElement::new("x"));
    page.add(Marker::StatValue, MemoryElement::new("2"));
    let texts: Vec<_> = page.find_all(Marker::StatValue).iter().map(PageElement::text).collect();
    assert_eq!(texts, vec!["1", "2"]);
    assert!(page.find_all(Marker::Magnetic).is_empty());
}

#[test]
fn clones_share_state() {
    let mut page = MemoryPage::new();
    let el = page.add(Marker::StatValue, MemoryElement::new("47"));
    page.find_all(Marker::StatValue)[0].set_text("0");
    assert_eq!(el.text(), "0");
}

#[test]
fn sibling_index_counts_marked_siblings_only() {
    let mut page = MemoryPage::new();
    let a = page.add(Marker::Reveal, MemoryElement::new("").under(1));
    let other = page.add(Marker::Reveal, MemoryElement::new("").under(2));
    page.add(Marker::StatValue, MemoryElement::new("47").under(1));
    let b = page.add(Marker::Reveal, MemoryElement::new("").under(1));
    assert_eq!(page.sibling_index(&a, Marker::Reveal), 0);
    assert_eq!(page.sibling_index(&other, Marker::Reveal), 0);
    assert_eq!(page.sibling_index(&b, Marker::Reveal), 1);
}

#[test]
fn attributes_and_regions() {
    let a = MemoryElement::new("")
        .with_attr("data-reveal-delay", "2")
        .inside(Marker::Hero)
        .under(1);
    let b = MemoryElement::new("").under(1);
    assert_eq!(a.attribute("data-reveal-delay").as_deref(), Some("2"));
    assert_eq!(a.attribute("missing"), None);
    assert!(a.within(Marker::Hero));
    assert!(!b.within(Marker::Hero));
}

#[test]
fn selectors_are_css() {
    assert_eq!(Marker::Reveal.selector(), "[data-reveal]");
    assert_eq!(Marker::AnchorLink.selector(), "a[href^=\"#\"]");
}
