//! Example: hide the page scrollbar while a modal is open

use fos_dom::{Document, ElementGeometry};
use fos_scrollbar::ScrollbarCompensator;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging (RUST_LOG=fos_scrollbar=trace for per-element detail)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new("https://example.com/");
    doc.set_viewport_width(1280.0);

    let html = doc.document_element();
    doc.set_geometry(html, ElementGeometry::from_widths(1280.0, 1263.0));

    let navbar = doc.create_element("nav");
    doc.set_attribute(navbar, "class", "navbar fixed-top");
    doc.set_geometry(navbar, ElementGeometry::from_widths(1263.0, 1263.0));
    doc.append_child(doc.body(), navbar);

    let mut scrollbar = ScrollbarCompensator::new(&doc, None);
    println!("fos-scrollbar v{}", fos_scrollbar::VERSION);
    println!("Scrollbar width: {}px", scrollbar.width(&doc));

    if scrollbar.is_overflowing(&doc) {
        scrollbar.hide(&mut doc);
        println!("Modal open:   html {{ {} }}", doc.style(html).map(|s| s.css_text()).unwrap_or_default());
        println!("              nav  {{ {} }}", doc.style(navbar).map(|s| s.css_text()).unwrap_or_default());

        scrollbar.reset(&mut doc);
        println!("Modal closed: html {{ {} }}", doc.style(html).map(|s| s.css_text()).unwrap_or_default());
    }
}
