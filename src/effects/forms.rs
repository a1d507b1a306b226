use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const FIELD_SELECTOR: &str = ".contact-section input, .contact-section textarea";
const FILLED_BORDER: &str = "var(--primary-300)";
const EMPTY_BORDER: &str = "var(--glass-border)";

fn field_value(el: &web::HtmlElement) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Focus scale and filled/empty border colour on contact form fields.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let fields = dom::query_all(document, FIELD_SELECTOR);
    for field in &fields {
        let el = field.clone();
        dom::on(field, "focus", move |_: web::Event| {
            dom::set_transform(&el, "scale(1.02)");
        });
        let el = field.clone();
        dom::on(field, "blur", move |_: web::Event| {
            dom::set_transform(&el, "scale(1)");
        });
        let el = field.clone();
        dom::on(field, "input", move |_: web::Event| {
            let border = if field_value(&el).is_empty() {
                EMPTY_BORDER
            } else {
                FILLED_BORDER
            };
            dom::set_style(&el, "border-color", border);
        });
    }
    log::debug!("[forms] {} fields enhanced", fields.len());
    Ok(())
}
