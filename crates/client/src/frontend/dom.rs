//! Reading seed data and settings out of the server-rendered page.

use leptos::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::StorefrontConfig;
use crate::csrf::{CSRF_FIELD, CsrfToken};

pub fn root(id: &str) -> Option<HtmlElement> {
    document().get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub fn data(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(&format!("data-{name}"))
}

/// The hidden token field rendered into every form.
pub fn csrf_token() -> Option<CsrfToken> {
    let selector = format!("input[name='{CSRF_FIELD}']");
    let input = document().query_selector(&selector).ok()??;
    CsrfToken::new(input.get_attribute("value")?).ok()
}

/// Settings come from `data-storefront-*` attributes on `<body>`; the base
/// URL defaults to the page's own origin.
pub fn read_config() -> anyhow::Result<StorefrontConfig> {
    let body = document().body();
    let origin = window().location().origin().ok();

    StorefrontConfig::from_lookup(|key| {
        let attr = format!("data-{}", key.to_lowercase().replace('_', "-"));
        let value = body.as_ref().and_then(|b| b.get_attribute(&attr));
        if key == "STOREFRONT_BASE_URL" {
            return value.or_else(|| origin.clone());
        }
        value
    })
}
