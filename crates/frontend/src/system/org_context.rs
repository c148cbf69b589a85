use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Org scope for every admin API call.
///
/// The hosting page injects the id as a window global (`window.orgID`,
/// string or number); it is read once at mount and provided via context so
/// components and tests never reach for a module-level constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrgContext {
    pub org_id: String,
}

impl OrgContext {
    pub fn new(org_id: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
        }
    }

    pub fn from_window() -> Self {
        let raw = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(w.as_ref(), &JsValue::from_str("orgID")).ok());
        let org_id = match raw {
            Some(v) => v
                .as_string()
                .or_else(|| v.as_f64().map(|n| (n as i64).to_string()))
                .unwrap_or_default(),
            None => String::new(),
        };
        if org_id.is_empty() {
            log::warn!("window.orgID is not set; admin API calls will be unscoped");
        }
        Self { org_id }
    }
}

pub fn use_org() -> OrgContext {
    use_context::<OrgContext>().expect("OrgContext not found in context")
}
