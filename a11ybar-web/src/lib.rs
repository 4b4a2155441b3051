#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod input;
pub mod page_style;
pub mod storage;
pub mod structure;
pub mod theme;

pub use components::toolbar::{Toolbar, ToolbarProps};

/// Id of the element the widget mounts into when started from JavaScript.
pub const MOUNT_ID: &str = "a11ybar-root";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the toolbar next to the host element `content_id`, which becomes the
/// content wrapper: feature classes land on it and the reading mask follows
/// the pointer over it. `config` is a `WidgetConfig`-shaped object or
/// `undefined`.
///
/// # Errors
/// Fails when `config` does not deserialize, when there is no document, when
/// `content_id` names no element, or when the toolbar is already mounted. One
/// toolbar per page.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = mountToolbar)]
pub fn mount_toolbar(content_id: &str, config: JsValue) -> Result<(), JsValue> {
    let config: a11ybar_core::WidgetConfig = if config.is_undefined() || config.is_null() {
        a11ybar_core::WidgetConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };

    let doc = dom::document().ok_or_else(|| JsValue::from_str("document unavailable"))?;
    if doc.get_element_by_id(content_id).is_none() {
        return Err(mount_error(&format!("no element with id {content_id:?}")));
    }
    if doc.get_element_by_id(MOUNT_ID).is_some() {
        return Err(mount_error(&format!("already mounted into #{MOUNT_ID}")));
    }
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    let host = doc.create_element("div")?;
    host.set_id(MOUNT_ID);
    body.append_child(&host)?;

    let props = ToolbarProps {
        config,
        content_id: Some(yew::AttrValue::from(content_id.to_string())),
        children: yew::Children::default(),
    };
    yew::Renderer::<Toolbar>::with_root_and_props(host, props).render();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn mount_error(reason: &str) -> JsValue {
    let message = format!("mountToolbar: {reason}");
    log::error!("{message}");
    dom::console_error(&message);
    JsValue::from_str(&message)
}

/// Snapshot the current page's links and heading forest as a plain JS object.
///
/// # Errors
/// Fails only if the snapshot cannot be converted to a JS value.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = extractPageStructure)]
pub fn extract_page_structure() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&structure::snapshot()).map_err(JsValue::from)
}
