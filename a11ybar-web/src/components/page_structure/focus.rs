use crate::dom;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::hook;
use yew::prelude::*;

const FOCUSABLE_QUERY: &str =
    "button, [href], input, textarea, select, [tabindex]:not([tabindex='-1'])";

fn focusable(container: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_QUERY) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Move focus into the dialog when it opens and hand it back to whatever had
/// it before once it closes.
#[hook]
pub fn use_focus_management(open: bool, container_ref: NodeRef) {
    use_effect_with((open, container_ref), move |(open, container_ref)| {
        let mut prev_focus: Option<HtmlElement> = None;
        let focus_target = if cfg!(target_arch = "wasm32") && *open {
            prev_focus = dom::document()
                .and_then(|doc| doc.active_element())
                .and_then(|e| e.dyn_into::<HtmlElement>().ok());
            container_ref
                .cast::<Element>()
                .and_then(|el| focusable(&el).into_iter().next())
        } else {
            None
        };

        if let Some(first) = focus_target {
            let _ = first.focus();
        }
        move || {
            if let Some(el) = prev_focus {
                let _ = el.focus();
            }
        }
    });
}

/// Escape closes; Tab and Shift+Tab wrap around inside `container_ref`.
pub fn keydown_handler(container_ref: &NodeRef, on_close: Callback<()>) -> Callback<KeyboardEvent> {
    let container_ref = container_ref.clone();
    Callback::from(move |e: KeyboardEvent| {
        if !cfg!(target_arch = "wasm32") {
            return;
        }
        if e.key() == "Escape" {
            e.prevent_default();
            on_close.emit(());
            return;
        }
        if e.key() != "Tab" {
            return;
        }
        let Some(container) = container_ref.cast::<Element>() else {
            return;
        };
        let items = focusable(&container);
        let (Some(first), Some(last)) = (items.first(), items.last()) else {
            return;
        };
        let Some(active) = dom::document().and_then(|d| d.active_element()) else {
            return;
        };
        if !container.contains(Some(&active)) {
            e.prevent_default();
            let _ = first.focus();
            return;
        }
        let first_el: &Element = first.unchecked_ref();
        let last_el: &Element = last.unchecked_ref();
        if e.shift_key() && active == *first_el {
            e.prevent_default();
            let _ = last.focus();
        } else if !e.shift_key() && active == *last_el {
            e.prevent_default();
            let _ = first.focus();
        }
    })
}
