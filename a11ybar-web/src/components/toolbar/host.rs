//! Wiring to DOM the toolbar does not render itself: the window-wide shortcut
//! and, when mounted from JavaScript, the host's content element.

use super::handlers::pointer_position;
use super::state::ToolbarState;
use crate::dom::{self, Listener};
use crate::input::is_panel_shortcut;
use a11ybar_core::Feature;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::hook;
use yew::prelude::*;

/// Ctrl+U anywhere on the page opens or closes the panel.
#[hook]
pub fn use_panel_shortcut(panel_open: UseStateHandle<bool>) {
    use_effect_with(*panel_open, move |open| {
        let open = *open;
        let listener = dom::window().and_then(|win| {
            Listener::attach(&win, "keydown", move |event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if is_panel_shortcut(&key.key(), key.ctrl_key(), key.alt_key(), key.meta_key()) {
                    key.prevent_default();
                    panel_open.set(!open);
                }
            })
        });
        move || drop(listener)
    });
}

/// Every class a feature can put on the content wrapper.
fn feature_classes() -> impl Iterator<Item = &'static str> {
    Feature::ALL.into_iter().filter_map(Feature::css_class)
}

/// Mirror the derived class list onto the host element `content_id` and follow
/// the pointer over it while the reading mask is on.
#[hook]
pub fn use_host_content(content_id: Option<AttrValue>, state: &ToolbarState) {
    let classes = state.content_classes();
    use_effect_with((content_id.clone(), classes), |(content_id, classes)| {
        let target = content_id
            .as_ref()
            .and_then(|id| dom::document()?.get_element_by_id(id));
        if let Some(el) = target {
            let active: Vec<&str> = classes.split_whitespace().collect();
            let list = el.class_list();
            for class in feature_classes() {
                let _ = list.toggle_with_force(class, active.contains(&class));
            }
        }
    });

    let tracking = state.flags.get(Feature::ReadingMask);
    let state = state.clone();
    use_effect_with((content_id, tracking), move |(content_id, tracking)| {
        let listener = if *tracking {
            content_id
                .as_ref()
                .and_then(|id| dom::document()?.get_element_by_id(id))
                .and_then(|el| {
                    let container = el.clone();
                    Listener::attach(&el, "mousemove", move |event| {
                        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        if let Some(y) = pointer_position(&state, Some(&container), mouse.client_y()) {
                            state.pointer_y.set(y);
                        }
                    })
                })
        } else {
            None
        };
        move || drop(listener)
    });
}
