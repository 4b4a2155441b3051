use super::state::ToolbarState;
use crate::a11y::set_status;
use crate::i18n;
use a11ybar_core::{Feature, FlagSet, PageStructure, catalog, track_pointer};
use std::collections::BTreeMap;
use std::rc::Rc;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

fn feature_label(feature: Feature) -> String {
    catalog()
        .iter()
        .find(|entry| entry.feature == feature)
        .map_or_else(|| feature.as_str().to_string(), |entry| i18n::t(entry.label_key))
}

fn announce(feature: Feature, on: bool) {
    let label = feature_label(feature);
    let mut args = BTreeMap::new();
    args.insert("feature", label.as_str());
    let key = if on { "status.on" } else { "status.off" };
    set_status(&i18n::tr(key, Some(&args)));
}

/// What to do with the held page-structure snapshot after a flag change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotAction {
    Take,
    Discard,
}

/// The snapshot lives exactly as long as the page-structure flag is on: it is
/// taken when the flag turns on and kept unchanged until it turns off.
#[must_use]
pub fn structure_action(flags: FlagSet, held: bool) -> Option<SnapshotAction> {
    match (flags.get(Feature::PageStructure), held) {
        (true, false) => Some(SnapshotAction::Take),
        (false, true) => Some(SnapshotAction::Discard),
        _ => None,
    }
}

fn sync_structure(structure: &UseStateHandle<Option<Rc<PageStructure>>>, flags: FlagSet) {
    match structure_action(flags, structure.is_some()) {
        Some(SnapshotAction::Take) => {
            structure.set(Some(Rc::new(crate::structure::snapshot())));
        }
        Some(SnapshotAction::Discard) => structure.set(None),
        None => {}
    }
}

pub fn build_toggle(state: &ToolbarState) -> Callback<Feature> {
    let controller = state.controller.clone();
    let flags = state.flags.clone();
    let structure = state.structure.clone();
    Callback::from(move |feature: Feature| {
        let next = {
            let mut ctl = controller.borrow_mut();
            if !ctl.toggle(feature) {
                return;
            }
            ctl.flags()
        };
        sync_structure(&structure, next);
        announce(feature, next.get(feature));
        flags.set(next);
    })
}

pub fn build_reset(state: &ToolbarState) -> Callback<()> {
    let controller = state.controller.clone();
    let flags = state.flags.clone();
    let structure = state.structure.clone();
    Callback::from(move |()| {
        let next = {
            let mut ctl = controller.borrow_mut();
            if !ctl.reset() {
                return;
            }
            ctl.flags()
        };
        sync_structure(&structure, next);
        set_status(&i18n::t("status.reset"));
        flags.set(next);
    })
}

pub fn build_toggle_panel(state: &ToolbarState) -> Callback<()> {
    let panel_open = state.panel_open.clone();
    Callback::from(move |()| panel_open.set(!*panel_open))
}

/// Closing the dialog is the same as switching the page-structure flag off.
pub fn build_close_structure(state: &ToolbarState, toggle: Callback<Feature>) -> Callback<()> {
    let controller = state.controller.clone();
    Callback::from(move |()| {
        let open = controller.borrow().is_on(Feature::PageStructure);
        if open {
            toggle.emit(Feature::PageStructure);
        }
    })
}

/// Clamped pointer position over `container`, or `None` while the reading
/// mask is off.
pub fn pointer_position(state: &ToolbarState, container: Option<&Element>, client_y: i32) -> Option<f64> {
    if !state.controller.borrow().tracks_pointer() {
        return None;
    }
    let height = container.map(|el| f64::from(el.client_height()));
    Some(track_pointer(height, f64::from(client_y)))
}

pub fn build_pointer_move(state: &ToolbarState, content_ref: &NodeRef) -> Callback<MouseEvent> {
    let state = state.clone();
    let content_ref = content_ref.clone();
    Callback::from(move |e: MouseEvent| {
        let container = content_ref.cast::<Element>();
        if let Some(y) = pointer_position(&state, container.as_ref(), e.client_y()) {
            state.pointer_y.set(y);
        }
    })
}
