use crate::page_style::DocumentStyle;
use crate::storage::LocalFlagStore;
use a11ybar_core::{Controller, FlagSet, PageStructure, WidgetConfig};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

pub type LiveController = Controller<LocalFlagStore, DocumentStyle>;

#[derive(Clone)]
pub struct ToolbarState {
    pub controller: Rc<RefCell<LiveController>>,
    /// Render copy of the controller's flags; replaced after every change.
    pub flags: UseStateHandle<FlagSet>,
    pub panel_open: UseStateHandle<bool>,
    pub pointer_y: UseStateHandle<f64>,
    pub structure: UseStateHandle<Option<Rc<PageStructure>>>,
}

#[hook]
pub fn use_toolbar_state(config: &WidgetConfig) -> ToolbarState {
    let controller = {
        let config = config.clone();
        use_mut_ref(move || {
            let mut controller = Controller::new(LocalFlagStore, DocumentStyle, &config);
            controller.initialize();
            controller
        })
    };
    let flags = {
        let controller = controller.clone();
        use_state(move || controller.borrow().flags())
    };

    ToolbarState {
        controller,
        flags,
        panel_open: use_state(|| false),
        pointer_y: use_state(|| 0.0_f64),
        structure: use_state(|| None::<Rc<PageStructure>>),
    }
}

impl ToolbarState {
    #[must_use]
    pub fn reset_enabled(&self) -> bool {
        self.flags.any()
    }

    /// Space-separated classes for the content wrapper.
    #[must_use]
    pub fn content_classes(&self) -> String {
        self.flags
            .class_list()
            .into_iter()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
