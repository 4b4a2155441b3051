use super::focus::{keydown_handler, use_focus_management};
use crate::components::heading_tree::HeadingTree;
use crate::i18n;
use crate::input::tab_step;
use a11ybar_core::{PageStructure, Theme};
use std::rc::Rc;
use yew::prelude::*;

pub const DIALOG_ID: &str = "a11ybar-page-structure";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Links,
    Headings,
}

impl Tab {
    const ALL: [Self; 2] = [Self::Links, Self::Headings];

    const fn index(self) -> usize {
        match self {
            Self::Links => 0,
            Self::Headings => 1,
        }
    }

    const fn key(self) -> &'static str {
        match self {
            Self::Links => "links",
            Self::Headings => "headings",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub theme: Theme,
    /// Taken when the dialog opened; `None` renders as an empty page.
    #[prop_or_default]
    pub structure: Option<Rc<PageStructure>>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub initial_tab: Tab,
}

#[function_component(PageStructureDialog)]
pub fn page_structure_dialog(p: &Props) -> Html {
    let ref_node = use_node_ref();
    let tab = {
        let initial = p.initial_tab;
        use_state(move || initial)
    };

    use_focus_management(p.open, ref_node.clone());

    if !p.open {
        return html! {};
    }

    let skin = crate::theme::skin(p.theme);
    let structure = p.structure.clone().unwrap_or_default();
    let on_keydown = keydown_handler(&ref_node, p.on_close.clone());
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_tab_keys = {
        let tab = tab.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(next) = tab_step(&e.key(), tab.index(), Tab::ALL.len()) {
                e.prevent_default();
                tab.set(Tab::ALL[next]);
            }
        })
    };

    let tab_button = |which: Tab| {
        let selected = *tab == which;
        let onclick = {
            let tab = tab.clone();
            Callback::from(move |_: MouseEvent| tab.set(which))
        };
        html! {
          <button
            type="button"
            role="tab"
            id={format!("{DIALOG_ID}-tab-{}", which.key())}
            class={if selected { skin.tab_active } else { skin.tab }}
            aria-selected={selected.to_string()}
            aria-controls={format!("{DIALOG_ID}-panel")}
            tabindex={if selected { "0" } else { "-1" }}
            {onclick}
          >
            { i18n::t(&format!("pageStructure.{}", which.key())) }
          </button>
        }
    };

    let body = match *tab {
        Tab::Links if structure.links.is_empty() => html! {
          <p class="page-structure__empty">{ i18n::t("pageStructure.noLinks") }</p>
        },
        Tab::Links => html! {
          <ul class="page-structure__links">
            { for structure.links.iter().map(|link| html! {
                <li><a href={link.href.clone()}>{ link.text.clone() }</a></li>
            }) }
          </ul>
        },
        Tab::Headings if structure.headings.is_empty() => html! {
          <p class="page-structure__empty">{ i18n::t("pageStructure.noHeadings") }</p>
        },
        Tab::Headings => html! {
          <HeadingTree nodes={Rc::new(structure.headings.clone())} theme={p.theme} />
        },
    };

    html! {
      <div
        id={DIALOG_ID}
        class={skin.dialog}
        role="dialog"
        aria-modal="true"
        aria-labelledby={format!("{DIALOG_ID}-title")}
        dir={i18n::dir()}
        ref={ref_node}
        onkeydown={on_keydown}
      >
        <div class="page-structure__header">
          <span id={format!("{DIALOG_ID}-title")} class="page-structure__title">
            { i18n::t("pageStructure.title") }
          </span>
          <button type="button" class="page-structure__close" aria-label={i18n::t("close")} onclick={close}>
            { "×" }
          </button>
        </div>
        <div role="tablist" class="page-structure__tabs" onkeydown={on_tab_keys}>
          { tab_button(Tab::Links) }
          { tab_button(Tab::Headings) }
        </div>
        <div
          role="tabpanel"
          id={format!("{DIALOG_ID}-panel")}
          aria-labelledby={format!("{DIALOG_ID}-tab-{}", tab.key())}
          class="page-structure__body"
        >
          { body }
        </div>
      </div>
    }
}
