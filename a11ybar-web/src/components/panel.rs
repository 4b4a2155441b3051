//! The floating menu: title, reset button and one button per offered feature.

use super::feature_button::FeatureButton;
use crate::i18n;
use a11ybar_core::{CatalogEntry, Feature, FlagSet, Theme};
use std::rc::Rc;
use yew::prelude::*;

pub const PANEL_ID: &str = "a11ybar-panel";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
    pub entries: Rc<Vec<CatalogEntry>>,
    pub flags: FlagSet,
    pub reset_enabled: bool,
    pub on_toggle: Callback<Feature>,
    pub on_reset: Callback<()>,
}

#[function_component(Panel)]
pub fn panel(p: &Props) -> Html {
    let skin = crate::theme::skin(p.theme);
    let on_reset = {
        let cb = p.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let title = format!("{} {}", i18n::t("accessibilityMenu"), i18n::t("shortcut"));

    html! {
      <div id={PANEL_ID} class={skin.panel} role="region" aria-labelledby="a11ybar-title">
        <div class={skin.header}>
          <span id="a11ybar-title" class="a11ybar__title">{ title }</span>
          <button
            type="button"
            class={skin.reset}
            disabled={!p.reset_enabled}
            onclick={on_reset}
          >
            { i18n::t("reset") }
          </button>
        </div>
        <div class={skin.grid}>
          { for p.entries.iter().enumerate().map(|(idx, entry)| html! {
              <div class={skin.cell} key={entry.feature.as_str()}>
                <FeatureButton
                  feature={entry.feature}
                  label={AttrValue::from(i18n::t(entry.label_key))}
                  active={p.flags.get(entry.feature)}
                  position={idx + 1}
                  theme={p.theme}
                  on_toggle={p.on_toggle.clone()}
                />
              </div>
          }) }
        </div>
      </div>
    }
}
