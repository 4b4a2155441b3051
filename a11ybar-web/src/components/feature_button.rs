use a11ybar_core::{Feature, Theme};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub feature: Feature,
    pub label: AttrValue,
    pub active: bool,
    /// One-based position in the panel; doubles as the tab order.
    pub position: usize,
    pub theme: Theme,
    pub on_toggle: Callback<Feature>,
}

#[function_component(FeatureButton)]
pub fn feature_button(p: &Props) -> Html {
    let skin = crate::theme::skin(p.theme);
    let onclick = {
        let on_toggle = p.on_toggle.clone();
        let feature = p.feature;
        Callback::from(move |_: MouseEvent| on_toggle.emit(feature))
    };

    html! {
      <button
        type="button"
        class={skin.button_class(p.active)}
        data-feature={p.feature.as_str()}
        tabindex={p.position.to_string()}
        aria-pressed={p.active.to_string()}
        aria-label={p.label.clone()}
        {onclick}
      >
        <i class={skin.icon(p.feature)} aria-hidden="true"></i>
        <span class="accessibility-button__label">{ p.label.clone() }</span>
      </button>
    }
}
