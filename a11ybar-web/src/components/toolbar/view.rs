use super::handlers::{
    build_close_structure, build_pointer_move, build_reset, build_toggle, build_toggle_panel,
};
use super::host::{use_host_content, use_panel_shortcut};
use super::state::use_toolbar_state;
use crate::a11y::{STATUS_REGION_ID, visible_focus_css};
use crate::components::page_structure::PageStructureDialog;
use crate::components::panel::{PANEL_ID, Panel};
use crate::components::reading_mask::ReadingMask;
use crate::{dom, i18n};
use a11ybar_core::{Feature, WidgetConfig, offered};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    #[prop_or_default]
    pub config: WidgetConfig,
    /// Id of a host element to treat as the content wrapper. Without it the
    /// toolbar wraps `children` itself.
    #[prop_or_default]
    pub content_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Toolbar)]
pub fn toolbar(p: &Props) -> Html {
    use_memo(p.config.language.clone(), |lang| i18n::set_lang(lang));

    let state = use_toolbar_state(&p.config);
    let content_ref = use_node_ref();
    use_panel_shortcut(state.panel_open.clone());
    use_host_content(p.content_id.clone(), &state);

    let skin = crate::theme::skin(p.config.theme);
    let entries = Rc::new(offered(state.controller.borrow().excluded()));

    let on_toggle = build_toggle(&state);
    let on_reset = build_reset(&state);
    let on_close_structure = build_close_structure(&state, on_toggle.clone());
    let on_launcher = {
        let toggle_panel = build_toggle_panel(&state);
        Callback::from(move |_: MouseEvent| toggle_panel.emit(()))
    };

    let panel_open = *state.panel_open;
    let flags = *state.flags;
    let mask = if flags.get(Feature::ReadingMask) {
        let page_height = dom::body().map_or(0.0, |b| f64::from(b.client_height()));
        html! { <ReadingMask pointer_y={*state.pointer_y} {page_height} /> }
    } else {
        html! {}
    };

    let content = if p.content_id.is_some() {
        html! {}
    } else {
        let classes = classes!(skin.content, state.content_classes());
        html! {
          <div
            class={classes}
            ref={content_ref.clone()}
            onmousemove={build_pointer_move(&state, &content_ref)}
          >
            { for p.children.iter() }
          </div>
        }
    };

    html! {
      <div class={skin.root} dir={i18n::dir()} lang={i18n::current_lang()}>
        <style>{ visible_focus_css() }</style>
        <button
          type="button"
          class={skin.launcher}
          aria-label={i18n::t("toggleMenu")}
          aria-expanded={panel_open.to_string()}
          aria-controls={PANEL_ID}
          onclick={on_launcher}
        >
          <i class={skin.launcher_icon} aria-hidden="true"></i>
        </button>
        if panel_open {
          <Panel
            theme={p.config.theme}
            {entries}
            {flags}
            reset_enabled={state.reset_enabled()}
            on_toggle={on_toggle}
            on_reset={on_reset}
          />
        }
        { content }
        { mask }
        <PageStructureDialog
          open={flags.get(Feature::PageStructure)}
          theme={p.config.theme}
          structure={(*state.structure).clone()}
          on_close={on_close_structure}
        />
        <div id={STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
      </div>
    }
}
