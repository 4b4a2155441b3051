use a11ybar_core::MaskBands;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Vertical pointer position, already clamped to the container.
    pub pointer_y: f64,
    pub page_height: f64,
}

/// Two shaded bands leaving a clear strip around the pointer.
#[function_component(ReadingMask)]
pub fn reading_mask(p: &Props) -> Html {
    let bands = MaskBands::around(p.pointer_y, p.page_height);
    let top = format!("top:0;height:{}px", bands.top_height);
    let bottom = format!("top:{}px;height:{}px", bands.bottom_top, bands.bottom_height);

    html! {
      <div class="reading-mask" aria-hidden="true">
        <div class="reading-mask__band reading-mask__band--top" style={top}></div>
        <div class="reading-mask__band reading-mask__band--bottom" style={bottom}></div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn bands_surround_the_pointer() {
        let props = Props {
            pointer_y: 200.0,
            page_height: 800.0,
        };
        let html = block_on(LocalServerRenderer::<ReadingMask>::with_props(props).render());
        assert!(html.contains("top:0;height:150px"));
        assert!(html.contains("top:250px;height:600px"));
    }

    #[test]
    fn top_band_collapses_near_the_top() {
        let props = Props {
            pointer_y: 10.0,
            page_height: 800.0,
        };
        let html = block_on(LocalServerRenderer::<ReadingMask>::with_props(props).render());
        assert!(html.contains("top:0;height:0px"));
    }
}
