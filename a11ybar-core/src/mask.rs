//! Reading mask geometry.
//!
//! The mask shades the page above and below a horizontal band centred on the
//! pointer. Positions are CSS pixels relative to the viewport.

use serde::Serialize;

/// Distance kept between the pointer and the bottom of the tracked container,
/// and half the height of the clear band.
pub const MASK_MARGIN: f64 = 50.0;

/// Clamp a pointer position so the band never runs past the bottom of the
/// container. Without a known height the pointer is used as is.
#[must_use]
pub fn track_pointer(container_height: Option<f64>, client_y: f64) -> f64 {
    match container_height {
        Some(height) if height > 0.0 && height - client_y <= MASK_MARGIN => height - MASK_MARGIN,
        _ => client_y,
    }
}

/// The two shaded bands around the clear strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaskBands {
    pub top_height: f64,
    pub bottom_top: f64,
    pub bottom_height: f64,
}

impl MaskBands {
    #[must_use]
    pub fn around(pointer_y: f64, page_height: f64) -> Self {
        Self {
            top_height: (pointer_y - MASK_MARGIN).max(0.0),
            bottom_top: pointer_y + MASK_MARGIN,
            bottom_height: (page_height - pointer_y).max(0.0),
        }
    }
}
