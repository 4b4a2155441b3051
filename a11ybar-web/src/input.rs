// Keyboard mapping for the toolbar's global shortcut

/// Ctrl+U opens and closes the panel. Matches on `KeyboardEvent.key`, so both
/// cases count; Alt and Meta chords are left to the browser.
#[must_use]
pub fn is_panel_shortcut(key: &str, ctrl: bool, alt: bool, meta: bool) -> bool {
    ctrl && !alt && !meta && key.eq_ignore_ascii_case("u")
}

// Tab strip navigation: ArrowLeft/ArrowRight wrap between the two tabs.
#[must_use]
pub fn tab_step(key: &str, current: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match key {
        "ArrowRight" => Some((current + 1) % count),
        "ArrowLeft" => Some((current + count - 1) % count),
        "Home" => Some(0),
        "End" => Some(count - 1),
        _ => None,
    }
}
