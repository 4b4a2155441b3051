// Accessibility helpers for the widget's own chrome

/// Id of the polite live region the toolbar announces changes through.
pub const STATUS_REGION_ID: &str = "a11ybar-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected with the widget.
/// Includes focus ring styles and screen reader helper classes.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ".a11ybar :focus{outline:3px solid #00D9C0;outline-offset:2px} .a11ybar .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Updates the text content of the toolbar's status element if present.
/// This provides announcements to assistive technology users.
pub fn set_status(msg: &str) {
    if let Some(node) = crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}
