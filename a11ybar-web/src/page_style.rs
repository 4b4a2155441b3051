use crate::dom;
use a11ybar_core::PageStyle;

/// Writes page-wide styles to the live document: classes on `<body>`, inline
/// properties on `<html>`. Every call is a no-op outside a browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentStyle;

impl PageStyle for DocumentStyle {
    fn add_class(&self, class: &str) {
        if let Some(body) = dom::body()
            && let Err(err) = body.class_list().add_1(class)
        {
            log::warn!("could not add body class {class}: {}", dom::js_error_message(&err));
        }
    }

    fn remove_class(&self, class: &str) {
        if let Some(body) = dom::body() {
            let _ = body.class_list().remove_1(class);
        }
    }

    fn set_property(&self, name: &str, value: &str) {
        if let Some(root) = dom::root_element()
            && let Err(err) = root.style().set_property(name, value)
        {
            log::warn!("could not set {name} on root: {}", dom::js_error_message(&err));
        }
    }

    fn remove_property(&self, name: &str) {
        if let Some(root) = dom::root_element() {
            let _ = root.style().remove_property(name);
        }
    }
}
