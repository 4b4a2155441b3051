pub mod feature_button;
pub mod heading_tree;
pub mod page_structure;
pub mod panel;
pub mod reading_mask;
pub mod toolbar;
