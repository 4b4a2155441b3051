mod focus;
mod view;


pub use view::{PageStructureDialog, Props, Tab};
