mod handlers;
mod host;
mod state;
mod view;


pub use state::{LiveController, ToolbarState, use_toolbar_state};
pub use view::{Props as ToolbarProps, Toolbar};
