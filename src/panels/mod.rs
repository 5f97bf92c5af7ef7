mod menu_bar;
mod tools_panel;

pub use menu_bar::{MenuBar, about_window};
pub use tools_panel::{ToolsPanel, keep_inside};
