//! Application state module

mod app_state;
mod forms;
mod navigation;
mod page_layout;
mod portfolio;
mod reveal;
mod splash_state;
mod ui_area;

pub use app_state::*;
pub use forms::*;
pub use navigation::*;
pub use page_layout::*;
pub use portfolio::*;
pub use splash_state::*;
pub use ui_area::*;
