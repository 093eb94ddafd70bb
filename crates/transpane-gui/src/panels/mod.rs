pub mod controls;
pub mod dual_pane;
mod input;
pub mod menu_bar;
mod overlay;
pub mod status;
