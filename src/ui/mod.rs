/// UI module exports

pub mod app;
pub mod dom;
pub mod overflow_menu;
pub mod tab;
pub mod tab_strip;
