// Calendar Timeline Library
// Layout and pointer interaction for day/week time grids

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
