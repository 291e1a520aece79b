// Module exports for models

pub mod event;
pub mod geometry;
pub mod settings;
