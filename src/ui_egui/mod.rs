// egui-facing timeline interaction: grid geometry, gestures and views

pub mod drag;
pub mod grid;
pub mod input;
pub mod interaction;
pub mod resize;
pub mod timers;
pub mod views;
