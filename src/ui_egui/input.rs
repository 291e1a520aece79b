//! Translation of raw egui input events into timeline pointer input.

use egui::{Event, Key, PointerButton, Pos2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down(Pos2),
    Move(Pos2),
    Up(Pos2),
    /// Pointer left the surface or the gesture was aborted (Escape)
    Cancel,
}

/// Primary-button presses/releases, moves and cancellations, in order.
pub fn pointer_events(events: &[Event]) -> Vec<PointerInput> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                ..
            } => Some(if *pressed {
                PointerInput::Down(*pos)
            } else {
                PointerInput::Up(*pos)
            }),
            Event::PointerMoved(pos) => Some(PointerInput::Move(*pos)),
            Event::PointerGone => Some(PointerInput::Cancel),
            Event::Key {
                key: Key::Escape,
                pressed: true,
                ..
            } => Some(PointerInput::Cancel),
            _ => None,
        })
        .collect()
}
