//! Keyboard translation from raw egui events into flow events.

use flow_core::{FlowEvent, Key};

pub fn key_events(events: &[egui::Event]) -> Vec<FlowEvent> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Escape => Some(FlowEvent::KeyPressed(Key::Escape)),
                egui::Key::Enter => Some(FlowEvent::KeyPressed(Key::Enter)),
                _ => None,
            },
            _ => None,
        })
        .collect()
}
