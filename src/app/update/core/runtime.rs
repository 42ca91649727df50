use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::config::save_config;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::mouse;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use tracing::{info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollTo { id, offset } => {
                scrollable::scroll_to(id.scroll_id(), AbsoluteOffset { x: offset, y: 0.0 })
            }
            Effect::SaveConfig => {
                if let Err(err) = save_config(&self.config_path, &self.config) {
                    warn!("Failed to persist config: {err:?}");
                }
                Task::none()
            }
            Effect::QuitSafely => {
                info!("Quitting");
                if let Err(err) = save_config(&self.config_path, &self.config) {
                    warn!("Failed to persist config on exit: {err:?}");
                }
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    // Pointer events are consumed whether or not a widget captured them so
    // that a drag keeps tracking the cursor outside its strip.
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            return Some(Message::CursorMoved { x: position.x });
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            return Some(Message::PointerReleased);
        }
        Event::Mouse(mouse::Event::CursorLeft) => return Some(Message::CursorLeftWindow),
        _ => {}
    }

    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(window::Event::Focused) => Some(Message::WindowFocused),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
