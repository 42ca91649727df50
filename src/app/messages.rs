use super::state::MarqueeId;
use crate::marquee::MarqueeInput;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    Frame(Instant),
    Marquee(MarqueeId, MarqueeInput),
    CursorMoved { x: f32 },
    PointerReleased,
    CursorLeftWindow,
    WindowResized { width: f32, height: f32 },
    WindowFocused,
    KeyPressed { key: Key, modifiers: Modifiers },
    FocusNext,
    FocusPrevious,
    ClearFocus,
    ToggleTheme,
    ToggleSection(MarqueeId),
    SafeQuit,
}
