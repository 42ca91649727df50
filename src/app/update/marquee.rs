use super::super::state::{App, MarqueeId};
use super::Effect;
use crate::marquee::MarqueeInput;
use std::time::Instant;
use tracing::debug;

impl App {
    pub(super) fn handle_frame(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        for (id, marquee) in self.mounted_marquees_mut() {
            if let Some(offset) = marquee.tick(now) {
                effects.push(Effect::ScrollTo { id, offset });
            }
        }
    }

    pub(super) fn handle_marquee_input(
        &mut self,
        id: MarqueeId,
        input: MarqueeInput,
        effects: &mut Vec<Effect>,
    ) {
        let cursor_x = self.cursor_x;
        let Some(marquee) = self.section_mut(id).marquee_mut() else {
            return;
        };
        match input {
            MarqueeInput::PointerEntered => marquee.pointer_entered(),
            MarqueeInput::PointerExited => marquee.pointer_exited(),
            MarqueeInput::PointerPressed => match cursor_x {
                Some(x) => marquee.press(x),
                None => debug!(marquee = id.name(), "Ignoring press without a cursor position"),
            },
            MarqueeInput::Measured {
                content_width,
                viewport_width,
                scroll_x,
            } => {
                marquee.scrolled(scroll_x);
                if let Some(offset) = marquee.measured(content_width, viewport_width) {
                    effects.push(Effect::ScrollTo { id, offset });
                }
            }
        }
    }

    /// Window-wide pointer motion. Active drags receive it even when the
    /// cursor has left their strip.
    pub(super) fn handle_cursor_moved(&mut self, x: f32, effects: &mut Vec<Effect>) {
        self.cursor_x = Some(x);
        for (id, marquee) in self.mounted_marquees_mut() {
            if let Some(offset) = marquee.drag_to(x) {
                effects.push(Effect::ScrollTo { id, offset });
            }
        }
    }

    pub(super) fn handle_pointer_released(&mut self) {
        for (_, marquee) in self.mounted_marquees_mut() {
            marquee.release();
        }
    }

    pub(super) fn handle_cursor_left_window(&mut self) {
        self.cursor_x = None;
        for (_, marquee) in self.mounted_marquees_mut() {
            marquee.cancel();
        }
    }

    pub(super) fn handle_viewport_resized(&mut self, now: Instant) {
        for (_, marquee) in self.mounted_marquees_mut() {
            marquee.viewport_resized(now);
        }
    }

    pub(super) fn handle_window_focused(&mut self) {
        debug!("Window regained focus; dropping elapsed frame time");
        for (_, marquee) in self.mounted_marquees_mut() {
            marquee.resync();
        }
    }

    pub(super) fn handle_focus_step(&mut self, forward: bool) {
        let order: Vec<MarqueeId> = MarqueeId::ALL
            .into_iter()
            .filter(|id| self.section(*id).is_mounted() && self.item_count(*id) > 0)
            .collect();
        let current = self
            .focus
            .and_then(|focused| order.iter().position(|id| *id == focused));
        let next = match (current, forward) {
            (None, true) => order.first().copied(),
            (None, false) => order.last().copied(),
            (Some(idx), true) => order.get(idx + 1).copied(),
            (Some(idx), false) => idx.checked_sub(1).and_then(|prev| order.get(prev).copied()),
        };
        self.set_focus(next);
    }

    pub(in crate::app) fn set_focus(&mut self, next: Option<MarqueeId>) {
        if self.focus == next {
            return;
        }
        if let Some(marquee) = self
            .focus
            .and_then(|previous| self.section_mut(previous).marquee_mut())
        {
            marquee.focus_lost();
        }
        self.focus = next;
        if let Some(marquee) = next.and_then(|id| self.section_mut(id).marquee_mut()) {
            marquee.focus_gained();
        }
        debug!(focus = ?next.map(MarqueeId::name), "Keyboard focus moved");
    }
}
