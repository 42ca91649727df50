use super::super::state::{App, MarqueeId};
use super::Effect;
use tracing::info;

impl App {
    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        let next = self.config.theme.toggled();
        info!(theme = %next, "Toggled theme");
        self.config.theme = next;
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_toggle_section(&mut self, id: MarqueeId, effects: &mut Vec<Effect>) {
        let enabled = !self.section(id).is_mounted();
        if enabled {
            self.mount_section(id);
        } else {
            self.unmount_section(id);
        }
        self.set_section_enabled(id, enabled);
        info!(section = id.name(), visible = enabled, "Toggled section");
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        if width.is_finite() && width > 0.0 {
            self.config.window_width = width;
        }
        if height.is_finite() && height > 0.0 {
            self.config.window_height = height;
        }
    }
}
