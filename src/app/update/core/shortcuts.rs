use super::super::super::messages::Message;
use super::super::super::state::{App, MarqueeId};
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Tab) => {
                return Some(if modifiers.shift() {
                    Message::FocusPrevious
                } else {
                    Message::FocusNext
                });
            }
            Key::Named(key::Named::Escape) => return Some(Message::ClearFocus),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(&self.config.key_safe_quit, "q", &pressed, modifiers) {
            Some(Message::SafeQuit)
        } else if Self::shortcut_matches(
            &self.config.key_toggle_theme,
            "ctrl+t",
            &pressed,
            modifiers,
        ) {
            Some(Message::ToggleTheme)
        } else if Self::shortcut_matches(
            &self.config.key_toggle_logos,
            "ctrl+l",
            &pressed,
            modifiers,
        ) {
            Some(Message::ToggleSection(MarqueeId::Logos))
        } else if Self::shortcut_matches(
            &self.config.key_toggle_testimonials,
            "ctrl+j",
            &pressed,
            modifiers,
        ) {
            Some(Message::ToggleSection(MarqueeId::Testimonials))
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let Some(required_key) = required_key else {
            return false;
        };
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(App::normalize_shortcut_token(" Ctrl+T ", "x"), "ctrl+t");
    }

    #[test]
    fn empty_binding_uses_fallback() {
        assert!(App::shortcut_matches("  ", "ctrl+l", "l", Modifiers::CTRL));
    }

    #[test]
    fn matches_ctrl_t_shortcut() {
        assert!(App::shortcut_matches("ctrl+t", "x", "t", Modifiers::CTRL));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "ctrl+t",
            "x",
            "t",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn modifier_only_binding_never_matches() {
        assert!(!App::shortcut_matches("ctrl+", "x", "x", Modifiers::CTRL));
    }
}
