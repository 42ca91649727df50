use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use std::time::Instant;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Frame(now) => self.handle_frame(now, &mut effects),
            Message::Marquee(id, input) => self.handle_marquee_input(id, input, &mut effects),
            Message::CursorMoved { x } => self.handle_cursor_moved(x, &mut effects),
            Message::PointerReleased => self.handle_pointer_released(),
            Message::CursorLeftWindow => self.handle_cursor_left_window(),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
                self.handle_viewport_resized(Instant::now());
            }
            Message::WindowFocused => self.handle_window_focused(),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::FocusNext => self.handle_focus_step(true),
            Message::FocusPrevious => self.handle_focus_step(false),
            Message::ClearFocus => self.set_focus(None),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::ToggleSection(id) => self.handle_toggle_section(id, &mut effects),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::super::state::MarqueeId;
    use super::*;
    use crate::config::{AppConfig, ThemeMode};
    use crate::content::ShowcaseContent;
    use crate::marquee::MarqueeInput;
    use iced::keyboard::{Key, Modifiers, key};
    use std::path::PathBuf;
    use std::time::Duration;

    fn build_test_app(config: AppConfig) -> App {
        let config_path = PathBuf::from(format!(
            "/tmp/folio-marquee-reducer-test-{}.toml",
            std::process::id()
        ));
        let (app, _task) = App::bootstrap(ShowcaseContent::sample(), config, config_path);
        app
    }

    fn measure(app: &mut App, id: MarqueeId, content_width: f32) {
        let scroll_x = offset(app, id);
        app.reduce(Message::Marquee(
            id,
            MarqueeInput::Measured {
                content_width,
                viewport_width: 600.0,
                scroll_x,
            },
        ));
    }

    fn offset(app: &App, id: MarqueeId) -> f32 {
        app.section(id)
            .marquee()
            .map(|m| m.offset())
            .expect("section is mounted")
    }

    #[test]
    fn frames_scroll_every_mounted_marquee() {
        let mut app = build_test_app(AppConfig::default());
        measure(&mut app, MarqueeId::Logos, 4_000.0);
        measure(&mut app, MarqueeId::Testimonials, 4_000.0);
        assert!(app.wants_frames());

        let base = Instant::now();
        assert!(app.reduce(Message::Frame(base)).is_empty());
        let effects = app.reduce(Message::Frame(base + Duration::from_millis(100)));

        assert_eq!(effects.len(), 2);
        assert!(effects.iter().any(|effect| matches!(
            effect,
            Effect::ScrollTo { id: MarqueeId::Logos, offset } if (*offset - 4.0).abs() < 1e-3
        )));
        assert!(effects.iter().any(|effect| matches!(
            effect,
            Effect::ScrollTo { id: MarqueeId::Testimonials, offset } if (*offset - 2.5).abs() < 1e-3
        )));
    }

    #[test]
    fn drag_follows_cursor_outside_the_strip() {
        let mut app = build_test_app(AppConfig::default());
        measure(&mut app, MarqueeId::Logos, 4_000.0);

        app.reduce(Message::CursorMoved { x: 300.0 });
        app.reduce(Message::Marquee(MarqueeId::Logos, MarqueeInput::PointerPressed));
        app.reduce(Message::Marquee(MarqueeId::Logos, MarqueeInput::PointerExited));
        let effects = app.reduce(Message::CursorMoved { x: 200.0 });

        assert_eq!(
            effects,
            vec![Effect::ScrollTo {
                id: MarqueeId::Logos,
                offset: 100.0
            }]
        );

        app.reduce(Message::PointerReleased);
        assert!(app.reduce(Message::CursorMoved { x: 0.0 }).is_empty());
        assert_eq!(offset(&app, MarqueeId::Logos), 100.0);
    }

    #[test]
    fn leaving_the_window_cancels_a_drag() {
        let mut app = build_test_app(AppConfig::default());
        app.reduce(Message::CursorMoved { x: 50.0 });
        app.reduce(Message::Marquee(
            MarqueeId::Testimonials,
            MarqueeInput::PointerPressed,
        ));
        app.reduce(Message::CursorLeftWindow);

        let marquee = app
            .section(MarqueeId::Testimonials)
            .marquee()
            .expect("mounted");
        assert!(!marquee.is_dragging());
        assert_eq!(app.cursor_x, None);
    }

    #[test]
    fn press_without_cursor_is_ignored() {
        let mut app = build_test_app(AppConfig::default());
        app.reduce(Message::Marquee(MarqueeId::Logos, MarqueeInput::PointerPressed));
        assert!(
            !app.section(MarqueeId::Logos)
                .marquee()
                .expect("mounted")
                .is_dragging()
        );
    }

    #[test]
    fn tab_cycles_focus_and_escape_clears_it() {
        let mut app = build_test_app(AppConfig::default());
        let tab = || Message::KeyPressed {
            key: Key::Named(key::Named::Tab),
            modifiers: Modifiers::empty(),
        };

        app.reduce(tab());
        assert_eq!(app.focus, Some(MarqueeId::Logos));
        assert!(app.section(MarqueeId::Logos).marquee().expect("mounted").is_paused());

        app.reduce(tab());
        assert_eq!(app.focus, Some(MarqueeId::Testimonials));
        assert!(!app.section(MarqueeId::Logos).marquee().expect("mounted").is_paused());

        app.reduce(tab());
        assert_eq!(app.focus, None, "tabbing past the last strip leaves them");

        app.reduce(Message::KeyPressed {
            key: Key::Named(key::Named::Tab),
            modifiers: Modifiers::SHIFT,
        });
        assert_eq!(app.focus, Some(MarqueeId::Testimonials));

        app.reduce(Message::KeyPressed {
            key: Key::Named(key::Named::Escape),
            modifiers: Modifiers::empty(),
        });
        assert_eq!(app.focus, None);
        assert!(
            !app.section(MarqueeId::Testimonials)
                .marquee()
                .expect("mounted")
                .is_paused()
        );
    }

    #[test]
    fn toggling_a_section_unmounts_and_remounts_fresh_state() {
        let mut app = build_test_app(AppConfig::default());
        measure(&mut app, MarqueeId::Logos, 4_000.0);
        app.reduce(Message::FocusNext);
        app.reduce(Message::CursorMoved { x: 100.0 });
        app.reduce(Message::Marquee(MarqueeId::Logos, MarqueeInput::PointerPressed));
        app.reduce(Message::CursorMoved { x: 40.0 });
        assert_eq!(offset(&app, MarqueeId::Logos), 60.0);

        let effects = app.reduce(Message::ToggleSection(MarqueeId::Logos));
        assert_eq!(effects, vec![Effect::SaveConfig]);
        assert!(!app.section(MarqueeId::Logos).is_mounted());
        assert!(!app.config.show_logos);
        assert_eq!(app.focus, None, "focus is released with the unmounted strip");

        app.reduce(Message::ToggleSection(MarqueeId::Logos));
        assert!(app.config.show_logos);
        assert_eq!(offset(&app, MarqueeId::Logos), 0.0);
        assert!(!app.section(MarqueeId::Logos).marquee().expect("mounted").is_dragging());
    }

    #[test]
    fn wheel_scroll_while_hovered_is_adopted_without_a_snap_back() {
        let mut app = build_test_app(AppConfig::default());
        measure(&mut app, MarqueeId::Logos, 4_000.0);
        let base = Instant::now();
        app.reduce(Message::Frame(base));

        app.reduce(Message::Marquee(MarqueeId::Logos, MarqueeInput::PointerEntered));
        let effects = app.reduce(Message::Marquee(
            MarqueeId::Logos,
            MarqueeInput::Measured {
                content_width: 4_000.0,
                viewport_width: 600.0,
                scroll_x: 2_300.0,
            },
        ));
        assert!(effects.is_empty(), "adopting a wheel position pushes nothing back");
        assert_eq!(offset(&app, MarqueeId::Logos), 300.0);

        app.reduce(Message::Marquee(MarqueeId::Logos, MarqueeInput::PointerExited));
        app.reduce(Message::Frame(base + Duration::from_millis(500)));
        let effects = app.reduce(Message::Frame(base + Duration::from_millis(600)));

        assert!(
            effects.iter().any(|effect| matches!(
                effect,
                Effect::ScrollTo { id: MarqueeId::Logos, offset } if (*offset - 304.0).abs() < 1e-3
            )),
            "autoplay resumes from the adopted position: {effects:?}"
        );
    }

    #[test]
    fn scroll_reports_during_autoplay_do_not_move_the_strip() {
        let mut app = build_test_app(AppConfig::default());
        measure(&mut app, MarqueeId::Logos, 4_000.0);
        let base = Instant::now();
        app.reduce(Message::Frame(base));
        app.reduce(Message::Frame(base + Duration::from_millis(100)));

        app.reduce(Message::Marquee(
            MarqueeId::Logos,
            MarqueeInput::Measured {
                content_width: 4_000.0,
                viewport_width: 600.0,
                scroll_x: 0.0,
            },
        ));
        assert!((offset(&app, MarqueeId::Logos) - 4.0).abs() < 1e-3);
    }

    #[test]
    fn tab_skips_sections_without_items() {
        let config_path = PathBuf::from("/tmp/folio-marquee-focus-empty.toml");
        let mut content = ShowcaseContent::sample();
        content.logos.clear();
        let (mut app, _task) = App::bootstrap(content, AppConfig::default(), config_path);

        app.reduce(Message::FocusNext);
        assert_eq!(app.focus, Some(MarqueeId::Testimonials));
        app.reduce(Message::FocusNext);
        assert_eq!(app.focus, None);
        app.reduce(Message::FocusPrevious);
        assert_eq!(app.focus, Some(MarqueeId::Testimonials));
    }

    #[test]
    fn frame_pump_stops_when_nothing_animates() {
        let mut config = AppConfig::default();
        config.show_testimonials = false;
        config.logo_speed = 0.0;
        let app = build_test_app(config);

        assert!(app.section(MarqueeId::Logos).is_mounted());
        assert!(!app.section(MarqueeId::Testimonials).is_mounted());
        assert!(!app.wants_frames());
    }

    #[test]
    fn empty_content_never_requests_frames() {
        let config_path = PathBuf::from("/tmp/folio-marquee-empty.toml");
        let content = ShowcaseContent {
            title: String::new(),
            logos: Vec::new(),
            testimonials: Vec::new(),
        };
        let (mut app, _task) = App::bootstrap(content, AppConfig::default(), config_path);

        assert!(!app.wants_frames());
        let base = Instant::now();
        app.reduce(Message::Frame(base));
        assert!(app.reduce(Message::Frame(base + Duration::from_millis(16))).is_empty());
    }

    #[test]
    fn resize_defers_geometry_until_debounce_elapses() {
        let mut app = build_test_app(AppConfig::default());
        measure(&mut app, MarqueeId::Logos, 4_000.0);
        app.reduce(Message::WindowResized {
            width: 900.0,
            height: 500.0,
        });
        measure(&mut app, MarqueeId::Logos, 3_000.0);

        let logos = app.section(MarqueeId::Logos).marquee().expect("mounted");
        assert_eq!(logos.half(), 2_000.0);
        assert_eq!(app.config.window_width, 900.0);

        let later = Instant::now() + Duration::from_secs(1);
        app.reduce(Message::Frame(later));
        let logos = app.section(MarqueeId::Logos).marquee().expect("mounted");
        assert_eq!(logos.half(), 1_500.0);
    }

    #[test]
    fn theme_toggle_and_quit_emit_effects() {
        let mut app = build_test_app(AppConfig::default());
        assert_eq!(app.reduce(Message::ToggleTheme), vec![Effect::SaveConfig]);
        assert_eq!(app.config.theme, ThemeMode::Day);
        assert_eq!(app.reduce(Message::SafeQuit), vec![Effect::QuitSafely]);
    }
}
