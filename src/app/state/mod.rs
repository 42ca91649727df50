mod constants;
mod section;

use crate::config::AppConfig;
use crate::content::ShowcaseContent;
use crate::marquee::{Marquee, MarqueeSettings};
use iced::Task;
use std::path::PathBuf;
use tracing::info;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use section::{MarqueeId, Section};

/// Core application state.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) config_path: PathBuf,
    pub(super) content: ShowcaseContent,
    pub(super) logos: Section,
    pub(super) testimonials: Section,
    pub(super) focus: Option<MarqueeId>,
    pub(super) cursor_x: Option<f32>,
}

impl App {
    pub fn bootstrap(
        content: ShowcaseContent,
        config: AppConfig,
        config_path: PathBuf,
    ) -> (Self, Task<Message>) {
        let mut app = App {
            config,
            config_path,
            content,
            logos: Section::new(MarqueeId::Logos),
            testimonials: Section::new(MarqueeId::Testimonials),
            focus: None,
            cursor_x: None,
        };
        for id in MarqueeId::ALL {
            if app.is_section_enabled(id) {
                app.mount_section(id);
            }
        }
        info!(
            logos = app.content.logos.len(),
            testimonials = app.content.testimonials.len(),
            "Showcase ready"
        );
        (app, Task::none())
    }

    pub(super) fn section(&self, id: MarqueeId) -> &Section {
        match id {
            MarqueeId::Logos => &self.logos,
            MarqueeId::Testimonials => &self.testimonials,
        }
    }

    pub(super) fn section_mut(&mut self, id: MarqueeId) -> &mut Section {
        match id {
            MarqueeId::Logos => &mut self.logos,
            MarqueeId::Testimonials => &mut self.testimonials,
        }
    }

    pub(super) fn item_count(&self, id: MarqueeId) -> usize {
        match id {
            MarqueeId::Logos => self.content.logos.len(),
            MarqueeId::Testimonials => self.content.testimonials.len(),
        }
    }

    pub(super) fn is_section_enabled(&self, id: MarqueeId) -> bool {
        match id {
            MarqueeId::Logos => self.config.show_logos,
            MarqueeId::Testimonials => self.config.show_testimonials,
        }
    }

    pub(super) fn set_section_enabled(&mut self, id: MarqueeId, enabled: bool) {
        match id {
            MarqueeId::Logos => self.config.show_logos = enabled,
            MarqueeId::Testimonials => self.config.show_testimonials = enabled,
        }
    }

    pub(super) fn marquee_settings(&self, id: MarqueeId) -> MarqueeSettings {
        let speed = match id {
            MarqueeId::Logos => self.config.logo_speed,
            MarqueeId::Testimonials => self.config.testimonial_speed,
        };
        MarqueeSettings {
            speed,
            max_frame_delta: self.config.max_frame_delta(),
            resize_debounce: self.config.resize_debounce(),
        }
    }

    pub(super) fn mount_section(&mut self, id: MarqueeId) {
        let item_count = self.item_count(id);
        let settings = self.marquee_settings(id);
        self.section_mut(id).mount(item_count, settings);
    }

    pub(super) fn unmount_section(&mut self, id: MarqueeId) {
        if self.focus == Some(id) {
            self.set_focus(None);
        }
        self.section_mut(id).unmount();
    }

    pub(super) fn mounted_marquees_mut(
        &mut self,
    ) -> impl Iterator<Item = (MarqueeId, &mut Marquee)> + '_ {
        [&mut self.logos, &mut self.testimonials]
            .into_iter()
            .filter_map(|section| {
                let id = section.id();
                section.marquee_mut().map(|marquee| (id, marquee))
            })
    }

    /// Whether any mounted marquee needs the per-frame subscription.
    pub(super) fn wants_frames(&self) -> bool {
        MarqueeId::ALL.into_iter().any(|id| {
            self.section(id)
                .marquee()
                .is_some_and(Marquee::wants_frames)
        })
    }
}
