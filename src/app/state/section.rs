use super::constants::{LOGOS_SCROLL_ID, TESTIMONIALS_SCROLL_ID};
use crate::marquee::{Marquee, MarqueeSettings};
use iced::widget::scrollable;
use tracing::debug;

/// Identifies one of the showcase's marquee sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarqueeId {
    Logos,
    Testimonials,
}

impl MarqueeId {
    /// Page order, which is also keyboard focus order.
    pub const ALL: [MarqueeId; 2] = [MarqueeId::Logos, MarqueeId::Testimonials];

    pub fn name(self) -> &'static str {
        match self {
            MarqueeId::Logos => "logos",
            MarqueeId::Testimonials => "testimonials",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            MarqueeId::Logos => "Clients",
            MarqueeId::Testimonials => "What people say",
        }
    }

    pub fn scroll_id(self) -> scrollable::Id {
        match self {
            MarqueeId::Logos => LOGOS_SCROLL_ID.clone(),
            MarqueeId::Testimonials => TESTIMONIALS_SCROLL_ID.clone(),
        }
    }
}

/// A page section that may or may not currently host a mounted marquee.
///
/// Mounting creates fresh runtime state; unmounting drops it, which also
/// removes the section from the frame subscription on the next update.
pub struct Section {
    id: MarqueeId,
    marquee: Option<Marquee>,
}

impl Section {
    pub fn new(id: MarqueeId) -> Self {
        Self { id, marquee: None }
    }

    pub fn id(&self) -> MarqueeId {
        self.id
    }

    pub fn mount(&mut self, item_count: usize, settings: MarqueeSettings) {
        self.marquee = Some(Marquee::new(
            self.id.name(),
            self.id.scroll_id(),
            item_count,
            settings,
        ));
    }

    pub fn unmount(&mut self) -> bool {
        let was_mounted = self.marquee.take().is_some();
        if was_mounted {
            debug!(marquee = self.id.name(), "Unmounted marquee");
        }
        was_mounted
    }

    pub fn is_mounted(&self) -> bool {
        self.marquee.is_some()
    }

    pub fn marquee(&self) -> Option<&Marquee> {
        self.marquee.as_ref()
    }

    pub fn marquee_mut(&mut self) -> Option<&mut Marquee> {
        self.marquee.as_mut()
    }
}
