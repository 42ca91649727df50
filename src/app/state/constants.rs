use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

pub(crate) static LOGOS_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("marquee-logos"));
pub(crate) static TESTIMONIALS_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("marquee-testimonials"));

/// Narrowest card the layout will honour from config.
pub(crate) const MIN_CARD_WIDTH_PX: f32 = 40.0;
pub(crate) const LOGO_IMAGE_HEIGHT_PX: f32 = 48.0;
pub(crate) const CARD_PADDING_PX: u16 = 12;
