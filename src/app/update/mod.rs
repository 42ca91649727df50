use super::state::MarqueeId;

mod appearance;
mod core;
mod marquee;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    ScrollTo { id: MarqueeId, offset: f32 },
    SaveConfig,
    QuitSafely,
}
