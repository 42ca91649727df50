use super::{Marquee, MarqueeInput};
use iced::alignment::Vertical;
use iced::mouse::Interaction;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Row, Space, container, mouse_area, scrollable};
use iced::{Border, Element, Length, Theme};

/// Renders a marquee strip.
///
/// Each item is drawn twice, and every cell carries half of `spacing` on both
/// sides so that the duplicated run is exactly twice the width of one pass.
/// An empty item list renders as an empty, zero-height element.
pub fn view<'a, T, Message>(
    marquee: &'a Marquee,
    items: &'a [T],
    spacing: f32,
    render_item: impl Fn(&'a T) -> Element<'a, Message>,
    on_input: impl Fn(MarqueeInput) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    if items.is_empty() || marquee.is_empty() {
        return Space::new(Length::Fill, Length::Shrink).into();
    }

    let gap = if spacing.is_finite() {
        spacing.max(0.0) / 2.0
    } else {
        0.0
    };
    let cells = items
        .iter()
        .chain(items.iter())
        .map(|item| -> Element<'a, Message> {
            container(render_item(item)).padding([0.0, gap]).into()
        });
    let strip: Row<'a, Message> = Row::with_children(cells).align_y(Vertical::Center);

    let entered = on_input(MarqueeInput::PointerEntered);
    let exited = on_input(MarqueeInput::PointerExited);
    let pressed = on_input(MarqueeInput::PointerPressed);

    let hidden = Scrollbar::new().width(0.0).scroller_width(0.0).margin(0.0);
    let scroller = scrollable(strip)
        .id(marquee.scroll_id().clone())
        .direction(Direction::Horizontal(hidden))
        .width(Length::Fill)
        .on_scroll(move |viewport| {
            on_input(MarqueeInput::Measured {
                content_width: viewport.content_bounds().width,
                viewport_width: viewport.bounds().width,
                scroll_x: viewport.absolute_offset().x,
            })
        });

    let interaction = if marquee.is_dragging() {
        Interaction::Grabbing
    } else {
        Interaction::Grab
    };
    let area = mouse_area(scroller)
        .on_enter(entered)
        .on_exit(exited)
        .on_press(pressed)
        .interaction(interaction);

    let focused = marquee.is_focused();
    container(area)
        .width(Length::Fill)
        .padding(2)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                border: Border {
                    color: palette.primary.strong.color,
                    width: if focused { 2.0 } else { 0.0 },
                    radius: 6.0.into(),
                },
                ..container::Style::default()
            }
        })
        .into()
}
