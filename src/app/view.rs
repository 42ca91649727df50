use super::messages::Message;
use super::state::{App, CARD_PADDING_PX, LOGO_IMAGE_HEIGHT_PX, MIN_CARD_WIDTH_PX, MarqueeId};
use crate::content::{LogoItem, Testimonial};
use crate::marquee::{self, Marquee};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, button, column, container, horizontal_space, image, row, text};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut header = row![text(&self.content.title).size(26), horizontal_space()]
            .spacing(10)
            .align_y(Vertical::Center)
            .width(Length::Fill);
        for id in MarqueeId::ALL {
            let label = if self.section(id).is_mounted() {
                format!("Hide {}", id.name())
            } else {
                format!("Show {}", id.name())
            };
            header = header.push(button(text(label)).on_press(Message::ToggleSection(id)));
        }
        header = header.push(
            button(crate::theme::toggle_label(self.config.theme)).on_press(Message::ToggleTheme),
        );

        let mut page = Column::new()
            .push(header)
            .spacing(24)
            .padding(16)
            .width(Length::Fill);
        for id in MarqueeId::ALL {
            let Some(marquee) = self.section(id).marquee() else {
                continue;
            };
            if self.item_count(id) == 0 {
                continue;
            }
            page = page.push(
                column![text(id.heading()).size(18), self.marquee_strip(id, marquee)].spacing(8),
            );
        }

        page.push(
            text("Hover, focus (Tab) or drag a strip to pause it. Esc clears focus.").size(13),
        )
        .into()
    }

    fn marquee_strip<'a>(&'a self, id: MarqueeId, marquee: &'a Marquee) -> Element<'a, Message> {
        let spacing = self.config.card_spacing;
        let on_input = move |input: marquee::MarqueeInput| Message::Marquee(id, input);
        match id {
            MarqueeId::Logos => marquee::view(
                marquee,
                &self.content.logos,
                spacing,
                |logo| self.logo_card(logo),
                on_input,
            ),
            MarqueeId::Testimonials => marquee::view(
                marquee,
                &self.content.testimonials,
                spacing,
                |testimonial| self.testimonial_card(testimonial),
                on_input,
            ),
        }
    }

    fn logo_card<'a>(&self, logo: &'a LogoItem) -> Element<'a, Message> {
        let mut body = Column::new().spacing(6).align_x(Horizontal::Center);
        body = match &logo.image {
            Some(path) => body.push(image(path.as_path()).height(LOGO_IMAGE_HEIGHT_PX)),
            None => body.push(text(&logo.name).size(20)),
        };
        if let Some(url) = &logo.url {
            body = body.push(text(url.as_str()).size(12));
        }

        let width = self.config.logo_card_width.max(MIN_CARD_WIDTH_PX);
        container(body)
            .padding(CARD_PADDING_PX)
            .center_x(Length::Fixed(width))
            .style(container::rounded_box)
            .into()
    }

    fn testimonial_card<'a>(&self, testimonial: &'a Testimonial) -> Element<'a, Message> {
        let mut body = column![
            text(format!("\u{201c}{}\u{201d}", testimonial.quote)).size(16),
            text(&testimonial.author).size(14),
        ]
        .spacing(6);
        if let Some(role) = &testimonial.role {
            body = body.push(text(role.as_str()).size(12));
        }

        container(body)
            .width(Length::Fixed(
                self.config.testimonial_card_width.max(MIN_CARD_WIDTH_PX),
            ))
            .padding(CARD_PADDING_PX)
            .style(container::rounded_box)
            .into()
    }
}
