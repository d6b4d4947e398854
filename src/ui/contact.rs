// SPDX-License-Identifier: MPL-2.0
//! Contact section: three fields and the submit button.

use crate::domain::contact::{ContactForm, Field};
use crate::domain::layout::{Section, CONTACT_FORM_HEIGHT, CONTACT_HEIGHT, SECTION_PADDING};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::section_title;
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Space, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the contact form.
#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    SubmitPressed,
}

/// Renders the section. `title_progress` drives the heading reveal.
pub fn view(form: &ContactForm, title_progress: f32) -> Element<'_, Message> {
    let fields = Field::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::MD), |column, field| {
            let state = form.field(field);
            let input = text_input(field.placeholder(), state.value())
                .on_input(move |value| Message::FieldChanged(field, value))
                .on_submit(Message::SubmitPressed)
                .size(typography::BODY_LG)
                .padding(spacing::SM)
                .style(styles::text_input::field(
                    state.has_content(),
                    state.has_error(),
                ));
            column.push(input)
        });

    let submit = button(
        Container::new(Text::new(form.button_label()).size(typography::BODY_LG))
            .center_x(Length::Fill),
    )
    .on_press_maybe(form.can_submit().then_some(Message::SubmitPressed))
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::primary);

    let body = Column::new()
        .spacing(spacing::LG)
        .push(fields)
        .push(submit);

    Container::new(
        Column::new()
            .align_x(alignment::Horizontal::Center)
            .push(Space::new().height(Length::Fixed(SECTION_PADDING)))
            .push(section_title(Section::Contact.label(), title_progress))
            .push(
                Container::new(body)
                    .max_width(sizing::FORM_MAX_WIDTH)
                    .padding([spacing::LG, spacing::XL])
                    .height(Length::Fixed(CONTACT_FORM_HEIGHT)),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fixed(CONTACT_HEIGHT))
    .style(styles::container::band)
    .into()
}
