// SPDX-License-Identifier: MPL-2.0
//! View rendering for the contact section.

use super::{FormField, Message, State};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{
    button, container, scrollable, text, text_editor, text_input, Column, Row, Text,
};
use iced::{alignment::Horizontal, Border, Element, Length, Theme};

const HEADING: &str = "Get In Touch";
const BLURB: &str = "Have a project in mind? Let's collaborate and create something amazing together.";

const DETAILS_HEADING: &str = "Contact Information";
const LOCATION: &str = "Sidi Abdellah, Algeria";
const EMAIL: &str = "g7team2@gmail.com";

/// Contextual data needed to render the contact section.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    /// Whether submissions are simulated instead of sent over HTTP.
    pub offline: bool,
}

/// Renders the whole contact section: header, details panel and form.
pub fn section(state: &State, ctx: ViewContext) -> Element<'_, Message> {
    let title = Text::new(HEADING).size(typography::TITLE_LG);
    let blurb = Text::new(BLURB)
        .size(typography::BODY_LG)
        .style(text::secondary);

    let header = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(title)
        .push(blurb);

    let panels = Row::new()
        .spacing(spacing::XL)
        .push(details_panel())
        .push(form_panel(state, ctx));

    let content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(header)
        .push(panels);

    scrollable(
        container(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

/// Static contact details shown beside the form.
fn details_panel() -> Element<'static, Message> {
    let heading = Text::new(DETAILS_HEADING).size(typography::TITLE_MD);

    let column = Column::new()
        .spacing(spacing::LG)
        .push(heading)
        .push(details_entry("Location", LOCATION))
        .push(details_entry("Email", EMAIL));

    container(column)
        .width(Length::Fixed(sizing::DETAILS_WIDTH))
        .padding(spacing::LG)
        .style(panel_style)
        .into()
}

fn details_entry(label: &'static str, value: &'static str) -> Element<'static, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::TITLE_SM))
        .push(Text::new(value).size(typography::BODY).style(text::secondary))
        .into()
}

/// The message form: labeled inputs and the submit button.
fn form_panel(state: &State, ctx: ViewContext) -> Element<'_, Message> {
    let name_input = text_input("Your name", &state.form.name)
        .on_input(|value| Message::FieldChanged(FormField::Name, value))
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let email_input = text_input("your.email@example.com", &state.form.email)
        .on_input(|value| Message::FieldChanged(FormField::Email, value))
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let message_editor = text_editor(state.body())
        .placeholder("Tell us about your project...")
        .on_action(Message::BodyEdited)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .height(Length::Fixed(sizing::MESSAGE_EDITOR_HEIGHT));

    let mut form = Column::new()
        .spacing(spacing::MD)
        .push(labeled("Name", name_input.into()))
        .push(labeled("Email", email_input.into()))
        .push(labeled("Message", message_editor.into()))
        .push(submit_button(state));

    if ctx.offline {
        form = form.push(
            Text::new("Offline preview: submissions are simulated.")
                .size(typography::CAPTION)
                .style(text::secondary),
        );
    }

    container(form)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(panel_style)
        .into()
}

fn labeled<'a>(label: &'static str, input: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(input)
        .into()
}

/// The submit control. Carries no `on_press` while a submission is in
/// flight or while required fields are blank, which renders it disabled.
fn submit_button(state: &State) -> Element<'_, Message> {
    let label = if state.form.submitting {
        "Sending..."
    } else {
        "Send Message"
    };

    let mut submit = button(
        Text::new(label)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(button_styles::primary);

    if !state.form.submitting && state.form.is_complete() {
        submit = submit.on_press(Message::Submit);
    }

    submit.into()
}

fn panel_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_renders_for_empty_state() {
        let state = State::new();
        let _element = section(&state, ViewContext { offline: false });
        // Smoke test to ensure the view builds without panicking.
    }

    #[test]
    fn section_renders_while_submitting() {
        let mut state = State::new();
        state.form.submitting = true;
        let _element = section(&state, ViewContext { offline: true });
    }
}
