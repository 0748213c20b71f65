// SPDX-License-Identifier: MPL-2.0
//! The contact section: static contact details beside the message form.
//!
//! Follows the "state down, messages up" component pattern: the root `App`
//! forwards [`Message`]s into [`State::update`], which mutates the form
//! record and answers with an [`Event`] for side effects the component
//! cannot perform itself (dispatching the asynchronous delivery, showing a
//! toast).
//!
//! The submission lifecycle is a two-state machine. `Submit` moves the form
//! from idle to submitting and requests a delivery; the completion arrives
//! later as `Submitted(result)`. Success clears the form and announces
//! "Message Sent!"; failure keeps the user's input so a resubmission needs
//! no retyping.

pub mod state;
pub mod view;

pub use state::{FormField, FormState};
pub use view::ViewContext;

use crate::error::SubmitError;
use crate::submission::FormContents;
use crate::ui::notifications::Notification;
use iced::widget::text_editor;
use std::fmt;

const SUCCESS_TITLE: &str = "Message Sent!";
const SUCCESS_BODY: &str = "Thank you for reaching out. We'll get back to you soon.";
const FAILURE_TITLE: &str = "Message Not Sent";

/// Messages consumed by [`State::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// A single-line field was edited.
    FieldChanged(FormField, String),
    /// The multi-line message body received an editor action.
    BodyEdited(text_editor::Action),
    /// The submit button was pressed.
    Submit,
    /// The asynchronous delivery finished.
    Submitted(Result<(), SubmitError>),
}

/// Events propagated to the parent application.
#[derive(Debug)]
pub enum Event {
    /// No action needed.
    None,
    /// Deliver this snapshot of the form to the submission endpoint.
    SubmitRequested(FormContents),
    /// Show a toast to the user.
    Notify(Notification),
}

/// Contact section state: the form record plus the editor buffer backing
/// the multi-line message field.
pub struct State {
    pub form: FormState,
    body: text_editor::Content,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("form", &self.form)
            .finish()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Creates an empty, idle contact form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            body: text_editor::Content::new(),
        }
    }

    /// Returns the editor buffer for the message field.
    #[must_use]
    pub fn body(&self) -> &text_editor::Content {
        &self.body
    }

    /// Processes a message and returns the event for the parent to act on.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FieldChanged(field, value) => {
                if field == FormField::Message {
                    // Keep the editor buffer in sync when the message field
                    // is written programmatically.
                    self.body = text_editor::Content::with_text(&value);
                }
                self.form.set_field(field, value);
                Event::None
            }
            Message::BodyEdited(action) => {
                self.body.perform(action);
                let text = self.body.text();
                let text = text.strip_suffix('\n').unwrap_or(&text);
                self.form.set_field(FormField::Message, text.to_string());
                Event::None
            }
            Message::Submit => {
                // One in-flight submission at a time; the button is also
                // disabled while submitting, this guard covers other routes
                // (keyboard submit on the inputs).
                if self.form.submitting || !self.form.is_complete() {
                    return Event::None;
                }

                self.form.submitting = true;
                Event::SubmitRequested(self.form.contents())
            }
            Message::Submitted(result) => {
                self.form.submitting = false;

                match result {
                    Ok(()) => {
                        self.form.reset_fields();
                        self.body = text_editor::Content::new();
                        Event::Notify(Notification::success(SUCCESS_TITLE, SUCCESS_BODY))
                    }
                    Err(err) => {
                        // Keep the entered values for a retry.
                        Event::Notify(Notification::error(FAILURE_TITLE, err.to_string()))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;

    fn filled_state() -> State {
        let mut state = State::new();
        let _ = state.update(Message::FieldChanged(FormField::Name, "Ada".to_string()));
        let _ = state.update(Message::FieldChanged(
            FormField::Email,
            "ada@x.com".to_string(),
        ));
        let _ = state.update(Message::FieldChanged(FormField::Message, "Hi".to_string()));
        state
    }

    #[test]
    fn initial_state_is_empty_and_idle() {
        let state = State::new();
        assert_eq!(state.form, FormState::new());
        assert!(!state.form.submitting);
    }

    #[test]
    fn field_change_updates_only_the_targeted_field() {
        let mut state = State::new();
        let event = state.update(Message::FieldChanged(FormField::Name, "Ada".to_string()));

        assert!(matches!(event, Event::None));
        assert_eq!(state.form.name, "Ada");
        assert_eq!(state.form.email, "");
        assert_eq!(state.form.message, "");
        assert!(!state.form.submitting);
    }

    #[test]
    fn submit_with_blank_fields_is_ignored() {
        let mut state = State::new();
        let event = state.update(Message::Submit);

        assert!(matches!(event, Event::None));
        assert!(!state.form.submitting);
    }

    #[test]
    fn submit_enters_submitting_and_requests_delivery() {
        let mut state = filled_state();
        let event = state.update(Message::Submit);

        assert!(state.form.submitting);
        match event {
            Event::SubmitRequested(contents) => {
                assert_eq!(contents.name, "Ada");
                assert_eq!(contents.email, "ada@x.com");
                assert_eq!(contents.message, "Hi");
            }
            other => panic!("expected SubmitRequested, got {other:?}"),
        }

        // Fields are untouched while the delivery is in flight
        assert_eq!(state.form.name, "Ada");
        assert_eq!(state.form.email, "ada@x.com");
        assert_eq!(state.form.message, "Hi");
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let mut state = filled_state();
        let _ = state.update(Message::Submit);
        assert!(state.form.submitting);

        let event = state.update(Message::Submit);
        assert!(matches!(event, Event::None));
        assert!(state.form.submitting);
    }

    #[test]
    fn successful_submission_resets_and_notifies() {
        let mut state = filled_state();
        let _ = state.update(Message::Submit);

        let event = state.update(Message::Submitted(Ok(())));

        assert!(!state.form.submitting);
        assert_eq!(state.form, FormState::new());
        match event {
            Event::Notify(notification) => {
                assert_eq!(notification.severity(), Severity::Success);
                assert_eq!(notification.title(), SUCCESS_TITLE);
            }
            other => panic!("expected Notify, got {other:?}"),
        }
    }

    #[test]
    fn failed_submission_preserves_fields_and_notifies_error() {
        let mut state = filled_state();
        let _ = state.update(Message::Submit);

        let event = state.update(Message::Submitted(Err(SubmitError::Status(502))));

        assert!(!state.form.submitting);
        assert_eq!(state.form.name, "Ada");
        assert_eq!(state.form.email, "ada@x.com");
        assert_eq!(state.form.message, "Hi");
        match event {
            Event::Notify(notification) => {
                assert_eq!(notification.severity(), Severity::Error);
                assert_eq!(notification.title(), FAILURE_TITLE);
                assert!(notification.body().contains("502"));
            }
            other => panic!("expected Notify, got {other:?}"),
        }
    }

    #[test]
    fn form_can_be_resubmitted_after_failure() {
        let mut state = filled_state();
        let _ = state.update(Message::Submit);
        let _ = state.update(Message::Submitted(Err(SubmitError::Timeout)));

        let event = state.update(Message::Submit);
        assert!(matches!(event, Event::SubmitRequested(_)));
        assert!(state.form.submitting);
    }

    #[test]
    fn programmatic_message_edit_syncs_editor_buffer() {
        let mut state = State::new();
        let _ = state.update(Message::FieldChanged(
            FormField::Message,
            "Hello there".to_string(),
        ));

        assert_eq!(state.form.message, "Hello there");
        assert!(state.body().text().starts_with("Hello there"));
    }
}
