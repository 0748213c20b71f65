// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the contact section and
//! the toast overlay.
//!
//! The `App` struct wires the contact component to its side effects: it
//! dispatches the asynchronous delivery when the component requests one and
//! feeds the completion back as a component message, and it owns the
//! notification manager the component's toasts land in. Policy decisions
//! (endpoint selection, offline mode, window sizing) stay close to the main
//! update loop so user-facing behavior is easy to audit.

use crate::config;
use crate::submission::{Delivery, Submitter, DEFAULT_ENDPOINT};
use crate::ui::contact::{self, ViewContext};
use crate::ui::notifications::{Manager, NotificationMessage, Toast};
use crate::ui::theming::ThemeMode;
use iced::{time, widget::Stack, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state bridging the contact form, notifications,
/// and persisted preferences.
pub struct App {
    contact: contact::State,
    notifications: Manager,
    submitter: Submitter,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("form", &self.contact.form)
            .field("visible_toasts", &self.notifications.visible_count())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Contact(contact::Message),
    Notification(NotificationMessage),
    Tick(std::time::Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional submission endpoint override.
    pub endpoint: Option<String>,
    /// Simulate submissions instead of POSTing to the endpoint.
    pub offline: bool,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 620;

const WINDOW_TITLE: &str = "Get In Touch";

/// Interval between toast auto-dismiss checks while toasts are shown.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            contact: contact::State::new(),
            notifications: Manager::new(),
            submitter: Submitter::new(
                DEFAULT_ENDPOINT,
                Duration::from_secs(config::DEFAULT_TIMEOUT_SECS),
                Delivery::Live,
            ),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and CLI
    /// flags. Flags win over the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let endpoint = flags
            .endpoint
            .or(config.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let offline = flags.offline || config.offline.unwrap_or(false);
        let timeout = Duration::from_secs(
            config.timeout_secs.unwrap_or(config::DEFAULT_TIMEOUT_SECS),
        );
        let delivery = if offline {
            Delivery::Simulated
        } else {
            Delivery::Live
        };

        let app = App {
            submitter: Submitter::new(endpoint, timeout, delivery),
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Tick only while toasts are on screen so an idle app stays idle.
        if self.notifications.has_notifications() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Contact(contact_message) => self.handle_contact_message(contact_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn handle_contact_message(&mut self, message: contact::Message) -> Task<Message> {
        match self.contact.update(message) {
            contact::Event::None => Task::none(),
            contact::Event::SubmitRequested(contents) => {
                let submitter = self.submitter.clone();
                Task::perform(
                    async move { submitter.submit(contents).await },
                    |result| Message::Contact(contact::Message::Submitted(result)),
                )
            }
            contact::Event::Notify(notification) => {
                self.notifications.push(notification);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let section = contact::view::section(
            &self.contact,
            ViewContext {
                offline: self.submitter.delivery() == Delivery::Simulated,
            },
        )
        .map(Message::Contact);

        let toasts = Toast::view_overlay(&self.notifications).map(Message::Notification);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(section)
            .push(toasts)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitError;
    use crate::ui::contact::FormField;
    use crate::ui::notifications::Severity;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    fn fill_form(app: &mut App) {
        let _ = app.update(Message::Contact(contact::Message::FieldChanged(
            FormField::Name,
            "Ada".to_string(),
        )));
        let _ = app.update(Message::Contact(contact::Message::FieldChanged(
            FormField::Email,
            "ada@x.com".to_string(),
        )));
        let _ = app.update(Message::Contact(contact::Message::FieldChanged(
            FormField::Message,
            "Hi".to_string(),
        )));
    }

    #[test]
    fn new_starts_with_empty_idle_form() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                endpoint: None,
                offline: false,
            });
            assert_eq!(app.contact.form.name, "");
            assert_eq!(app.contact.form.email, "");
            assert_eq!(app.contact.form.message, "");
            assert!(!app.contact.form.submitting);
            assert!(!app.notifications.has_notifications());
        });
    }

    #[test]
    fn flags_select_offline_delivery_and_endpoint() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                endpoint: Some("https://example.com/f/abc".to_string()),
                offline: true,
            });
            assert_eq!(app.submitter.delivery(), Delivery::Simulated);
            assert_eq!(app.submitter.endpoint(), "https://example.com/f/abc");
        });
    }

    #[test]
    fn config_file_selects_offline_delivery() {
        with_temp_config_dir(|config_root| {
            let config = config::Config {
                endpoint: Some("https://example.com/f/cfg".to_string()),
                offline: Some(true),
                timeout_secs: Some(5),
                theme_mode: ThemeMode::Dark,
            };
            let config_path = config_root.join("IcedContact").join("settings.toml");
            config::save_to_path(&config, &config_path).expect("failed to save config");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.submitter.delivery(), Delivery::Simulated);
            assert_eq!(app.submitter.endpoint(), "https://example.com/f/cfg");
            assert_eq!(app.theme_mode, ThemeMode::Dark);
        });
    }

    #[test]
    fn field_change_updates_one_field() {
        let mut app = App::default();

        let _ = app.update(Message::Contact(contact::Message::FieldChanged(
            FormField::Name,
            "Ada".to_string(),
        )));

        assert_eq!(app.contact.form.name, "Ada");
        assert_eq!(app.contact.form.email, "");
        assert_eq!(app.contact.form.message, "");
        assert!(!app.contact.form.submitting);
    }

    #[test]
    fn submit_cycle_notifies_success_and_resets_fields() {
        let mut app = App::default();
        fill_form(&mut app);

        let _ = app.update(Message::Contact(contact::Message::Submit));
        assert!(app.contact.form.submitting);
        assert_eq!(app.contact.form.name, "Ada");

        let _ = app.update(Message::Contact(contact::Message::Submitted(Ok(()))));

        assert!(!app.contact.form.submitting);
        assert_eq!(app.contact.form.name, "");
        assert_eq!(app.contact.form.email, "");
        assert_eq!(app.contact.form.message, "");

        let toast = app
            .notifications
            .visible()
            .next()
            .expect("a toast should be visible");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.title(), "Message Sent!");
    }

    #[test]
    fn failed_submit_preserves_fields_and_notifies_error() {
        let mut app = App::default();
        fill_form(&mut app);

        let _ = app.update(Message::Contact(contact::Message::Submit));
        let _ = app.update(Message::Contact(contact::Message::Submitted(Err(
            SubmitError::Status(500),
        ))));

        assert!(!app.contact.form.submitting);
        assert_eq!(app.contact.form.name, "Ada");
        assert_eq!(app.contact.form.email, "ada@x.com");
        assert_eq!(app.contact.form.message, "Hi");

        let toast = app
            .notifications
            .visible()
            .next()
            .expect("a toast should be visible");
        assert_eq!(toast.severity(), Severity::Error);
    }

    #[test]
    fn duplicate_submit_spawns_no_second_delivery() {
        let mut app = App::default();
        fill_form(&mut app);

        let _ = app.update(Message::Contact(contact::Message::Submit));
        let _ = app.update(Message::Contact(contact::Message::Submit));

        // Only the completion of the single in-flight delivery resets the flag
        assert!(app.contact.form.submitting);
        let _ = app.update(Message::Contact(contact::Message::Submitted(Ok(()))));
        assert!(!app.contact.form.submitting);
    }

    #[test]
    fn notification_dismiss_message_removes_toast() {
        let mut app = App::default();
        fill_form(&mut app);
        let _ = app.update(Message::Contact(contact::Message::Submit));
        let _ = app.update(Message::Contact(contact::Message::Submitted(Ok(()))));

        let id = app
            .notifications
            .visible()
            .next()
            .expect("a toast should be visible")
            .id();
        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));

        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn tick_message_prunes_expired_toasts() {
        let mut app = App::default();
        app.notifications.push(
            crate::ui::notifications::Notification::success("Saved", "done")
                .auto_dismiss(Duration::from_millis(0)),
        );

        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn theme_follows_theme_mode() {
        let mut app = App::default();
        app.theme_mode = ThemeMode::Dark;
        assert_eq!(app.theme(), Theme::Dark);
        app.theme_mode = ThemeMode::Light;
        assert_eq!(app.theme(), Theme::Light);
    }
}
