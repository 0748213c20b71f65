// SPDX-License-Identifier: MPL-2.0
//! Delivery of the contact form to the submission endpoint.
//!
//! The form's declared target is a hosted form endpoint that accepts a
//! conventional form-encoded POST. [`Submitter`] performs that POST in live
//! mode and interprets the HTTP status as success or failure. The simulated
//! mode keeps the fixed-duration wait of the reference behavior for demo
//! builds with no network access; its duration is a stand-in for "await the
//! real request", not a timing contract.

use crate::error::SubmitError;
use std::time::Duration;

/// Built-in submission endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/xldpkgaj";

/// Wait applied by [`Delivery::Simulated`] before reporting success.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1000);

const USER_AGENT: &str = concat!("IcedContact/", env!("CARGO_PKG_VERSION"));

/// A snapshot of the form's text fields taken at submit time.
///
/// The component keeps mutating its own state while the request is in
/// flight; the snapshot guarantees the delivered payload is the one the
/// user pressed "Send" on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormContents {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// How a submission is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// POST the form to the endpoint over HTTP.
    Live,
    /// Pretend to send: wait [`SIMULATED_DELAY`] and succeed.
    Simulated,
}

/// Sends form contents to the submission endpoint.
#[derive(Debug, Clone)]
pub struct Submitter {
    endpoint: String,
    timeout: Duration,
    delivery: Delivery,
}

impl Submitter {
    pub fn new(endpoint: impl Into<String>, timeout: Duration, delivery: Delivery) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
            delivery,
        }
    }

    /// Returns the endpoint this submitter targets.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the configured delivery mode.
    pub fn delivery(&self) -> Delivery {
        self.delivery
    }

    /// Delivers the form contents.
    ///
    /// There is exactly one outcome per attempt: `Ok(())` on a success
    /// status, or a categorized [`SubmitError`]. Failures never consume the
    /// user's input; the caller keeps the fields for a retry.
    pub async fn submit(&self, contents: FormContents) -> Result<(), SubmitError> {
        match self.delivery {
            Delivery::Simulated => {
                tokio::time::sleep(SIMULATED_DELAY).await;
                Ok(())
            }
            Delivery::Live => self.post(&contents).await,
        }
    }

    async fn post(&self, contents: &FormContents) -> Result<(), SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SubmitError::Request(e.to_string()))?;

        let response = client
            .post(&self.endpoint)
            .form(&[
                ("name", contents.name.as_str()),
                ("email", contents.email.as_str()),
                ("message", contents.message.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SubmitError::from_transport(&e))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(SubmitError::Status(response.status().as_u16()))
        }
    }
}
