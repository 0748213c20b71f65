// SPDX-License-Identifier: MPL-2.0
//! `iced_contact` is a get-in-touch contact form built with the Iced GUI
//! framework.
//!
//! It renders static contact details beside a message form, delivers
//! submissions to a hosted form endpoint (or simulates the delivery in
//! offline builds), and reports outcomes through toast notifications.

pub mod app;
pub mod config;
pub mod error;
pub mod submission;
pub mod ui;
