//! Outbound expiry reminders.
//!
//! Reminders are dispatched through an EmailJS-compatible transactional
//! email API: one POST carrying a fixed service/template identifier pair
//! and the per-item template parameters. The contract is fire-and-forget —
//! the sweep logs the outcome and never retries or surfaces it.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::config::NotifyConfig;
use crate::error::{Error, Result};

/// The fields carried by a single expiry reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Name of the expiring item.
    pub item_name: String,
    /// The item's expiry date.
    pub expiry_date: NaiveDate,
    /// Recipient email address.
    pub to_email: String,
}

/// A sink for outbound reminders.
///
/// The seam exists so the sweep can be tested without network access.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Dispatch a single reminder.
    ///
    /// # Errors
    ///
    /// Returns an error if the dispatch fails; callers treat this as
    /// log-only and never retry.
    async fn send(&self, reminder: &Reminder) -> Result<()>;
}

/// Request body for the email service.
#[derive(Debug, Serialize)]
struct EmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Template parameters rendered into the reminder email.
#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    item_name: &'a str,
    expiry_date: String,
    to_email: &'a str,
}

/// Notifier backed by an EmailJS-compatible HTTP API.
#[derive(Debug)]
pub struct EmailNotifier {
    client: reqwest::Client,
    config: NotifyConfig,
}

impl EmailNotifier {
    /// Create a notifier from the notification configuration.
    #[must_use]
    pub fn new(config: NotifyConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, reminder: &Reminder) -> Result<()> {
        let body = EmailRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                item_name: &reminder.item_name,
                // Date-only string, e.g. "2024-01-08".
                expiry_date: reminder.expiry_date.format("%Y-%m-%d").to_string(),
                to_email: &reminder.to_email,
            },
        };

        debug!(
            "Dispatching reminder for '{}' to {}",
            reminder.item_name, reminder.to_email
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::DispatchRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Notifier that drops every reminder.
///
/// Used when notifications are disabled in configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn send(&self, reminder: &Reminder) -> Result<()> {
        debug!(
            "Notifications disabled, dropping reminder for '{}'",
            reminder.item_name
        );
        Ok(())
    }
}
