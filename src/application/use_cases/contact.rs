use std::sync::Arc;

use tracing::{instrument, warn};

use crate::{
    app_error::{AppError, AppResult},
    application::{email_templates, use_cases::waitlist::EmailSender, validators::is_valid_email},
};

/// Contact-form flow: nothing is persisted, the emails are the whole effect.
#[derive(Clone)]
pub struct ContactUseCases {
    email: Arc<dyn EmailSender>,
    app_origin: String,
    contact_recipient: String,
}

impl ContactUseCases {
    pub fn new(email: Arc<dyn EmailSender>, app_origin: String, contact_recipient: String) -> Self {
        Self {
            email,
            app_origin,
            contact_recipient,
        }
    }

    #[instrument(skip(self, message))]
    pub async fn submit(&self, name: &str, email: &str, message: &str) -> AppResult<()> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(AppError::InvalidInput("Invalid email format".into()));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput("Name must not be empty".into()));
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::InvalidInput("Message must not be empty".into()));
        }

        // The confirmation is the submitter-visible outcome; without
        // persistence there is nothing durable to fall back on, so a failure
        // here propagates.
        let (subject, html) = email_templates::contact_confirmation_email(&self.app_origin, name);
        self.email.send(email, &subject, &html).await?;

        // The operator notification stays best-effort.
        let (subject, html) =
            email_templates::contact_notification_email(&self.app_origin, name, email, message);
        if let Err(err) = self.email.send(&self.contact_recipient, &subject, &html).await {
            warn!(error = ?err, "sending contact notification failed");
        }

        Ok(())
    }
}
