//! In-memory mock implementations for the waitlist and email ports.

use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{EmailSender, WaitlistRepo},
    domain::entities::waitlist_entry::WaitlistEntry,
};

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    entries: Mutex<Vec<WaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// All stored entries, in insertion order (for test assertions).
    pub fn stored(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn insert(&self, email: &str, name: &str) -> AppResult<WaitlistEntry> {
        let mut entries = self.entries.lock().unwrap();

        // Mirror the store's unique constraint so the race path stays
        // observable in tests.
        if entries.iter().any(|e| e.email == email) {
            return Err(AppError::DuplicateEmail);
        }

        let now = chrono::Utc::now().naive_utc();
        let entry = WaitlistEntry {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name.to_string(),
            created_at: Some(now),
            updated_at: Some(now),
        };

        entries.push(entry.clone());
        Ok(entry)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.entries.lock().unwrap().len() as i64)
    }

    async fn list_page(&self, limit: i64, offset: i64) -> AppResult<Vec<WaitlistEntry>> {
        let mut entries = self.stored();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(entries
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }
}

// ============================================================================
// InMemoryEmailSender
// ============================================================================

/// One captured outbound email.
#[derive(Clone, Debug)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// In-memory EmailSender that records every send.
#[derive(Default)]
pub struct InMemoryEmailSender {
    sent: Mutex<Vec<SentEmail>>,
    fail_recipients: Mutex<Vec<String>>,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sends to the given recipient fail (they are not recorded).
    pub fn fail_for(&self, to: &str) {
        self.fail_recipients.lock().unwrap().push(to.to_string());
    }

    /// Emails captured so far (for test assertions).
    pub fn captured_emails(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        if self.fail_recipients.lock().unwrap().iter().any(|t| t == to) {
            return Err(AppError::Internal("email send failed".into()));
        }

        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}

/// EmailSender that always fails, for dispatch-outage tests.
#[derive(Default)]
pub struct FailingEmailSender;

#[async_trait]
impl EmailSender for FailingEmailSender {
    async fn send(&self, _to: &str, _subject: &str, _html: &str) -> AppResult<()> {
        Err(AppError::Internal("email send failed".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn repo_insert_rejects_duplicate_email() {
        let repo = InMemoryWaitlistRepo::new();

        repo.insert("a@example.com", "A").await.unwrap();
        let err = repo.insert("a@example.com", "B").await.unwrap_err();

        assert!(matches!(err, AppError::DuplicateEmail));
        assert_eq!(repo.stored().len(), 1);
    }

    #[tokio::test]
    async fn repo_list_page_windows_newest_first() {
        let repo = InMemoryWaitlistRepo::new();
        for i in 0..5 {
            repo.insert(&format!("u{i}@example.com"), "U").await.unwrap();
        }

        let page = repo.list_page(2, 0).await.unwrap();
        assert_eq!(page.len(), 2);

        let tail = repo.list_page(10, 4).await.unwrap();
        assert_eq!(tail.len(), 1);
    }

    #[tokio::test]
    async fn email_sender_captures_and_fails_selectively() {
        let sender = InMemoryEmailSender::new();
        sender.fail_for("blocked@example.com");

        sender.send("ok@example.com", "Hi", "<p>Hi</p>").await.unwrap();
        let err = sender
            .send("blocked@example.com", "Hi", "<p>Hi</p>")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
        let captured = sender.captured_emails();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].to, "ok@example.com");
    }
}
