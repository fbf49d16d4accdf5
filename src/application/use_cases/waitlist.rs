use std::sync::Arc;

use async_trait::async_trait;
use tracing::{instrument, warn};

use crate::{
    app_error::{AppError, AppResult},
    application::{email_templates, validators::is_valid_email},
    domain::entities::waitlist_entry::WaitlistEntry,
};

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;
    /// Inserts a new entry; the unique constraint on `email` surfaces as
    /// [`AppError::DuplicateEmail`].
    async fn insert(&self, email: &str, name: &str) -> AppResult<WaitlistEntry>;
    async fn count(&self) -> AppResult<i64>;
    /// One window of entries ordered `created_at DESC, id DESC`.
    async fn list_page(&self, limit: i64, offset: i64) -> AppResult<Vec<WaitlistEntry>>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
/// Upper bound for a single page; also caps the `list_all` dump.
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// A window of entries plus derived pagination metadata.
#[derive(Debug)]
pub struct PaginatedEntries {
    pub entries: Vec<WaitlistEntry>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    email: Arc<dyn EmailSender>,
    app_origin: String,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, email: Arc<dyn EmailSender>, app_origin: String) -> Self {
        Self {
            repo,
            email,
            app_origin,
        }
    }

    #[instrument(skip(self))]
    pub async fn subscribe(&self, email: &str, name: &str) -> AppResult<WaitlistEntry> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(AppError::InvalidInput("Invalid email format".into()));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput("Name must not be empty".into()));
        }

        if self.repo.find_by_email(email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        // The pre-check above is not atomic with the insert; the store's
        // unique constraint stays authoritative, and a concurrent signup that
        // slips past the check comes back as DuplicateEmail here too.
        let entry = self.repo.insert(email, name).await?;

        let (subject, html) = email_templates::welcome_email(&self.app_origin, name);
        if let Err(err) = self.email.send(&entry.email, &subject, &html).await {
            warn!(error = ?err, email = %entry.email, "sending welcome email failed");
        }

        Ok(entry)
    }

    #[instrument(skip(self))]
    pub async fn list(&self, page: Option<i64>, limit: Option<i64>) -> AppResult<PaginatedEntries> {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
        let offset = (page - 1) * limit;

        let total = self.repo.count().await?;
        let entries = self.repo.list_page(limit, offset).await?;
        let total_pages = ((total as f64) / (limit as f64)).ceil() as i64;

        Ok(PaginatedEntries {
            entries,
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        })
    }

    /// Single capped page for the admin "dump everything" listing; not
    /// suitable for large datasets.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        Ok(self.list(Some(1), Some(MAX_PAGE_LIMIT)).await?.entries)
    }
}
