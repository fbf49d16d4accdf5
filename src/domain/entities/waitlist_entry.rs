use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// A single waitlist signup as stored in the database.
///
/// `email` is kept exactly as the caller provided it (after trimming); the
/// store's unique constraint compares the raw value, no case folding.
#[derive(Debug, Clone, Serialize)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
