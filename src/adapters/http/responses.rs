use serde::Serialize;

/// Uniform JSON envelope wrapped around every response body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: Option<T>,
    pub message: String,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success",
            data: Some(data),
            message: message.into(),
            error: None,
        }
    }
}

/// Window metadata attached to paginated listings.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Envelope plus pagination metadata, mirroring the plain [`ApiResponse`].
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    #[serde(flatten)]
    pub envelope: ApiResponse<Vec<T>>,
    pub pagination: PaginationMeta,
}
