use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    pub cors_origin: HeaderValue,
    /// Public origin of the frontend, shown in email footers.
    pub app_origin: Url,
    pub resend_api_key: SecretString,
    /// Sender address for all outbound email.
    pub email_from: String,
    /// Inbox that receives contact-form notifications.
    pub contact_recipient: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let database_url: String = get_env("DATABASE_URL");
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let app_origin: Url = get_env("APP_ORIGIN");
        let resend_api_key: SecretString =
            SecretString::new(get_env::<String>("RESEND_API_KEY").into());
        let email_from: String = get_env("EMAIL_FROM");
        let contact_recipient: String = get_env("CONTACT_RECIPIENT");

        Self {
            bind_addr,
            database_url,
            cors_origin,
            app_origin,
            resend_api_key,
            email_from,
            contact_recipient,
        }
    }
}
