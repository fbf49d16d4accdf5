use std::sync::Arc;

use crate::{
    application::use_cases::{contact::ContactUseCases, waitlist::WaitlistUseCases},
    infra::config::AppConfig,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub waitlist_use_cases: Arc<WaitlistUseCases>,
    pub contact_use_cases: Arc<ContactUseCases>,
}
