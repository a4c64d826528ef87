// Route exports
pub mod extract;
pub mod health;
pub mod reports;

use actix_web::web;
use std::sync::Arc;

use crate::services::ReportReader;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub reader: Arc<dyn ReportReader>,
}

impl AppState {
    pub fn new(reader: Arc<dyn ReportReader>) -> Self {
        Self { reader }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure)
            .configure(reports::configure),
    );
}
