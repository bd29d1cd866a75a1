use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use bindisa_contact::PageContent;

use crate::{
    config::Config,
    template::{NotFoundTemplate, Template},
    visit::{SharedScheduler, Visits},
};

mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub content: Arc<PageContent>,
    pub visits: Visits,
}

impl AppState {
    pub fn new(config: Config, scheduler: SharedScheduler) -> Self {
        let content = Arc::new(PageContent::new(&config.contact.directory()));
        let visits = Visits::new(
            scheduler,
            config.contact.submit_delay(),
            config.contact.visit_ttl(),
        );

        Self {
            config,
            content,
            visits,
        }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    let lang = template.preferred_language().to_owned();

    (
        StatusCode::NOT_FOUND,
        template.render(NotFoundTemplate { lang }),
    )
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/contact", get(contact::page).post(contact::submit))
        .route("/contact/field", post(contact::update_field))
        .route("/contact/status", get(contact::status))
        .route("/contact/reset", post(contact::reset))
        .route("/contact/leave", post(contact::leave))
        .route("/contact/go/{target}", get(contact::go))
        .nest_service("/static", crate::assets::AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
