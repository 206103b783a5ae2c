use crate::services::directory::{self, HealthArticle, SupportService};
use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct LibraryQuery {
    category: Option<String>,
}

pub fn router() -> Router {
    Router::new()
        .route("/services", get(services))
        .route("/library", get(library))
}

async fn services() -> Json<&'static [SupportService]> {
    Json(directory::SUPPORT_SERVICES)
}

async fn library(Query(query): Query<LibraryQuery>) -> Json<Vec<HealthArticle>> {
    Json(directory::library(query.category.as_deref()))
}
