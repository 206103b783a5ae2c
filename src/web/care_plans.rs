use crate::db::AbsenceFilter;
use crate::domain::absence::{Absence, StaticCarePlan};
use crate::domain::care_plan::{CarePlan, CarePlanRequest};
use crate::services::static_plans;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/active", get(active_plans))
        .route("/templates/:reason", get(static_template))
        .with_state(state)
}

async fn generate(
    State(state): State<SharedState>,
    Json(request): Json<CarePlanRequest>,
) -> Result<Json<CarePlan>, StatusCode> {
    state.generator.generate(&request).await.map(Json).map_err(|e| {
        tracing::error!("Care plan generation failed: {}", e);
        StatusCode::SERVICE_UNAVAILABLE
    })
}

async fn active_plans(State(state): State<SharedState>) -> Json<Vec<Absence>> {
    let filter = AbsenceFilter {
        care_plan_active: Some(true),
        ..Default::default()
    };
    Json(state.store.list(&filter).await)
}

async fn static_template(Path(reason): Path<String>) -> Json<StaticCarePlan> {
    Json(static_plans::lookup(&reason).clone())
}
