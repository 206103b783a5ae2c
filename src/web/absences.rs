use crate::db::AbsenceFilter;
use crate::domain::absence::Absence;
use crate::services::intake::{self, AbsenceReport};
use crate::services::static_plans::{self, CarePlanView};
use crate::state::SharedState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(list_absences).post(submit_absence))
        .route("/:id", get(get_absence))
        .route("/:id/care-plan", get(get_care_plan))
        .with_state(state)
}

async fn list_absences(
    State(state): State<SharedState>,
    Query(filter): Query<AbsenceFilter>,
) -> Json<Vec<Absence>> {
    Json(state.store.list(&filter).await)
}

async fn submit_absence(
    State(state): State<SharedState>,
    Json(report): Json<AbsenceReport>,
) -> (StatusCode, Json<Absence>) {
    let stored = intake::submit_absence(&state.store, state.generator.as_ref(), report).await;
    (StatusCode::CREATED, Json(stored))
}

async fn get_absence(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<Absence>, StatusCode> {
    state
        .store
        .get(id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_care_plan(
    State(state): State<SharedState>,
    Path(id): Path<u64>,
) -> Result<Json<CarePlanView>, StatusCode> {
    let absence = state.store.get(id).await.ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(static_plans::view_for(&absence)))
}
