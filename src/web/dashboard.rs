use crate::analytics::stats::{self, CategoryBreakdown};
use crate::domain::absence::DashboardStats;
use crate::services::reminders::{self, DueReminder};
use crate::state::SharedState;
use crate::time_utils;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct ReminderQuery {
    date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct RemindersResponse {
    date: NaiveDate,
    reminders: Vec<DueReminder>,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/stats", get(dashboard_stats))
        .route("/categories", get(categories))
        .route("/reminders", get(due_reminders))
        .with_state(state)
}

async fn dashboard_stats(State(state): State<SharedState>) -> Json<DashboardStats> {
    let absences = state.store.all().await;
    let today = time_utils::today(state.config.org_timezone);
    Json(stats::calculate_dashboard_stats(&absences, today))
}

async fn categories(State(state): State<SharedState>) -> Json<Vec<CategoryBreakdown>> {
    let absences = state.store.all().await;
    Json(stats::category_breakdown(&absences))
}

async fn due_reminders(
    State(state): State<SharedState>,
    Query(query): Query<ReminderQuery>,
) -> Json<RemindersResponse> {
    let date = query
        .date
        .unwrap_or_else(|| time_utils::today(state.config.org_timezone));
    let absences = state.store.all().await;
    Json(RemindersResponse {
        date,
        reminders: reminders::due_on(&absences, date),
    })
}
