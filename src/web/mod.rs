pub mod absences;
pub mod care_plans;
pub mod dashboard;
pub mod support;

use crate::state::SharedState;
use axum::{routing::get, Router};

async fn health() -> &'static str {
    "OK"
}

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/absences", absences::router(state.clone()))
        .nest("/care-plans", care_plans::router(state.clone()))
        .nest("/dashboard", dashboard::router(state))
        .nest("/support", support::router())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::db::{seed, AbsenceStore};
    use crate::services::care_plan::MockCarePlanGenerator;
    use crate::state::AppState;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    async fn app() -> Router {
        let store = AbsenceStore::new();
        seed::seed_all(&store).await.unwrap();
        let state = Arc::new(AppState {
            store,
            generator: Arc::new(MockCarePlanGenerator::new(Duration::ZERO)),
            config: AppConfig::default(),
        });
        routes(state)
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn submit_then_fetch_care_plan() {
        let app = app().await;
        let (status, created) = send(
            app.clone(),
            Method::POST,
            "/absences",
            Some(json!({
                "employeeName": "Sarah Johnson",
                "reason": "Flu symptoms",
                "category": "illness",
                "startDate": "2025-01-15",
                "endDate": "2025-01-17",
                "details": "High fever"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], 13);
        assert_eq!(created["daysOff"], 3);
        assert_eq!(created["status"], "pending");
        assert_eq!(created["carePlanActive"], true);
        assert!(created["carePlanGeneratedAt"].is_string());
        assert_eq!(created["aiCarePlan"]["title"], "Flu Recovery & Wellness Plan");

        let (status, view) = send(app, Method::GET, "/absences/13/care-plan", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["kind"], "generated");
        assert_eq!(view["plan"]["estimatedRecoveryTime"], "3-5 days");
    }

    #[tokio::test]
    async fn seeded_absence_uses_static_plan() {
        let (status, view) = send(app().await, Method::GET, "/absences/2/care-plan", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["kind"], "static");
        assert_eq!(view["plan"]["title"], "Mental Wellbeing Support Plan");
    }

    #[tokio::test]
    async fn unknown_absence_is_404() {
        let (status, _) = send(app().await, Method::GET, "/absences/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_filters_from_query() {
        let (status, list) = send(
            app().await,
            Method::GET,
            "/absences?category=mental-health&status=pending",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<u64> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![7, 12]);
    }

    #[tokio::test]
    async fn generate_endpoint_runs_engine() {
        let (status, plan) = send(
            app().await,
            Method::POST,
            "/care-plans/generate",
            Some(json!({
                "employeeName": "Employee E",
                "reason": "Routine check-up",
                "category": "medical-appointment",
                "duration": "1 days"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(plan["title"], "Recovery Plan for medical appointment");
        assert_eq!(plan["estimatedRecoveryTime"], "1 days");
        assert_eq!(plan["resources"][0]["type"], "nz_health_service");
    }

    #[tokio::test]
    async fn active_care_plans_and_stats() {
        let app = app().await;
        let (_, active) = send(app.clone(), Method::GET, "/care-plans/active", None).await;
        assert_eq!(active.as_array().unwrap().len(), 8);

        let (_, stats) = send(app, Method::GET, "/dashboard/stats", None).await;
        assert_eq!(stats["totalAbsences"], 12);
        assert_eq!(stats["carePlansActive"], 8);
        assert_eq!(stats["avgDaysOff"], 2.6);
    }

    #[tokio::test]
    async fn static_template_falls_back() {
        let (_, plan) = send(app().await, Method::GET, "/care-plans/templates/Migraine", None).await;
        assert_eq!(plan["title"], "Flu Recovery Plan");
    }

    #[tokio::test]
    async fn support_library_filter() {
        let (status, articles) =
            send(app().await, Method::GET, "/support/library?category=Wellness", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(articles.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn reminders_for_date() {
        let app = app().await;
        send(
            app.clone(),
            Method::POST,
            "/absences",
            Some(json!({
                "employeeName": "Sarah Johnson",
                "reason": "Back injury",
                "category": "injury",
                "startDate": "2025-02-03",
                "endDate": "2025-02-07"
            })),
        )
        .await;

        let (status, body) =
            send(app, Method::GET, "/dashboard/reminders?date=2025-02-07", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2025-02-07");
        assert_eq!(body["reminders"][0]["day"], 5);
        assert_eq!(body["reminders"][0]["absenceId"], 13);
    }

    #[tokio::test]
    async fn far_future_absence_keeps_reminders_working() {
        let app = app().await;
        let (status, _) = send(
            app.clone(),
            Method::POST,
            "/absences",
            Some(json!({
                "employeeName": "Employee Z",
                "reason": "Burnout",
                "category": "mental-health",
                "startDate": "+262142-12-20",
                "endDate": "+262142-12-21"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) =
            send(app, Method::GET, "/dashboard/reminders?date=2025-01-01", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["reminders"].as_array().unwrap().is_empty());
    }
}
