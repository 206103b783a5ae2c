mod analytics;
mod config;
mod db;
mod domain;
mod services;
mod state;
mod time_utils;
mod web;

use crate::config::AppConfig;
use crate::db::{seed, AbsenceStore};
use crate::services::care_plan::MockCarePlanGenerator;
use crate::state::SharedState;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;

    let store = AbsenceStore::new();
    if config.seed_sample_data {
        seed::seed_all(&store).await?;
    }

    tracing::info!(
        "Care plan generator: rule templates, simulated latency {} ms",
        config.care_plan_latency.as_millis()
    );
    let generator = Arc::new(MockCarePlanGenerator::new(config.care_plan_latency));

    let shared: SharedState = Arc::new(state::AppState {
        store,
        generator,
        config: config.clone(),
    });

    let scheduler = JobScheduler::new().await?;

    // Follow-up reminders: there is no delivery channel yet, so due reminders
    // are logged for the coordinator.
    let shared_for_reminders = shared.clone();
    scheduler
        .add(Job::new_async(config.reminder_cron.as_str(), move |_uuid, _l| {
            let state = shared_for_reminders.clone();
            Box::pin(async move {
                let today = time_utils::today(state.config.org_timezone);
                let absences = state.store.all().await;
                let due = services::reminders::due_on(&absences, today);
                if due.is_empty() {
                    tracing::debug!("No follow-up reminders due on {}", today);
                    return;
                }
                tracing::info!("{} follow-up reminders due on {}", due.len(), today);
                for reminder in due {
                    tracing::info!(
                        "Absence {} ({}), day {}: {} -> {}",
                        reminder.absence_id,
                        reminder.employee_name,
                        reminder.day,
                        reminder.message,
                        reminder.action
                    );
                }
            })
        })?)
        .await?;

    scheduler.start().await?;
    tracing::info!("Scheduler started: follow-up reminders ({})", config.reminder_cron);

    let app = web::routes(shared)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("Listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
