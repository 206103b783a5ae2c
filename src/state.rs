use crate::config::AppConfig;
use crate::db::AbsenceStore;
use crate::services::care_plan::CarePlanGenerator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: AbsenceStore,
    pub generator: Arc<dyn CarePlanGenerator>,
    pub config: AppConfig,
}

pub type SharedState = Arc<AppState>;
