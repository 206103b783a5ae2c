use crate::db::AbsenceStore;
use crate::domain::absence::{Absence, AbsenceStatus, NewAbsence};
use crate::domain::care_plan::{AbsenceCategory, CarePlanRequest, WorkEnvironment};
use crate::services::care_plan::CarePlanGenerator;
use crate::time_utils;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

// Placeholders until employee profiles carry these.
const DEFAULT_WORK_ENVIRONMENT: WorkEnvironment = WorkEnvironment::Office;
const DEFAULT_LOCATION: &str = "Auckland, NZ";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceReport {
    pub employee_name: String,
    pub reason: String,
    pub category: AbsenceCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub details: String,
}

impl AbsenceReport {
    pub fn into_new_absence(self) -> NewAbsence {
        let days_off = time_utils::days_off(self.start_date, self.end_date);
        NewAbsence {
            employee_name: self.employee_name,
            reason: self.reason,
            category: self.category,
            start_date: self.start_date,
            end_date: self.end_date,
            status: AbsenceStatus::Pending,
            details: self.details,
            care_plan_active: false,
            days_off,
            ai_care_plan: None,
            care_plan_generated_at: None,
        }
    }
}

pub fn care_plan_request(absence: &NewAbsence) -> CarePlanRequest {
    let symptoms = if absence.details.is_empty() {
        Vec::new()
    } else {
        vec![absence.details.clone()]
    };
    CarePlanRequest {
        employee_name: absence.employee_name.clone(),
        reason: absence.reason.clone(),
        category: absence.category.clone(),
        symptoms: Some(symptoms),
        duration: format!("{} days", absence.days_off),
        previous_absences: None,
        work_environment: Some(DEFAULT_WORK_ENVIRONMENT),
        location: Some(DEFAULT_LOCATION.to_string()),
    }
}

/// Generate a care plan for a freshly reported absence and attach it. A
/// failed generation leaves the absence without a plan.
pub async fn attach_care_plan(generator: &dyn CarePlanGenerator, mut absence: NewAbsence) -> NewAbsence {
    let request = care_plan_request(&absence);
    match generator.generate(&request).await {
        Ok(plan) => {
            absence.ai_care_plan = Some(plan);
            absence.care_plan_active = true;
            absence.care_plan_generated_at = Some(Utc::now());
        }
        Err(e) => {
            tracing::warn!(
                "Care plan generation failed for {} ({}): {}",
                absence.employee_name,
                absence.reason,
                e
            );
        }
    }
    absence
}

/// Record an absence report. Always stores the absence, with or without a
/// care plan.
pub async fn submit_absence(
    store: &AbsenceStore,
    generator: &dyn CarePlanGenerator,
    report: AbsenceReport,
) -> Absence {
    let absence = attach_care_plan(generator, report.into_new_absence()).await;
    let stored = store.insert(absence).await;
    tracing::info!(
        "Absence {} recorded for {} ({} days, care plan: {})",
        stored.id,
        stored.employee_name,
        stored.days_off,
        stored.care_plan_active
    );
    stored
}
