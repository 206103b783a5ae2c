use crate::domain::care_plan::{AbsenceCategory, CarePlan};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AbsenceStatus {
    Approved,
    Pending,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Absence {
    pub id: u64,
    pub employee_name: String,
    pub reason: String,
    pub category: AbsenceCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: AbsenceStatus,
    pub details: String,
    pub care_plan_active: bool,
    pub days_off: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_care_plan: Option<CarePlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub care_plan_generated_at: Option<DateTime<Utc>>,
}

/// An absence that has been reported but not yet stored. The store assigns
/// the id on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAbsence {
    pub employee_name: String,
    pub reason: String,
    pub category: AbsenceCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: AbsenceStatus,
    pub details: String,
    pub care_plan_active: bool,
    pub days_off: i64,
    pub ai_care_plan: Option<CarePlan>,
    pub care_plan_generated_at: Option<DateTime<Utc>>,
}

impl NewAbsence {
    pub fn into_absence(self, id: u64) -> Absence {
        Absence {
            id,
            employee_name: self.employee_name,
            reason: self.reason,
            category: self.category,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            details: self.details,
            care_plan_active: self.care_plan_active,
            days_off: self.days_off,
            ai_care_plan: self.ai_care_plan,
            care_plan_generated_at: self.care_plan_generated_at,
        }
    }
}

/// Legacy hand-written plan shown when an absence has no generated plan.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StaticCarePlan {
    pub title: String,
    pub days: Vec<StaticCarePlanDay>,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StaticCarePlanDay {
    pub day: u32,
    pub focus: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_absences: usize,
    pub active_absences: usize,
    pub avg_days_off: f64,
    pub care_plans_active: usize,
}
