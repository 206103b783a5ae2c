use serde::{Deserialize, Serialize};

/// Absence category as reported by the employee.
///
/// Unknown strings are carried through untouched so that every request,
/// however malformed, still reaches the fallback template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AbsenceCategory {
    Illness,
    MentalHealth,
    Injury,
    MedicalAppointment,
    FamilyCare,
    Other(String),
}

impl AbsenceCategory {
    pub fn as_str(&self) -> &str {
        match self {
            AbsenceCategory::Illness => "illness",
            AbsenceCategory::MentalHealth => "mental-health",
            AbsenceCategory::Injury => "injury",
            AbsenceCategory::MedicalAppointment => "medical-appointment",
            AbsenceCategory::FamilyCare => "family-care",
            AbsenceCategory::Other(raw) => raw,
        }
    }
}

impl From<String> for AbsenceCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "illness" => AbsenceCategory::Illness,
            "mental-health" => AbsenceCategory::MentalHealth,
            "injury" => AbsenceCategory::Injury,
            "medical-appointment" => AbsenceCategory::MedicalAppointment,
            "family-care" => AbsenceCategory::FamilyCare,
            _ => AbsenceCategory::Other(value),
        }
    }
}

impl From<&str> for AbsenceCategory {
    fn from(value: &str) -> Self {
        AbsenceCategory::from(value.to_string())
    }
}

impl From<AbsenceCategory> for String {
    fn from(value: AbsenceCategory) -> Self {
        match value {
            AbsenceCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for AbsenceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkEnvironment {
    Office,
    Manufacturing,
    Healthcare,
    Remote,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceOutcome {
    Successful,
    Extended,
    Recurring,
}

/// Outcome of an earlier absence. Accepted on requests, not yet consulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriorAbsence {
    pub reason: String,
    pub category: AbsenceCategory,
    pub duration: u32,
    pub outcome: AbsenceOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CarePlanRequest {
    pub employee_name: String,
    pub reason: String,
    pub category: AbsenceCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<String>>,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_absences: Option<Vec<PriorAbsence>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_environment: Option<WorkEnvironment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayPlan {
    pub day: u32,
    pub focus: String,
    pub tasks: Vec<String>,
    pub checkpoints: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    NzHealthService,
    AccResource,
    WellnessTip,
    EmergencyContact,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReturnToWorkGuidance {
    pub gradual_return: bool,
    pub accommodations: Vec<String>,
    pub check_in_schedule: Vec<String>,
}

/// Follow-up nudge. `day` counts from the first day of the absence (day 1).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reminder {
    pub day: u32,
    pub message: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CarePlan {
    pub title: String,
    pub overview: String,
    pub estimated_recovery_time: String,
    pub daily_plan: Vec<DayPlan>,
    pub resources: Vec<Resource>,
    pub return_to_work_guidance: ReturnToWorkGuidance,
    pub red_flags: Vec<String>,
    pub follow_up_reminders: Vec<Reminder>,
}
