use crate::domain::absence::{Absence, StaticCarePlan, StaticCarePlanDay};
use crate::domain::care_plan::CarePlan;
use once_cell::sync::Lazy;
use serde::Serialize;

fn plan(title: &str, days: &[(u32, &str, [&str; 3])], resources: &[&str]) -> StaticCarePlan {
    StaticCarePlan {
        title: title.into(),
        days: days
            .iter()
            .map(|(day, focus, tasks)| StaticCarePlanDay {
                day: *day,
                focus: focus.to_string(),
                tasks: tasks.iter().map(|t| t.to_string()).collect(),
            })
            .collect(),
        resources: resources.iter().map(|r| r.to_string()).collect(),
    }
}

static FLU_RECOVERY: Lazy<StaticCarePlan> = Lazy::new(|| {
    plan(
        "Flu Recovery Plan",
        &[
            (1, "Rest & Hydration", ["Stay hydrated with warm fluids", "Get 8-10 hours sleep", "Take temperature regularly"]),
            (2, "Symptom Management", ["Continue rest", "Light stretching if feeling better", "Eat nutritious foods"]),
            (3, "Gradual Recovery", ["Short walks if energy permits", "Monitor symptoms", "Prepare for return to work"]),
        ],
        &["NHS Flu Guide", "Nutrition During Illness", "When to See a Doctor"],
    )
});

static MENTAL_WELLBEING: Lazy<StaticCarePlan> = Lazy::new(|| {
    plan(
        "Mental Wellbeing Support Plan",
        &[
            (1, "Immediate Support", ["Contact EAP counselor", "Practice breathing exercises", "Reach out to trusted friend"]),
            (2, "Stress Management", ["Try mindfulness meditation", "Light physical activity", "Journal your feelings"]),
            (3, "Building Resilience", ["Review coping strategies", "Plan gradual work return", "Schedule follow-up support"]),
        ],
        &["Mental Health Foundation", "Employee Assistance Program", "Mindfulness Apps", "Crisis Helplines"],
    )
});

/// Look up the hand-written plan keyed by lower-cased reason. Only
/// "flu symptoms" and "mental health support" are keyed; anything else gets
/// the flu plan.
pub fn lookup(reason: &str) -> &'static StaticCarePlan {
    match reason.to_lowercase().as_str() {
        "mental health support" => &*MENTAL_WELLBEING,
        _ => &*FLU_RECOVERY,
    }
}

/// What the care-plan view shows for an absence.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "plan", rename_all = "snake_case")]
pub enum CarePlanView {
    Generated(CarePlan),
    Static(StaticCarePlan),
}

pub fn view_for(absence: &Absence) -> CarePlanView {
    match &absence.ai_care_plan {
        Some(plan) => CarePlanView::Generated(plan.clone()),
        None => CarePlanView::Static(lookup(&absence.reason).clone()),
    }
}
