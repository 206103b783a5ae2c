use crate::db::AbsenceStore;
use crate::domain::absence::{AbsenceStatus, NewAbsence};
use crate::time_utils;
use anyhow::{Context, Result};
use chrono::NaiveDate;

struct SeedAbsence<'a> {
    employee: &'a str,
    reason: &'a str,
    category: &'a str,
    start: &'a str,
    end: &'a str,
    status: AbsenceStatus,
    details: &'a str,
    care_plan_active: bool,
}

const SAMPLE_ABSENCES: &[SeedAbsence<'static>] = &[
    SeedAbsence {
        employee: "Employee A",
        reason: "Flu symptoms",
        category: "illness",
        start: "2025-01-15",
        end: "2025-01-17",
        status: AbsenceStatus::Approved,
        details: "High fever and body aches",
        care_plan_active: true,
    },
    SeedAbsence {
        employee: "Employee B",
        reason: "Mental health support",
        category: "mental-health",
        start: "2025-01-14",
        end: "2025-01-16",
        status: AbsenceStatus::Approved,
        details: "Stress and anxiety",
        care_plan_active: true,
    },
    SeedAbsence {
        employee: "Employee C",
        reason: "Back injury",
        category: "injury",
        start: "2025-01-16",
        end: "2025-01-18",
        status: AbsenceStatus::Pending,
        details: "Lower back pain from lifting",
        care_plan_active: false,
    },
    SeedAbsence {
        employee: "Employee D",
        reason: "Migraine",
        category: "illness",
        start: "2025-01-20",
        end: "2025-01-21",
        status: AbsenceStatus::Approved,
        details: "Severe headache and nausea",
        care_plan_active: true,
    },
    SeedAbsence {
        employee: "Employee E",
        reason: "Medical appointment",
        category: "medical-appointment",
        start: "2025-01-22",
        end: "2025-01-22",
        status: AbsenceStatus::Approved,
        details: "Routine check-up",
        care_plan_active: false,
    },
    SeedAbsence {
        employee: "Employee F",
        reason: "Family care",
        category: "family-care",
        start: "2025-01-18",
        end: "2025-01-19",
        status: AbsenceStatus::Approved,
        details: "Caring for sick child",
        care_plan_active: false,
    },
    SeedAbsence {
        employee: "Employee G",
        reason: "Anxiety support",
        category: "mental-health",
        start: "2025-01-23",
        end: "2025-01-25",
        status: AbsenceStatus::Pending,
        details: "Work-related stress",
        care_plan_active: true,
    },
    SeedAbsence {
        employee: "Employee H",
        reason: "Workplace injury",
        category: "injury",
        start: "2025-01-19",
        end: "2025-01-22",
        status: AbsenceStatus::Approved,
        details: "Slipped and twisted ankle",
        care_plan_active: true,
    },
    SeedAbsence {
        employee: "Employee I",
        reason: "Cold symptoms",
        category: "illness",
        start: "2025-01-24",
        end: "2025-01-25",
        status: AbsenceStatus::Approved,
        details: "Runny nose and cough",
        care_plan_active: false,
    },
    SeedAbsence {
        employee: "Employee J",
        reason: "Dental surgery",
        category: "medical-appointment",
        start: "2025-01-26",
        end: "2025-01-27",
        status: AbsenceStatus::Approved,
        details: "Wisdom tooth removal",
        care_plan_active: true,
    },
    SeedAbsence {
        employee: "Employee K",
        reason: "Stomach flu",
        category: "illness",
        start: "2025-01-21",
        end: "2025-01-23",
        status: AbsenceStatus::Approved,
        details: "Nausea and vomiting",
        care_plan_active: true,
    },
    SeedAbsence {
        employee: "Employee L",
        reason: "Burnout support",
        category: "mental-health",
        start: "2025-01-28",
        end: "2025-01-30",
        status: AbsenceStatus::Pending,
        details: "Exhaustion and overwhelm",
        care_plan_active: true,
    },
];

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("bad seed date {raw}"))
}

/// Load the sample absences into an empty store. Sample records predate the
/// generator and carry no AI plan.
pub async fn seed_all(store: &AbsenceStore) -> Result<()> {
    if store.len().await > 0 {
        tracing::debug!("Absence store already populated, skipping seed");
        return Ok(());
    }

    for seed in SAMPLE_ABSENCES {
        let start_date = parse_date(seed.start)?;
        let end_date = parse_date(seed.end)?;
        store
            .insert(NewAbsence {
                employee_name: seed.employee.to_string(),
                reason: seed.reason.to_string(),
                category: seed.category.into(),
                start_date,
                end_date,
                status: seed.status,
                details: seed.details.to_string(),
                care_plan_active: seed.care_plan_active,
                days_off: time_utils::days_off(start_date, end_date),
                ai_care_plan: None,
                care_plan_generated_at: None,
            })
            .await;
    }

    tracing::info!("Seeded {} sample absences", SAMPLE_ABSENCES.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeds_once() {
        let store = AbsenceStore::new();
        seed_all(&store).await.unwrap();
        seed_all(&store).await.unwrap();
        assert_eq!(store.len().await, 12);

        let first = store.get(1).await.unwrap();
        assert_eq!(first.reason, "Flu symptoms");
        assert_eq!(first.days_off, 3);
        let fifth = store.get(5).await.unwrap();
        assert_eq!(fifth.days_off, 1);
    }
}
