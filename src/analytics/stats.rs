use crate::domain::absence::{Absence, AbsenceStatus, DashboardStats};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: String,
    pub absences: usize,
    pub total_days: i64,
    pub care_plans_active: usize,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// An absence is active when it was not rejected and has not ended before
/// `today`.
pub fn is_active(absence: &Absence, today: NaiveDate) -> bool {
    absence.status != AbsenceStatus::Rejected && absence.end_date >= today
}

pub fn calculate_dashboard_stats(absences: &[Absence], today: NaiveDate) -> DashboardStats {
    let total = absences.len();
    let avg_days_off = if total == 0 {
        0.0
    } else {
        let days: i64 = absences.iter().map(|a| a.days_off).sum();
        round1(days as f64 / total as f64)
    };

    DashboardStats {
        total_absences: total,
        active_absences: absences.iter().filter(|a| is_active(a, today)).count(),
        avg_days_off,
        care_plans_active: absences.iter().filter(|a| a.care_plan_active).count(),
    }
}

/// Per-category totals, sorted by category name.
pub fn category_breakdown(absences: &[Absence]) -> Vec<CategoryBreakdown> {
    let mut by_category: BTreeMap<String, CategoryBreakdown> = BTreeMap::new();
    for absence in absences {
        let key = absence.category.as_str().to_string();
        let entry = by_category
            .entry(key.clone())
            .or_insert_with(|| CategoryBreakdown {
                category: key,
                absences: 0,
                total_days: 0,
                care_plans_active: 0,
            });
        entry.absences += 1;
        entry.total_days += absence.days_off;
        if absence.care_plan_active {
            entry.care_plans_active += 1;
        }
    }
    by_category.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{seed, AbsenceStore};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn sample() -> Vec<Absence> {
        let store = AbsenceStore::new();
        seed::seed_all(&store).await.unwrap();
        store.all().await
    }

    #[tokio::test]
    async fn stats_derive_from_records() {
        let absences = sample().await;
        let stats = calculate_dashboard_stats(&absences, date(2025, 1, 24));
        assert_eq!(stats.total_absences, 12);
        assert_eq!(stats.care_plans_active, 8);
        assert_eq!(stats.avg_days_off, 2.6);
        // ending on or after Jan 24: G (25th), I (25th), J (27th), L (30th)
        assert_eq!(stats.active_absences, 4);

        let later = calculate_dashboard_stats(&absences, date(2026, 1, 1));
        assert_eq!(later.active_absences, 0);
    }

    #[test]
    fn empty_collection() {
        let stats = calculate_dashboard_stats(&[], date(2025, 1, 1));
        assert_eq!(stats.total_absences, 0);
        assert_eq!(stats.avg_days_off, 0.0);
    }

    #[tokio::test]
    async fn breakdown_groups_by_category() {
        let breakdown = category_breakdown(&sample().await);
        let names: Vec<&str> = breakdown.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(
            names,
            vec!["family-care", "illness", "injury", "medical-appointment", "mental-health"]
        );
        let illness = &breakdown[1];
        assert_eq!(illness.absences, 4);
        assert_eq!(illness.total_days, 10);
        assert_eq!(illness.care_plans_active, 3);
    }
}
