use crate::domain::absence::Absence;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DueReminder {
    pub absence_id: u64,
    pub employee_name: String,
    pub day: u32,
    pub due_date: NaiveDate,
    pub message: String,
    pub action: String,
}

/// Calendar date of a reminder; day 1 is the absence start date. `None` when
/// the date falls outside chrono's range.
pub fn due_date(start: NaiveDate, day: u32) -> Option<NaiveDate> {
    start.checked_add_signed(Duration::days(i64::from(day.max(1)) - 1))
}

/// Follow-up reminders from generated care plans that fall due on `date`.
pub fn due_on(absences: &[Absence], date: NaiveDate) -> Vec<DueReminder> {
    absences
        .iter()
        .filter_map(|a| a.ai_care_plan.as_ref().map(|plan| (a, plan)))
        .flat_map(|(absence, plan)| {
            plan.follow_up_reminders
                .iter()
                .filter(move |r| due_date(absence.start_date, r.day) == Some(date))
                .map(move |r| DueReminder {
                    absence_id: absence.id,
                    employee_name: absence.employee_name.clone(),
                    day: r.day,
                    due_date: date,
                    message: r.message.clone(),
                    action: r.action.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::absence::{AbsenceStatus, NewAbsence};
    use crate::services::templates;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn absence_with_flu_plan(id: u64, start: NaiveDate) -> Absence {
        NewAbsence {
            employee_name: format!("Employee {id}"),
            reason: "Flu symptoms".into(),
            category: "illness".into(),
            start_date: start,
            end_date: start + Duration::days(2),
            status: AbsenceStatus::Pending,
            details: String::new(),
            care_plan_active: true,
            days_off: 3,
            ai_care_plan: Some(templates::FLU_RECOVERY.clone()),
            care_plan_generated_at: None,
        }
        .into_absence(id)
    }

    #[test]
    fn day_one_is_start_date() {
        assert_eq!(due_date(date(2025, 1, 15), 1), Some(date(2025, 1, 15)));
        assert_eq!(due_date(date(2025, 1, 15), 3), Some(date(2025, 1, 17)));
    }

    #[test]
    fn far_future_start_is_skipped() {
        let start = NaiveDate::MAX - Duration::days(1);
        assert_eq!(due_date(start, 30), None);

        let mut far = absence_with_flu_plan(1, date(2025, 1, 1));
        far.start_date = start;
        far.end_date = NaiveDate::MAX;
        let absences = vec![far, absence_with_flu_plan(2, date(2025, 1, 15))];
        let due = due_on(&absences, date(2025, 1, 17));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].absence_id, 2);
    }

    #[test]
    fn finds_due_reminders() {
        let absences = vec![
            absence_with_flu_plan(1, date(2025, 1, 15)),
            absence_with_flu_plan(2, date(2025, 1, 11)),
        ];

        let due = due_on(&absences, date(2025, 1, 17));
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].absence_id, 1);
        assert_eq!(due[0].day, 3);
        assert_eq!(due[1].absence_id, 2);
        assert_eq!(due[1].day, 7);

        assert!(due_on(&absences, date(2025, 1, 16)).is_empty());
    }

    #[test]
    fn ignores_absences_without_generated_plan() {
        let mut absence = absence_with_flu_plan(1, date(2025, 1, 15));
        absence.ai_care_plan = None;
        assert!(due_on(&[absence], date(2025, 1, 17)).is_empty());
    }
}
