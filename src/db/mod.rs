pub mod seed;

use crate::domain::absence::{Absence, AbsenceStatus, NewAbsence};
use crate::domain::care_plan::AbsenceCategory;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory system of record for absences. Records are append-only.
#[derive(Clone, Default)]
pub struct AbsenceStore {
    absences: Arc<RwLock<Vec<Absence>>>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsenceFilter {
    pub status: Option<AbsenceStatus>,
    pub category: Option<AbsenceCategory>,
    pub employee: Option<String>,
    pub care_plan_active: Option<bool>,
    pub q: Option<String>,
}

impl AbsenceFilter {
    pub fn matches(&self, absence: &Absence) -> bool {
        if let Some(status) = self.status {
            if absence.status != status {
                return false;
            }
        }
        if let Some(category) = self
            .category
            .as_ref()
            .filter(|c| !c.as_str().trim().is_empty())
        {
            if &absence.category != category {
                return false;
            }
        }
        if let Some(active) = self.care_plan_active {
            if absence.care_plan_active != active {
                return false;
            }
        }
        if let Some(employee) = non_empty(&self.employee) {
            if !absence
                .employee_name
                .to_lowercase()
                .contains(&employee.to_lowercase())
            {
                return false;
            }
        }
        if let Some(q) = non_empty(&self.q) {
            let q = q.to_lowercase();
            if !absence.reason.to_lowercase().contains(&q)
                && !absence.details.to_lowercase().contains(&q)
            {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl AbsenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a reported absence and return it with its assigned id. The id is
    /// taken under the write lock, so a care plan attached beforehand becomes
    /// visible together with the record.
    pub async fn insert(&self, absence: NewAbsence) -> Absence {
        let mut absences = self.absences.write().await;
        let id = absences.len() as u64 + 1;
        let stored = absence.into_absence(id);
        absences.push(stored.clone());
        tracing::debug!("Stored absence {} ({} total)", id, absences.len());
        stored
    }

    pub async fn get(&self, id: u64) -> Option<Absence> {
        let absences = self.absences.read().await;
        absences.iter().find(|a| a.id == id).cloned()
    }

    pub async fn list(&self, filter: &AbsenceFilter) -> Vec<Absence> {
        let absences = self.absences.read().await;
        absences.iter().filter(|a| filter.matches(a)).cloned().collect()
    }

    pub async fn all(&self) -> Vec<Absence> {
        self.absences.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.absences.read().await.len()
    }
}
