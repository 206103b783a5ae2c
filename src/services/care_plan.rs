use crate::domain::care_plan::{CarePlan, CarePlanRequest};
use crate::services::templates;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    FluRecovery,
    MentalHealth,
    BackInjury,
    Fallback,
}

struct Rule {
    keywords: &'static [&'static str],
    category: Option<&'static str>,
    template: TemplateId,
}

impl Rule {
    fn matches(&self, reason: &str, category: &str) -> bool {
        self.keywords.iter().any(|k| reason.contains(k))
            || self.category.is_some_and(|c| c == category)
    }
}

/// Evaluated top to bottom; the first matching rule wins.
static RULES: &[Rule] = &[
    Rule {
        keywords: &["flu", "fever", "cold"],
        category: None,
        template: TemplateId::FluRecovery,
    },
    Rule {
        keywords: &["stress", "anxiety", "burnout"],
        category: Some("mental-health"),
        template: TemplateId::MentalHealth,
    },
    Rule {
        keywords: &["back", "injury"],
        category: Some("injury"),
        template: TemplateId::BackInjury,
    },
];

/// Pick the condition template for a request. Only `reason` (matched
/// case-insensitively by substring) and `category` take part.
pub fn select_template(request: &CarePlanRequest) -> TemplateId {
    let reason = request.reason.to_lowercase();
    let category = request.category.as_str();
    RULES
        .iter()
        .find(|rule| rule.matches(&reason, category))
        .map(|rule| rule.template)
        .unwrap_or(TemplateId::Fallback)
}

pub fn instantiate(template: TemplateId, request: &CarePlanRequest) -> CarePlan {
    match template {
        TemplateId::FluRecovery => templates::FLU_RECOVERY.clone(),
        TemplateId::MentalHealth => templates::MENTAL_HEALTH.clone(),
        TemplateId::BackInjury => templates::BACK_INJURY.clone(),
        TemplateId::Fallback => templates::fallback(request),
    }
}

/// Deterministic classification; total over every request.
pub fn build_care_plan(request: &CarePlanRequest) -> CarePlan {
    instantiate(select_template(request), request)
}

#[derive(Debug, Error)]
#[error("care plan generation failed: {0}")]
pub struct GenerationFailure(pub String);

#[async_trait]
pub trait CarePlanGenerator: Send + Sync {
    async fn generate(&self, request: &CarePlanRequest) -> Result<CarePlan, GenerationFailure>;
}

/// Rule-table generator that waits a fixed latency before answering, in
/// place of a model call. No timeout is applied by callers.
#[derive(Debug, Clone)]
pub struct MockCarePlanGenerator {
    latency: Duration,
}

impl MockCarePlanGenerator {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockCarePlanGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

#[async_trait]
impl CarePlanGenerator for MockCarePlanGenerator {
    async fn generate(&self, request: &CarePlanRequest) -> Result<CarePlan, GenerationFailure> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        let template = select_template(request);
        tracing::debug!(
            "Selected {:?} care plan template for reason {:?} ({})",
            template,
            request.reason,
            request.category
        );
        Ok(instantiate(template, request))
    }
}
