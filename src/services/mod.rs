pub mod care_plan;
pub mod directory;
pub mod intake;
pub mod reminders;
pub mod static_plans;
pub mod templates;
