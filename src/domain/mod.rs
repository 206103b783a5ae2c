pub mod absence;
pub mod care_plan;
