pub mod care_plan;

pub use care_plan::{generate_care_plan, generate_from_source, CarePlan};
