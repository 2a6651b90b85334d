pub mod config;
pub mod engine;
pub mod rules;
pub mod validation;

pub use config::ScoringConfig;
pub use engine::{calculate_points, PointsResult, RuleContribution};
pub use validation::validate_scoring;
