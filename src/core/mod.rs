//! Core modules for Mailarmor

pub mod normalizer;
pub mod negation;
pub mod rule_table;
pub mod repository;
pub mod scoring;
pub mod arbitrator;
pub mod classifier;
pub mod catalog;
pub mod api;

pub use normalizer::normalize;
pub use negation::is_negated;
pub use rule_table::BUILTIN_RULES;
pub use repository::RuleRepository;
pub use scoring::{score, score_category, CategoryScore, ScoreSheet};
pub use arbitrator::arbitrate;
pub use classifier::Classifier;
pub use catalog::{categories, samples, CategoryInfo, Sample};
pub use api::{create_router, run_server};
