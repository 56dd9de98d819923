// Core records, built-in catalogs, profile store and orientation engine for Future Skills Lab.

pub mod error;
pub mod types;

pub mod competencies;
pub mod careers;
pub mod profiles;
pub mod engine;

pub use careers::CareerCatalog;
pub use competencies::CompetencyRegistry;
pub use engine::{
    ImprovementSuggestion, OrientationConfig, OrientationEngine, Recommendation,
    DEFAULT_RECOMMENDATION_LIMIT, DEFAULT_WEAK_THRESHOLD,
};
pub use error::OrientationError;
pub use profiles::ProfileStore;
pub use types::{Career, CareerRequirement, Category, Competency, Profile};

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
