//! Orientation Engine
//!
//! Scores a profile against every career in the catalog and picks out the
//! competencies the profile should work on next.
//!
//! Formula: score = Σ(rating × weight) / Σ(5 × weight) × 100
//! Where:
//! - rating: the profile's 1-5 rating, or 0 when the profile does not rate it
//! - weight: the career's importance weight for that competency
//!
//! A career whose total weight is 0 scores 0.

use crate::careers::CareerCatalog;
use crate::competencies::CompetencyRegistry;
use crate::types::{Career, Category, Competency, Profile, MAX_RATING, MIN_RATING};
use serde::Serialize;
use std::cmp::Reverse;

/// Ratings at or below this value count as weak
pub const DEFAULT_WEAK_THRESHOLD: u8 = 3;
/// How many careers the menu shows by default
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Scores are ranked at this resolution (percentage points) so that rounding
/// noise from fractional weights cannot break a tie
const RANKING_RESOLUTION: f64 = 1e-6;

const TECHNICAL_ACTIVITY: &str =
    "Take a structured course and practice with hands-on exercises or projects";
const BEHAVIORAL_ACTIVITY: &str =
    "Seek a mentor and practice the skill in team or group settings";

/// Canned improvement activity for a competency category
pub fn activity_for(category: Category) -> &'static str {
    match category {
        Category::Technical => TECHNICAL_ACTIVITY,
        Category::Behavioral => BEHAVIORAL_ACTIVITY,
    }
}

// ============================================================
// RESULTS
// ============================================================

/// A career paired with its compatibility percentage (0-100)
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation<'a> {
    pub career: &'a Career,
    pub score: f64,
}

/// A weak competency with what to do about it. The competency-specific
/// activities live in `competency.track`.
#[derive(Debug, Clone, Serialize)]
pub struct ImprovementSuggestion<'a> {
    pub competency: &'a Competency,
    pub rating: u8,
    /// Category-level activity
    pub activity: &'static str,
}

// ============================================================
// ENGINE
// ============================================================

/// Configuration for the engine
#[derive(Debug, Clone)]
pub struct OrientationConfig {
    pub recommendation_limit: usize,
    pub weak_threshold: u8,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            weak_threshold: DEFAULT_WEAK_THRESHOLD,
        }
    }
}

/// Stateless scoring over a registry and a catalog
#[derive(Debug, Clone)]
pub struct OrientationEngine<'a> {
    registry: &'a CompetencyRegistry,
    catalog: &'a CareerCatalog,
    config: OrientationConfig,
}

impl OrientationEngine<'static> {
    /// Engine over the built-in registry and catalog
    pub fn builtin(config: OrientationConfig) -> Self {
        OrientationEngine::new(
            CompetencyRegistry::builtin(),
            CareerCatalog::builtin(),
            config,
        )
    }
}

impl<'a> OrientationEngine<'a> {
    pub fn new(
        registry: &'a CompetencyRegistry,
        catalog: &'a CareerCatalog,
        config: OrientationConfig,
    ) -> Self {
        log::debug!("[ENGINE] Initializing with config: {:?}", config);
        Self {
            registry,
            catalog,
            config,
        }
    }

    pub fn config(&self) -> &OrientationConfig {
        &self.config
    }

    pub fn registry(&self) -> &'a CompetencyRegistry {
        self.registry
    }

    pub fn catalog(&self) -> &'a CareerCatalog {
        self.catalog
    }

    /// Compatibility of `profile` with `career`, as a percentage
    pub fn score(&self, profile: &Profile, career: &Career) -> f64 {
        compatibility_score(profile, career)
    }

    /// Every career, best match first. Equal scores keep catalog order.
    pub fn recommend(&self, profile: &Profile) -> Vec<Recommendation<'a>> {
        let mut results: Vec<Recommendation<'a>> = self
            .catalog
            .list()
            .iter()
            .map(|career| Recommendation {
                career,
                score: compatibility_score(profile, career),
            })
            .collect();

        // stable sort, so ties stay in catalog order
        results.sort_by_key(|r| Reverse(ranking_key(r.score)));

        log::info!(
            "[ENGINE] Ranked {} careers for '{}'",
            results.len(),
            profile.name
        );
        results
    }

    /// The best `limit` careers
    pub fn top_recommendations(&self, profile: &Profile, limit: usize) -> Vec<Recommendation<'a>> {
        let mut results = self.recommend(profile);
        results.truncate(limit);
        results
    }

    /// Competencies rated at or below `threshold`, weakest first then by name
    pub fn suggest_improvements(
        &self,
        profile: &Profile,
        threshold: u8,
    ) -> Vec<ImprovementSuggestion<'a>> {
        let mut suggestions: Vec<ImprovementSuggestion<'a>> = profile
            .ratings
            .iter()
            .filter(|(_, rating)| **rating <= threshold)
            .filter_map(|(name, rating)| match self.registry.find(name) {
                Ok(competency) => Some(ImprovementSuggestion {
                    competency,
                    rating: *rating,
                    activity: activity_for(competency.category),
                }),
                Err(_) => {
                    log::warn!("[ENGINE] Ignoring rating for unknown competency '{}'", name);
                    None
                }
            })
            .collect();

        suggestions.sort_by(|a, b| {
            a.rating
                .cmp(&b.rating)
                .then_with(|| a.competency.name.cmp(&b.competency.name))
        });

        log::info!(
            "[ENGINE] {} improvement suggestions for '{}' (threshold {})",
            suggestions.len(),
            profile.name,
            threshold
        );
        suggestions
    }
}

/// Score rounded to `RANKING_RESOLUTION` for ordering
fn ranking_key(score: f64) -> i64 {
    (score / RANKING_RESOLUTION).round() as i64
}

/// Weighted-average score; missing ratings count as 0.
///
/// Ratings outside 1-5 only reach this point when a profile bypasses the
/// store. They are used as given and logged, so the result can leave 0-100.
pub fn compatibility_score(profile: &Profile, career: &Career) -> f64 {
    let max_total: f64 = career
        .requirements
        .iter()
        .map(|r| f64::from(MAX_RATING) * r.weight)
        .sum();
    if max_total <= 0.0 {
        return 0.0;
    }

    let total: f64 = career
        .requirements
        .iter()
        .map(|r| {
            let rated = profile.rating(&r.competency);
            let rating = rated.unwrap_or(0);
            if rated.is_some() && !(MIN_RATING..=MAX_RATING).contains(&rating) {
                log::warn!(
                    "[ENGINE] Profile '{}' rates '{}' at {}, outside {}-{}",
                    profile.name,
                    r.competency,
                    rating,
                    MIN_RATING,
                    MAX_RATING
                );
            }
            f64::from(rating) * r.weight
        })
        .sum();

    total / max_total * 100.0
}
