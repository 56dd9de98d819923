//! Future Skills Lab Types
//!
//! Core records shared by the registry, the career catalog, the profile
//! store and the orientation engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lowest accepted self-rating
pub const MIN_RATING: u8 = 1;
/// Highest accepted self-rating, also the per-competency maximum used for scoring
pub const MAX_RATING: u8 = 5;

// ============================================================
// COMPETENCY
// ============================================================

/// Whether a competency is a hard skill or a soft skill
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technical,
    Behavioral,
}

impl Category {
    /// Label in the language of the built-in catalog
    pub fn label(&self) -> &'static str {
        match self {
            Category::Technical => "Técnica",
            Category::Behavioral => "Comportamental",
        }
    }
}

/// A named skill that careers require in varying degree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Competency {
    pub name: String,
    pub category: Category,
    pub description: String,
    /// Concrete study/practice activities for this competency
    #[serde(default)]
    pub track: Vec<String>,
}

impl Competency {
    pub fn new(name: &str, category: Category, description: &str) -> Self {
        Self {
            name: name.to_string(),
            category,
            description: description.to_string(),
            track: Vec::new(),
        }
    }

    pub fn with_track(mut self, track: &[&str]) -> Self {
        self.track = track.iter().map(|s| s.to_string()).collect();
        self
    }
}

// ============================================================
// CAREER
// ============================================================

/// One weighted competency requirement of a career
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerRequirement {
    pub competency: String,
    pub weight: f64,
}

/// A named occupation defined by weighted competency requirements
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Career {
    pub name: String,
    /// Requirements in definition order
    pub requirements: Vec<CareerRequirement>,
    /// Learning track for people aiming at this career
    pub track: Vec<String>,
}

impl Career {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            requirements: Vec::new(),
            track: Vec::new(),
        }
    }

    pub fn requires(mut self, competency: &str, weight: f64) -> Self {
        self.requirements.push(CareerRequirement {
            competency: competency.to_string(),
            weight,
        });
        self
    }

    pub fn with_track(mut self, track: &[&str]) -> Self {
        self.track = track.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn total_weight(&self) -> f64 {
        self.requirements.iter().map(|r| r.weight).sum()
    }
}

// ============================================================
// PROFILE
// ============================================================

/// A user's self-assessed ratings across competencies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    /// Competency name -> rating (1 to 5 once stored)
    pub ratings: BTreeMap<String, u8>,
    pub registered_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ratings: BTreeMap::new(),
            registered_at: Utc::now(),
        }
    }

    pub fn with_rating(mut self, competency: &str, level: u8) -> Self {
        self.rate(competency, level);
        self
    }

    /// Insert or overwrite the rating for a competency
    pub fn rate(&mut self, competency: &str, level: u8) {
        self.ratings.insert(competency.to_string(), level);
    }

    pub fn rating(&self, competency: &str) -> Option<u8> {
        self.ratings.get(competency).copied()
    }
}
