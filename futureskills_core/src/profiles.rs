//! Profile Store
//!
//! Session-scoped, append-only collection of user profiles. Profiles are
//! validated on the way in so the engine only ever sees well-formed ratings.

use crate::competencies::CompetencyRegistry;
use crate::error::{OrientationError, Result};
use crate::types::{Profile, MAX_RATING, MIN_RATING};

/// In-memory profile list, kept in insertion order
#[derive(Debug)]
pub struct ProfileStore<'a> {
    registry: &'a CompetencyRegistry,
    profiles: Vec<Profile>,
}

impl<'a> ProfileStore<'a> {
    pub fn new(registry: &'a CompetencyRegistry) -> Self {
        Self {
            registry,
            profiles: Vec::new(),
        }
    }

    /// Validate and append a profile. Re-submitting a name creates a second entry.
    pub fn add(&mut self, profile: Profile) -> Result<&Profile> {
        validate_profile(&profile, self.registry)?;
        log::info!(
            "[PROFILES] Registered '{}' with {} ratings",
            profile.name,
            profile.ratings.len()
        );
        self.profiles.push(profile);
        let stored = self.profiles.len() - 1;
        Ok(&self.profiles[stored])
    }

    pub fn list(&self) -> &[Profile] {
        &self.profiles
    }

    /// 1-based lookup, matching the numbering shown to the user
    pub fn get(&self, position: usize) -> Result<&Profile> {
        position
            .checked_sub(1)
            .and_then(|idx| self.profiles.get(idx))
            .ok_or_else(|| OrientationError::not_found("Profile", position.to_string()))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Rejects blank names, ratings outside 1-5 and competencies the registry does not know
pub fn validate_profile(profile: &Profile, registry: &CompetencyRegistry) -> Result<()> {
    if profile.name.trim().is_empty() {
        return Err(OrientationError::validation("profile name cannot be empty"));
    }

    for (competency, rating) in &profile.ratings {
        if !registry.contains(competency) {
            return Err(OrientationError::validation(format!(
                "unknown competency '{}'",
                competency
            )));
        }
        if !(MIN_RATING..=MAX_RATING).contains(rating) {
            return Err(OrientationError::validation(format!(
                "rating {} for '{}' is outside {}-{}",
                rating, competency, MIN_RATING, MAX_RATING
            )));
        }
    }

    Ok(())
}

/// Parses one rating typed by a user ("4", " 5 ")
pub fn parse_rating(input: &str) -> Result<u8> {
    let trimmed = input.trim();
    let value: u8 = trimmed
        .parse()
        .map_err(|_| OrientationError::validation(format!("'{}' is not a number", trimmed)))?;
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(OrientationError::validation(format!(
            "rating {} is outside {}-{}",
            value, MIN_RATING, MAX_RATING
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static CompetencyRegistry {
        CompetencyRegistry::builtin()
    }

    #[test]
    fn test_add_and_list_in_insertion_order() {
        let mut store = ProfileStore::new(registry());
        store.add(Profile::new("Ana").with_rating("Criatividade", 4)).unwrap();
        store.add(Profile::new("Bruno")).unwrap();
        store.add(Profile::new("Ana")).unwrap();

        let names: Vec<_> = store.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bruno", "Ana"]);
    }

    #[test]
    fn test_add_rejects_rating_six() {
        let mut store = ProfileStore::new(registry());
        let err = store
            .add(Profile::new("Ana").with_rating("Criatividade", 6))
            .unwrap_err();
        assert!(matches!(err, OrientationError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_rejects_rating_zero() {
        let mut store = ProfileStore::new(registry());
        let result = store.add(Profile::new("Ana").with_rating("Criatividade", 0));
        assert!(matches!(result, Err(OrientationError::Validation(_))));
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut store = ProfileStore::new(registry());
        for name in ["", "   "] {
            let err = store.add(Profile::new(name)).unwrap_err();
            assert!(matches!(err, OrientationError::Validation(_)), "{:?}", name);
        }
    }

    #[test]
    fn test_add_rejects_unknown_competency() {
        let mut store = ProfileStore::new(registry());
        let err = store
            .add(Profile::new("Ana").with_rating("Telepatia", 3))
            .unwrap_err();
        assert_eq!(
            err,
            OrientationError::Validation("unknown competency 'Telepatia'".to_string())
        );
    }

    #[test]
    fn test_get_is_one_based() {
        let mut store = ProfileStore::new(registry());
        store.add(Profile::new("Ana")).unwrap();
        store.add(Profile::new("Bruno")).unwrap();

        assert_eq!(store.get(2).unwrap().name, "Bruno");
        assert!(matches!(store.get(0), Err(OrientationError::NotFound { .. })));
        assert!(matches!(store.get(3), Err(OrientationError::NotFound { .. })));
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(" 5 ").unwrap(), 5);
        assert!(parse_rating("6").is_err());
        assert!(parse_rating("0").is_err());
        assert!(parse_rating("abc").is_err());
        assert!(parse_rating("").is_err());
    }
}
