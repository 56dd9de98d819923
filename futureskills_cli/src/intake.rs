//! Builds profiles from command-line rating arguments (`"Criatividade=4"`).

use anyhow::{anyhow, Context, Result};
use futureskills_core::profiles::{parse_rating, validate_profile};
use futureskills_core::{CompetencyRegistry, Profile};

/// Splits `<competency>=<rating>` into its parts
pub fn parse_rating_arg(arg: &str) -> Result<(String, u8)> {
    let (name, value) = arg
        .rsplit_once('=')
        .ok_or_else(|| anyhow!("Expected <competency>=<1-5>, got '{}'", arg))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("Missing competency name in '{}'", arg));
    }
    let rating = parse_rating(value).with_context(|| format!("Invalid rating in '{}'", arg))?;
    Ok((name.to_string(), rating))
}

/// Turns rating arguments into a validated profile
pub fn profile_from_args(
    name: &str,
    ratings: &[String],
    registry: &CompetencyRegistry,
) -> Result<Profile> {
    let mut profile = Profile::new(name.trim());
    for arg in ratings {
        let (competency, rating) = parse_rating_arg(arg)?;
        registry.find(&competency)?;
        profile.rate(&competency, rating);
    }
    validate_profile(&profile, registry)?;
    Ok(profile)
}
