//! Text and JSON rendering of engine results.

use anyhow::Result;
use futureskills_core::{
    Career, CareerCatalog, Competency, CompetencyRegistry, ImprovementSuggestion, Profile,
    Recommendation,
};
use serde::Serialize;
use std::io::Write;

/// JSON payload for `recommend --json`
#[derive(Serialize)]
struct RecommendationReport<'a> {
    profile: &'a str,
    recommendations: &'a [Recommendation<'a>],
}

/// JSON payload for `improve --json`
#[derive(Serialize)]
struct ImprovementReport<'a> {
    profile: &'a str,
    threshold: u8,
    suggestions: &'a [ImprovementSuggestion<'a>],
}

#[derive(Serialize)]
struct CatalogReport<'a> {
    competencies: &'a [Competency],
    careers: &'a [Career],
}

pub fn write_profile_list<W: Write>(out: &mut W, profiles: &[Profile]) -> Result<()> {
    if profiles.is_empty() {
        writeln!(out, "No profiles registered yet.")?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "Registered profiles:")?;
    for (idx, profile) in profiles.iter().enumerate() {
        writeln!(
            out,
            "{}. {} (registered {})",
            idx + 1,
            profile.name,
            profile.registered_at.format("%Y-%m-%d %H:%M")
        )?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_recommendations<W: Write>(
    out: &mut W,
    profile: &Profile,
    recommendations: &[Recommendation<'_>],
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Career recommendations for {}:", profile.name)?;
    for rec in recommendations {
        writeln!(
            out,
            "- {} - Compatibility: {:.1}%",
            rec.career.name, rec.score
        )?;
        for step in &rec.career.track {
            writeln!(out, "    * {}", step)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_suggestions<W: Write>(
    out: &mut W,
    profile: &Profile,
    threshold: u8,
    suggestions: &[ImprovementSuggestion<'_>],
) -> Result<()> {
    if suggestions.is_empty() {
        writeln!(
            out,
            "{} has no competencies rated {} or below. Congratulations!",
            profile.name, threshold
        )?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Improvement tracks for {}:", profile.name)?;
    for suggestion in suggestions {
        writeln!(
            out,
            "- {} ({}, rated {}): {}",
            suggestion.competency.name,
            suggestion.competency.category.label(),
            suggestion.rating,
            suggestion.activity
        )?;
        for step in &suggestion.competency.track {
            writeln!(out, "    * {}", step)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_catalog<W: Write>(
    out: &mut W,
    registry: &CompetencyRegistry,
    catalog: &CareerCatalog,
) -> Result<()> {
    writeln!(out, "Competencies:")?;
    for competency in registry.list() {
        writeln!(
            out,
            "- {} [{}]: {}",
            competency.name,
            competency.category.label(),
            competency.description
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Careers:")?;
    for career in catalog.list() {
        let weights: Vec<String> = career
            .requirements
            .iter()
            .map(|r| format!("{} {:.2}", r.competency, r.weight))
            .collect();
        writeln!(out, "- {}: {}", career.name, weights.join(", "))?;
    }
    Ok(())
}

pub fn write_recommendations_json<W: Write>(
    out: &mut W,
    profile: &Profile,
    recommendations: &[Recommendation<'_>],
) -> Result<()> {
    let report = RecommendationReport {
        profile: &profile.name,
        recommendations,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_suggestions_json<W: Write>(
    out: &mut W,
    profile: &Profile,
    threshold: u8,
    suggestions: &[ImprovementSuggestion<'_>],
) -> Result<()> {
    let report = ImprovementReport {
        profile: &profile.name,
        threshold,
        suggestions,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_catalog_json<W: Write>(
    out: &mut W,
    registry: &CompetencyRegistry,
    catalog: &CareerCatalog,
) -> Result<()> {
    let report = CatalogReport {
        competencies: registry.list(),
        careers: catalog.list(),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
