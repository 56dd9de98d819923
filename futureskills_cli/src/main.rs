use anyhow::Result;
/// Future Skills Lab CLI - career orientation from self-rated competencies
///
/// Provides the interactive menu plus one-shot recommend, improve and catalog commands.
use clap::{Parser, Subcommand};
use futureskills_cli::{intake, menu::MenuSession, render};
use futureskills_core::{
    CareerCatalog, CompetencyRegistry, OrientationConfig, OrientationEngine,
    DEFAULT_RECOMMENDATION_LIMIT, DEFAULT_WEAK_THRESHOLD,
};
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "futureskills-cli")]
#[command(about = "Future Skills Lab - career orientation from self-rated competencies", long_about = None)]
struct Cli {
    /// How many careers to recommend
    #[arg(short, long, global = true, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
    limit: usize,
    /// Ratings at or below this value are treated as weak (1-5)
    #[arg(short, long, global = true, default_value_t = DEFAULT_WEAK_THRESHOLD,
          value_parser = clap::value_parser!(u8).range(1..=5))]
    threshold: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,
    /// Rank careers for a profile given on the command line
    Recommend {
        /// Profile name
        #[arg(short, long)]
        name: String,
        /// Competency rating as "<competency>=<1-5>", repeatable
        #[arg(short, long = "rating")]
        ratings: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List weak competencies with improvement activities
    Improve {
        /// Profile name
        #[arg(short, long)]
        name: String,
        /// Competency rating as "<competency>=<1-5>", repeatable
        #[arg(short, long = "rating")]
        ratings: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the built-in competencies and careers
    Catalog {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    let config = OrientationConfig {
        recommendation_limit: cli.limit,
        weak_threshold: cli.threshold,
    };
    let engine = OrientationEngine::builtin(config);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(engine)?,
        Commands::Recommend {
            name,
            ratings,
            json,
        } => run_recommend_cli(&engine, &name, &ratings, json)?,
        Commands::Improve {
            name,
            ratings,
            json,
        } => run_improve_cli(&engine, &name, &ratings, json)?,
        Commands::Catalog { json } => run_catalog_cli(json)?,
    }

    Ok(())
}

fn run_menu(engine: OrientationEngine<'static>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = MenuSession::new(engine, stdin.lock(), stdout.lock());
    session.run()
}

fn run_recommend_cli(
    engine: &OrientationEngine<'static>,
    name: &str,
    ratings: &[String],
    json: bool,
) -> Result<()> {
    let profile = intake::profile_from_args(name, ratings, engine.registry())?;
    let recommendations =
        engine.top_recommendations(&profile, engine.config().recommendation_limit);

    let mut out = io::stdout().lock();
    if json {
        render::write_recommendations_json(&mut out, &profile, &recommendations)?;
    } else {
        render::write_recommendations(&mut out, &profile, &recommendations)?;
    }
    out.flush()?;
    Ok(())
}

fn run_improve_cli(
    engine: &OrientationEngine<'static>,
    name: &str,
    ratings: &[String],
    json: bool,
) -> Result<()> {
    let profile = intake::profile_from_args(name, ratings, engine.registry())?;
    let threshold = engine.config().weak_threshold;
    let suggestions = engine.suggest_improvements(&profile, threshold);

    let mut out = io::stdout().lock();
    if json {
        render::write_suggestions_json(&mut out, &profile, threshold, &suggestions)?;
    } else {
        render::write_suggestions(&mut out, &profile, threshold, &suggestions)?;
    }
    out.flush()?;
    Ok(())
}

fn run_catalog_cli(json: bool) -> Result<()> {
    let registry = CompetencyRegistry::builtin();
    let catalog = CareerCatalog::builtin();

    let mut out = io::stdout().lock();
    if json {
        render::write_catalog_json(&mut out, registry, catalog)?;
    } else {
        render::write_catalog(&mut out, registry, catalog)?;
    }
    out.flush()?;
    Ok(())
}
