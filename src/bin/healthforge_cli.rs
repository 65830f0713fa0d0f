// ABOUTME: HealthForge CLI - assembles a wellness kit from a profile given on the command line
// ABOUTME: Supports JSON-file catalogs and the configured HTTP catalog, with text or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthForge

//!
//! Usage:
//! ```bash
//! # Assemble a kit from a local JSON catalog
//! healthforge-cli assemble --catalog items.json --goal "weight loss" --goal endurance
//!
//! # Constrain the kit
//! healthforge-cli assemble --catalog items.json --goal "muscle building" \
//!     --difficulty intermediate --allergy nuts --budget moderate \
//!     --weather cold --indoor-only --diet vegan
//!
//! # Query the catalog service configured via HEALTHFORGE_CATALOG_* and
//! # print the kit as JSON
//! healthforge-cli assemble --goal "stress relief" --json
//! ```

use chrono::Utc;
use clap::{Parser, Subcommand};
use healthforge::catalog::{CatalogProvider, HttpCatalog, StaticCatalog};
use healthforge::config::CatalogConfig;
use healthforge::engine::KitAssembler;
use healthforge::logging::{init_logging, LoggingConfig};
use healthforge::models::{
    BudgetTier, DietPreference, DifficultyPreference, UserProfile, WeatherPreference, WellnessKit,
};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "healthforge-cli",
    about = "HealthForge wellness kit builder",
    long_about = "Assembles a personalized wellness kit of exercises, supplements, gear, and meal plans from a catalog, with allergy checks and compatibility alerts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Assemble a wellness kit for the given goals and constraints
    Assemble {
        /// Path to a JSON catalog file; when omitted, the catalog service
        /// configured via HEALTHFORGE_CATALOG_* is queried
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Goal tag (repeat for multiple goals)
        #[arg(long = "goal", required = true)]
        goals: Vec<String>,

        /// Difficulty preference: any, beginner, intermediate, advanced
        #[arg(long, default_value = "beginner")]
        difficulty: String,

        /// Allergy tag (repeat for multiple allergies)
        #[arg(long = "allergy")]
        allergies: Vec<String>,

        /// Budget tier: any, budget, moderate, premium
        #[arg(long, default_value = "any")]
        budget: String,

        /// Weather preference: any, or a condition such as cold, hot, rainy
        #[arg(long, default_value = "any")]
        weather: String,

        /// Restrict exercises to indoor content
        #[arg(long)]
        indoor_only: bool,

        /// Diet preference: any, or a diet such as vegan, keto
        #[arg(long, default_value = "any")]
        diet: String,

        /// Print the kit as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::debug()
    } else {
        LoggingConfig::from_env()
    };
    init_logging(&logging)?;

    match cli.command {
        Command::Assemble {
            catalog,
            goals,
            difficulty,
            allergies,
            budget,
            weather,
            indoor_only,
            diet,
            json,
        } => {
            let profile = UserProfile {
                goals,
                difficulty: DifficultyPreference::from(difficulty),
                allergies,
                budget: BudgetTier::from_str_lossy(&budget),
                weather: WeatherPreference::from(weather),
                indoor_only,
                diet: DietPreference::from(diet),
            };

            let kit = assemble(catalog, &profile).await?;
            if json {
                print_json(&kit)?;
            } else {
                print_text(&profile, &kit);
            }
        }
    }

    Ok(())
}

async fn assemble(
    catalog_path: Option<PathBuf>,
    profile: &UserProfile,
) -> anyhow::Result<WellnessKit> {
    let kit = match catalog_path {
        Some(path) => {
            let catalog = StaticCatalog::from_json_file(&path)?;
            info!(
                catalog = catalog.name(),
                item_count = catalog.len(),
                path = %path.display(),
                "assembling kit from file catalog"
            );
            KitAssembler::new(&catalog).assemble(profile).await?
        }
        None => {
            let config = CatalogConfig::from_env()?;
            let catalog = HttpCatalog::new(&config)?;
            info!(catalog = catalog.name(), url = %config.base_url, "assembling kit from catalog service");
            KitAssembler::new(&catalog).assemble(profile).await?
        }
    };
    Ok(kit)
}

fn print_json(kit: &WellnessKit) -> anyhow::Result<()> {
    let payload = json!({
        "kit": kit.items,
        "alerts": kit.alerts,
        "summary": kit.summary(),
        "assembled_at": Utc::now().to_rfc3339(),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_text(profile: &UserProfile, kit: &WellnessKit) {
    println!("Your Wellness Kit");
    println!(
        "Personalized for: {} | {} level",
        profile.goals.join(", "),
        String::from(profile.difficulty)
    );
    println!();

    let summary = kit.summary();
    println!(
        "Summary: {} items | {} categories | {} cal burn/30min | ${:.0} est. cost",
        summary.item_count,
        summary.category_count,
        summary.total_calorie_burn,
        summary.total_cost_usd
    );

    if !kit.alerts.is_empty() {
        println!();
        println!("Compatibility Alerts:");
        for alert in &kit.alerts {
            println!("  ! {alert}");
        }
    }

    for (category, items) in kit.grouped() {
        println!();
        println!("{} ({})", category.label(), items.len());
        for item in items {
            let mut line = format!("  - {} [{}, {}]", item.name, item.subcategory, item.difficulty);
            if item.price_usd > 0.0 {
                line.push_str(&format!(" ~${:.0}", item.price_usd));
            }
            if item.rating > 0.0 {
                line.push_str(&format!(" ({:.1}/5)", item.rating));
            }
            println!("{line}");
        }
    }

    if kit.items.is_empty() {
        println!();
        println!("No items matched your criteria. Try adjusting your preferences.");
    }
}
