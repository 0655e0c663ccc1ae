use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use jobhub_client::{ProviderConfig, build_providers};
use jobhub_core::demand::SkillSuggestions;
use jobhub_core::relevance::Recommendations;
use jobhub_core::source::source_catalogue;
use jobhub_core::{Aggregator, SearchQuery, SearchResult, SkillAdvisor, SourceFilter};
use jobhub_db::{Database, DatabaseConfig};

#[derive(Parser)]
#[command(name = "jobhub", version, about = "Job search aggregation and skill advice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search every external provider at once
    Search {
        /// Free-text keyword (e.g., "rust")
        #[arg(short, long)]
        keyword: Option<String>,

        /// Location hint (e.g., "Berlin")
        #[arg(short, long)]
        location: Option<String>,

        /// Comma-separated provider names, or "all"
        #[arg(short, long, default_value = "all")]
        source: String,

        /// Print the raw JSON result instead of a summary
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List the selectable providers
    Sources,

    /// Rank local postings against a user's skills (requires DATABASE_URL)
    Recommend {
        /// User id whose skill profile is used
        #[arg(short, long, env = "JOBHUB_USER_ID")]
        user: Uuid,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Suggest in-demand skills a user does not list yet (requires DATABASE_URL)
    Suggest {
        #[arg(short, long, env = "JOBHUB_USER_ID")]
        user: Uuid,

        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("jobhub=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            keyword,
            location,
            source,
            json,
        } => {
            let query = SearchQuery::new(keyword.as_deref(), location.as_deref());
            let filter = SourceFilter::parse(Some(&source));
            cmd_search(&query, &filter, json).await?;
        }
        Commands::Sources => cmd_sources(),
        Commands::Recommend { user, json } => {
            let advisor = connect_advisor().await?;
            let result = advisor
                .recommendations(user)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_recommendations(&result);
            }
        }
        Commands::Suggest { user, json } => {
            let advisor = connect_advisor().await?;
            let result = advisor
                .skill_suggestions(user)
                .await
                .map_err(|e| anyhow::anyhow!(e))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_suggestions(&result);
            }
        }
    }

    Ok(())
}

/// Connect to PostgreSQL using DATABASE_URL and wire the skill advisor.
async fn connect_advisor() -> Result<SkillAdvisor> {
    let config = DatabaseConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let db = Database::connect(&config)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await.map_err(|e| anyhow::anyhow!(e))?;

    Ok(SkillAdvisor::new(
        Arc::new(db.posting_repo()),
        Arc::new(db.profile_repo()),
    ))
}

async fn cmd_search(query: &SearchQuery, filter: &SourceFilter, json: bool) -> Result<()> {
    let config = ProviderConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let providers = build_providers(&config).context("Failed to build provider clients")?;
    let aggregator = Aggregator::new(providers).with_timeout(config.request_timeout);

    let result = aggregator.search(query, filter).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_search(&result);
    }
    Ok(())
}

fn cmd_sources() {
    for source in source_catalogue() {
        let marker = if source.is_default { " (default)" } else { "" };
        println!("  {:<10} {}{}", source.name, source.description, marker);
    }
}

fn print_search(result: &SearchResult) {
    if result.jobs.is_empty() {
        println!("No jobs found.");
        return;
    }

    for job in &result.jobs {
        let posted = job
            .posted_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        println!(
            "  {} [{}] {} at {} ({})",
            posted,
            job.source,
            job.title.as_deref().unwrap_or("Untitled"),
            job.company.as_deref().unwrap_or("unknown company"),
            job.location,
        );
        if let Some(url) = &job.apply_url {
            println!("      {url}");
        }
    }

    println!(
        "\nTotal: {} jobs from {}",
        result.total_count,
        result.sources.join(", ")
    );
}

fn print_recommendations(result: &Recommendations) {
    println!("{}\n", result.message);
    for rec in &result.recommendations {
        let posting = &rec.posting;
        if rec.match_score > 0 {
            println!(
                "  [{}] {} ({}) matches: {}",
                rec.match_score,
                posting.title,
                posting.work_location,
                rec.matched_skills.join(", ")
            );
        } else {
            println!(
                "  {} ({}) posted {}",
                posting.title,
                posting.work_location,
                posting.posted_at.format("%Y-%m-%d")
            );
        }
    }
}

fn print_suggestions(result: &SkillSuggestions) {
    if result.suggestions.is_empty() {
        println!("No new skills to suggest.");
        return;
    }
    for s in &result.suggestions {
        println!("  {:<30} {:>4}  {}", s.skill, s.demand, s.demand_level);
    }
}
