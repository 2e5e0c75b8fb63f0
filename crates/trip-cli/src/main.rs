use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use trip_core::{BudgetAllocation, Settings, ToolCall, ToolExecutor, TripTier};
use trip_tools::TravelToolExecutor;

mod logging;

use logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "trip-cli")]
#[command(about = "Trip planning tools from the command line")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, env = "DEBUG", default_value = "false")]
    debug: bool,

    /// Config file (JSON, or TOML with a .toml extension)
    #[arg(long, env = "TRIP_PLANNER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a budget across spend categories
    Allocate {
        /// Total budget
        #[arg(long, allow_negative_numbers = true)]
        budget: f64,

        /// Trip tier: Low, Medium or High
        #[arg(long, default_value = "Medium")]
        tier: String,

        /// Trip length in days
        #[arg(long, default_value = "1")]
        days: i64,

        /// Also show the amount per day
        #[arg(long)]
        per_day: bool,

        /// Print the allocation as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the available tools as JSON schemas
    Tools,
    /// Show the effective settings after config file and environment overrides
    Settings,
    /// Call a single tool
    Call {
        /// Tool name, e.g. travel_budget_allocator
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let settings = load_settings(cli.config.as_deref())?;
    log::debug!("Settings: {:?}", settings);

    match cli.command {
        Commands::Allocate {
            budget,
            tier,
            days,
            per_day,
            json,
        } => run_allocate(&settings, budget, &tier, days, per_day, json),
        Commands::Tools => list_tools(),
        Commands::Settings => {
            println!("{}", serde_json::to_string_pretty(&settings_report(&settings))?);
            Ok(())
        }
        Commands::Call { tool, args } => call_tool(&tool, &args).await,
    }
}

fn load_settings(path: Option<&std::path::Path>) -> anyhow::Result<Settings> {
    match path {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Settings::load()),
    }
}

fn run_allocate(
    settings: &Settings,
    budget: f64,
    tier: &str,
    days: i64,
    per_day: bool,
    json: bool,
) -> anyhow::Result<()> {
    let trip_tier = TripTier::from_label(tier);
    let allocation = BudgetAllocation::new(budget, trip_tier, days)?.allocate();

    if json {
        let mut output = serde_json::json!({
            "currency": settings.base_currency,
            "units": settings.units,
            "trip_tier": trip_tier.label(),
            "allocation": allocation.to_named(),
        });
        if per_day {
            output["per_day"] = serde_json::json!(allocation.per_day(days).map(|d| d.to_named()));
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "💰 {:.2} {} over {} day(s), {} tier",
            budget,
            settings.base_currency,
            days,
            trip_tier.label()
        )
        .cyan()
    );
    for (category, amount) in allocation.iter() {
        println!("  {:<16} {:>12.2}", category.as_str(), amount);
    }
    println!(
        "  {:<16} {:>12.2}",
        "total".bold(),
        allocation.total()
    );

    if per_day {
        match allocation.per_day(days) {
            Some(daily) => {
                println!("{}", "📅 Per day".cyan());
                for (category, amount) in daily.iter() {
                    println!("  {:<16} {:>12.2}", category.as_str(), amount);
                }
            }
            None => println!("{}", "⚠️  Per-day amounts need at least one day".yellow()),
        }
    }

    Ok(())
}

fn settings_report(settings: &Settings) -> serde_json::Value {
    serde_json::json!({
        "base_currency": settings.base_currency,
        "units": settings.units,
        "default_location": {
            "latitude": settings.default_lat,
            "longitude": settings.default_long,
        },
        "config_path": trip_core::config::default_config_path(),
    })
}

fn list_tools() -> anyhow::Result<()> {
    let schemas = TravelToolExecutor::tool_schemas();
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}

async fn call_tool(tool: &str, args: &str) -> anyhow::Result<()> {
    let executor = TravelToolExecutor::new();
    let call = ToolCall::function(uuid::Uuid::new_v4().to_string(), tool, args);

    log::debug!("Calling {} with {}", tool, args);
    let result = executor.execute(&call).await?;

    if result.success {
        println!("{}", "✅ Success".green());
        println!("{}", result.result);
        Ok(())
    } else {
        anyhow::bail!("{} failed: {}", tool, result.result)
    }
}
