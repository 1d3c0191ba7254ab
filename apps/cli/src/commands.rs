//! CLI command definitions, routing, and tracing setup.

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use agriguide_catalog::SectionCatalog;
use agriguide_core::pipeline::{self, FetchOptions, ProgressReporter};
use agriguide_gemini::GeminiClient;
use agriguide_shared::{AppConfig, GuideRecord, Subject, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// AgriGuide — structured husbandry guides for crops and farm animals.
#[derive(Parser)]
#[command(
    name = "agriguide",
    version,
    about = "Fetch structured planting and husbandry guides from a generative text endpoint.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Response language (overrides the config default).
    #[arg(long, global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Fetch the cultivation guide for a crop.
    Crop {
        /// Crop name (free-form, passed to the generator as given).
        name: String,

        /// Fetch only the five essential sections.
        #[arg(long)]
        brief: bool,

        /// Print the record as JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },

    /// Fetch the husbandry guide for a farm animal.
    Animal {
        /// Animal name (free-form, passed to the generator as given).
        name: String,

        /// Print the record as JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "agriguide=info",
        1 => "agriguide=debug",
        _ => "agriguide=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Crop { name, brief, json } => {
            let catalog = if brief {
                agriguide_catalog::crop_essentials()
            } else {
                agriguide_catalog::crop_full()
            };
            cmd_fetch(Subject::crop(name), catalog, cli.lang.as_deref(), json).await
        }
        Command::Animal { name, json } => {
            cmd_fetch(
                Subject::animal(name),
                agriguide_catalog::animal(),
                cli.lang.as_deref(),
                json,
            )
            .await
        }
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show().await,
        },
    }
}

// ---------------------------------------------------------------------------
// Guide fetching
// ---------------------------------------------------------------------------

async fn cmd_fetch(
    subject: Subject,
    catalog: &SectionCatalog,
    lang: Option<&str>,
    json: bool,
) -> Result<()> {
    let config = load_config()?;

    // Validates the API key env var before any network call.
    let client = GeminiClient::from_config(&config)?;

    let opts = FetchOptions {
        language: lang
            .map(String::from)
            .unwrap_or_else(|| config.defaults.language.clone()),
    };

    info!(
        subject = %subject.name,
        catalog = catalog.name(),
        language = %opts.language,
        "fetching guide"
    );

    let reporter = CliProgress::new();
    let record = pipeline::fetch_guide(&client, &subject, catalog, &opts, &reporter).await;
    reporter.finish();
    let record = record?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }

    Ok(())
}

/// Render a guide record as labeled sections.
fn print_record(record: &GuideRecord) {
    println!();
    println!("  {}", record.subject);
    println!("  {}", "=".repeat(record.subject.chars().count().max(4)));

    for section in &record.sections {
        println!();
        println!("  ## {}", section.label);
        for line in section.content.lines() {
            println!("  {line}");
        }
    }

    let fallbacks = record.sections.len() - record.extracted_count();
    if fallbacks > 0 {
        println!();
        println!(
            "  ({fallbacks} of {} sections had no information)",
            record.sections.len()
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }
}

// ---------------------------------------------------------------------------
// Config commands
// ---------------------------------------------------------------------------

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
