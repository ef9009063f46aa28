//! siteintel - terminal client for website company-intelligence analysis
//!
//! This is the binary entry point: it parses flags, resolves settings and the
//! backend, then hands over to the TUI or the headless runner.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use siteintel_app::config::{self, Settings};
use siteintel_app::{ApiBackend, ApiMode};
use siteintel_core::prelude::*;

use headless::HeadlessScript;

/// siteintel - analyze a company website and ask follow-up questions
#[derive(Parser, Debug)]
#[command(name = "siteintel")]
#[command(about = "A terminal client for website company-intelligence analysis", long_about = None)]
struct Args {
    /// Path to the config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use locally fabricated responses instead of the analysis service
    #[arg(long)]
    demo: bool,

    /// Base URL of the analysis service
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Run without the TUI, printing NDJSON events to stdout
    #[arg(long, requires = "url")]
    headless: bool,

    /// Website to analyze (headless mode)
    #[arg(long)]
    url: Option<String>,

    /// Custom question to extract during analysis (repeatable)
    #[arg(short = 'q', long = "question", value_name = "TEXT")]
    questions: Vec<String>,

    /// Follow-up conversation query after the analysis (repeatable)
    #[arg(long = "ask", value_name = "TEXT")]
    asks: Vec<String>,
}

impl Args {
    /// Layer CLI flags over file and environment settings
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(url) = &self.api_url {
            settings.api.base_url = url.clone();
        }
        if self.demo {
            settings.api.mode = ApiMode::Demo;
        }
    }

    /// Resolve settings (file, then environment, then flags) and the backend
    fn resolve(&self) -> Result<(Settings, ApiBackend)> {
        let config_path = self.config.clone().or_else(config::default_config_path);
        let mut settings = config::load_settings(config_path.as_deref())?;
        config::apply_env_overrides(&mut settings)?;
        self.apply_to(&mut settings);

        let backend = config::build_backend(&settings)?;
        Ok((settings, backend))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    siteintel_core::logging::init()?;

    let (settings, backend) = match args.resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    if args.headless {
        let script = HeadlessScript {
            url: args.url.unwrap_or_default(),
            questions: args.questions,
            asks: args.asks,
        };
        let outcome = headless::run_headless(settings, backend, script).await?;
        if outcome.exit_code() != 0 {
            std::process::exit(outcome.exit_code());
        }
        return Ok(());
    }

    let result = siteintel_tui::run(settings, backend).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("siteintel exiting");
    result
}
