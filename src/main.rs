//! LexGuard - terminal client for legal document risk analysis
//!
//! This is the binary entry point: CLI parsing, settings, credentials and
//! the choice between the TUI and headless mode.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, warn};

use lexguard::{run_headless, HeadlessRequest, Source};
use lexguard_app::config::{self, Settings};
use lexguard_app::message::Message;
use lexguard_app::Engine;
use lexguard_client::{resolve_token, HttpAnalysisClient};
use lexguard_core::{logging, DocumentId};

/// LexGuard - flag risky clauses in contracts and leases
#[derive(Parser, Debug)]
#[command(name = "lexguard", version)]
#[command(about = "Analyze legal documents for risky clauses", long_about = None)]
struct Args {
    /// Open a stored document by id
    #[arg(long, value_name = "ID")]
    doc: Option<u64>,

    /// Settings file (default: <config_dir>/lexguard/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Analysis service base URL
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Bearer token (overrides the environment variable and token file)
    #[arg(long, value_name = "TOKEN")]
    token: Option<String>,

    /// Run without the TUI and print NDJSON events
    #[arg(long)]
    headless: bool,

    /// File to upload (headless)
    #[arg(long, value_name = "PATH", requires = "headless", conflicts_with_all = ["text", "doc"])]
    file: Option<PathBuf>,

    /// Text to analyze (headless)
    #[arg(long, value_name = "TEXT", requires = "headless", conflicts_with = "doc")]
    text: Option<String>,

    /// Write the edited text after a successful analysis (headless)
    #[arg(long, requires = "headless")]
    export: bool,
}

impl Args {
    fn headless_source(&self) -> Option<Source> {
        if let Some(path) = &self.file {
            return Some(Source::File(path.clone()));
        }
        if let Some(text) = &self.text {
            return Some(Source::Text(text.clone()));
        }
        self.doc.map(|id| Source::Document(DocumentId(id)))
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;
    info!("LexGuard starting");

    let settings = load_settings(&args);
    let credentials = resolve_token(
        args.token.as_deref(),
        &settings.auth.token_env,
        settings.auth.token_file().as_deref(),
    );
    if !credentials.is_authenticated() {
        warn!("No bearer token found; requests are sent without authorization");
    }

    let client = HttpAnalysisClient::new(
        &settings.server.base_url,
        credentials,
        settings.server.request_timeout(),
    )?;
    let engine = Engine::new(settings, client);

    if args.headless {
        let Some(source) = args.headless_source() else {
            eprintln!("--headless needs one of --file, --text or --doc");
            std::process::exit(2);
        };
        let outcome = run_headless(
            engine,
            HeadlessRequest {
                source,
                export: args.export,
            },
        )
        .await?;
        if !outcome.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let initial = args.doc.map(|id| Message::LoadDocument(DocumentId(id)));
    let result = lexguard_tui::run(engine, initial).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("LexGuard exiting");
    Ok(result?)
}

/// Settings from the config file (created on first run), then CLI overrides
fn load_settings(args: &Args) -> Settings {
    let path = args
        .config
        .clone()
        .unwrap_or_else(config::default_config_path);

    if let Err(e) = config::init_config_file(&path) {
        warn!("Could not create {}: {}", path.display(), e);
    }

    let mut settings = config::load_settings(&path);
    if let Some(server) = &args.server {
        settings.server.base_url = server.clone();
    }
    settings
}
