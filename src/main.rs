use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use memdash::app::App;
use memdash::config::{self, load_config, load_config_from_path};
use memdash::event::EventHandler;
use memdash::logging::init_file_logging;
use memdash::system::collector::Collector;
use memdash::ui;

#[derive(Parser)]
#[command(
    name = "memdash",
    about = "Live per-name process memory dashboard. Press 1-9 to terminate a row, 0 to quit."
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh rate in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Write logs to this file (the terminal is taken by the dashboard)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);
    init_file_logging(config.general.log_file.as_deref())?;

    tracing::info!(
        refresh_rate_ms = config.general.refresh_rate_ms,
        highlight_secs = config.general.highlight_secs,
        "starting dashboard"
    );

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, &config).await;

    ratatui::restore();

    result
}

/// One cycle per iteration: sample, draw, read at most one key, dispatch, sleep.
async fn run(terminal: &mut ratatui::DefaultTerminal, config: &config::Config) -> Result<()> {
    let mut app = App::new(Collector::new(), config);
    let mut events = EventHandler::new();

    while app.is_running() {
        app.refresh_data();
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        if let Some(key) = events.try_next_key() {
            let action = app.map_key(key);
            app.dispatch(action);
            if !app.is_running() {
                break;
            }
            if app.inline_message.is_some() {
                terminal.draw(|frame| ui::draw(frame, &mut app))?;
            }
        }

        tokio::time::sleep(app.refresh_interval()).await;
    }

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(ref path) = cli.log_file {
        config.general.log_file = Some(path.clone());
    }

    config
}
