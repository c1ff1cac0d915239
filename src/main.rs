use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use unisearch::app::App;
use unisearch::cli::{self, Cli, Command};
use unisearch::config::{self, Config};

/// How long the event loop waits for input before checking the blur timer
const TICK_RATE: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    init_logging();

    let args = Cli::parse();
    let config = config::load_config(args.config.as_deref())?;

    match args.command {
        Some(Command::Suggest { query, json }) => {
            let mut stdout = io::stdout().lock();
            cli::write_suggestions(&query, &config, json, &mut stdout)?;
            Ok(())
        }
        None => run_interactive(&config),
    }
}

fn run_interactive(config: &Config) -> Result<()> {
    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = match execute!(io::stdout(), EnableMouseCapture) {
        Ok(()) => run(terminal, App::new(config)),
        Err(e) => Err(e.into()),
    };

    // Restore terminal before reporting any error
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK_RATE)? {
            app.handle_event(event::read()?, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to `<temp dir>/unisearch.log`; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("unisearch.log");
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
fn init_logging() {}
