//! keycalc - keystroke-driven calculator for the terminal
//!
//! Each key is applied the moment it is pressed; the screen shows the
//! operands, the tape of steps so far and a running result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use libkeycalc::{
    logging::{LogFormat, LoggingConfig},
    Calculator, Config,
};
use tracing::{error, info};

use keycalc_tui::{
    app::{event::EventHandler, reduce, Action, AppState, UiConfig},
    replay::replay,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(version, about = "Keystroke-driven decimal calculator")]
#[command(long_about = r#"Keystroke-driven decimal calculator.

Type digits, '.', '+', '-', '*', '/' and '=' directly; Backspace removes the
last digit. Ctrl+R resets, Ctrl+Q quits. Once '=' is pressed the result stays
on screen until you reset.

EXAMPLES:
    # Interactive calculator
    keycalc

    # Replay keys without a terminal (b = backspace, r = reset, q = quit)
    keycalc --replay "12.5*4-1="

    # Hide the running result while typing
    keycalc --no-preview

    # Trace every keystroke to stderr while replaying
    keycalc -v --replay "9/0=b3="

CONFIGURATION:
    $KEYCALC_CONFIG, or <config dir>/keycalc/config.toml. A missing file
    means defaults. Logs go to <data dir>/keycalc/keycalc.log unless
    [logging] file is set.
"#)]
struct Args {
    /// Configuration file (must exist)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Replay keys non-interactively and print the final display
    #[arg(long, value_name = "KEYS")]
    replay: Option<String>,

    /// Do not show the running result before '=' is pressed
    #[arg(long)]
    no_preview: bool,

    /// Minimum log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log format: text, json or pretty
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let replay_logging = args.verbose || args.log_level.is_some() || args.log_format.is_some();
    if args.no_preview {
        config.display.preview = false;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    if let Some(format) = args.log_format {
        config.logging.format = format;
    }

    let engine = Calculator::new();

    match args.replay {
        Some(keys) => run_replay(&keys, &config, &engine, replay_logging, args.verbose),
        None => run_interactive(&config, &engine, args.verbose),
    }
}

fn logging_config(config: &Config, verbose: bool) -> LoggingConfig {
    LoggingConfig::new(config.logging.format, config.logging.level.clone(), verbose)
}

/// Print the display after `keys`; failed keystrokes are reported on stderr
fn run_replay(
    keys: &str,
    config: &Config,
    engine: &Calculator,
    with_logging: bool,
    verbose: bool,
) -> Result<()> {
    if with_logging {
        let logging = match config.logging.file {
            Some(_) => logging_config(config, verbose).with_file(config.log_file()?),
            None => logging_config(config, verbose),
        };
        logging.init().context("Failed to initialize logging")?;
    }

    let outcome = replay(keys, UiConfig::from_config(config), engine);

    for message in &outcome.errors {
        eprintln!("{}", message);
    }
    println!("{}", outcome.state.readout(engine));

    match outcome.fault {
        Some(fault) => Err(fault).context("Replay stopped by a calculator fault"),
        None => Ok(()),
    }
}

fn run_interactive(config: &Config, engine: &Calculator, verbose: bool) -> Result<()> {
    match config.log_file() {
        Ok(path) => {
            if let Err(e) = logging_config(config, verbose).with_file(path).init() {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    info!(preview = config.display.preview, "keycalc starting");

    // Restore the terminal even if the loop panics
    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, config, engine);

    // A failure to give the terminal back ends the process
    restore_terminal(terminal).context("Failed to restore terminal")?;

    if let Err(ref e) = result {
        error!(error = %e, "event loop aborted");
    } else {
        info!("keycalc exiting");
    }

    result.map_err(Into::into)
}

fn run_app(terminal: &mut Tui, config: &Config, engine: &Calculator) -> keycalc_tui::Result<()> {
    let mut state = AppState::with_config(UiConfig::from_config(config));
    let events = EventHandler::new();

    loop {
        let readout = state.readout(engine);
        terminal.draw(|frame| ui::render(frame, &state, &readout))?;

        let action: Action = events.next()?.into();
        state = reduce(state, action, engine);

        if let Some(fault) = state.fault.take() {
            return Err(fault.into());
        }
        if state.should_quit() {
            break;
        }
    }

    Ok(())
}
