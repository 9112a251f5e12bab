//! speakit main entry point
//!
//! The main loop receives events from three sources:
//! 1. stdin (one line per user action) - read on a helper thread
//! 2. speech engine callbacks (utterance start/end/stop)
//! 3. the voices-ready notification sent once at startup
//!
//! Events are handled one at a time on the main thread.

use log::{debug, error, info};
use speakit::speech::{create_engine, LifecycleNotifier};
use speakit::state::config::Config;
use speakit::state::{AppEvent, Flow, State};
use speakit::Result;
use std::io::{self, BufRead, Write};
use std::process;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

/// Command line options
#[derive(Debug, PartialEq, Eq)]
struct Options {
    debug: bool,
    dry_run: bool,
    language: Option<String>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Options {
    let mut options = Options {
        debug: false,
        dry_run: false,
        language: None,
    };

    let mut args = args.into_iter().peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--debug" | "-d" => options.debug = true,
            "--dry-run" => options.dry_run = true,
            "--lang" => match args.next_if(|value| !value.starts_with('-')) {
                Some(code) => options.language = Some(code),
                None => eprintln!("Warning: --lang needs a language code, keeping configured one"),
            },
            other => eprintln!("Warning: ignoring unknown argument '{}'", other),
        }
    }

    options
}

fn main() {
    let options = parse_args(std::env::args().skip(1));

    // Initialize logger
    if options.debug {
        // Debug mode: write to speakit.log file
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("speakit.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open speakit.log for debug logging: {}", e);
                env_logger::Builder::from_default_env()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "speakit version {} starting (debug mode, logging to speakit.log)",
            speakit::VERSION
        );
    } else {
        // Normal mode: minimal logging to stderr, only errors
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }

    if let Err(e) = run(options) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(options: Options) -> Result<()> {
    debug!("Initializing speakit");

    let config = Config::load()?;
    info!("Configuration loaded from {:?}", config.path());

    let (tx, rx) = mpsc::channel::<AppEvent>();

    // Engine callbacks may fire on a platform thread; they only post events
    let lifecycle_tx = tx.clone();
    let notify: LifecycleNotifier = Arc::new(move |event| {
        let _ = lifecycle_tx.send(AppEvent::Lifecycle(event));
    });
    let engine = create_engine(notify, options.dry_run)?;

    let mut state = State::new(&config, engine);
    if let Some(code) = &options.language {
        state.change_language(code);
    }

    // stdin reader
    let input_tx = tx.clone();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if input_tx.send(AppEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
        let _ = input_tx.send(AppEvent::InputClosed);
    });

    // Voices are ready as soon as the engine is up
    tx.send(AppEvent::VoicesChanged)
        .map_err(|e| speakit::SpeakitError::Other(format!("Event channel closed: {}", e)))?;
    drop(tx);

    let mut stdout = io::stdout();
    writeln!(stdout, "{} {} - type :help for commands", speakit::APP_NAME, speakit::VERSION)?;
    writeln!(stdout, "Configuration: {}", config.path().display())?;

    info!("Entering event loop");
    for event in rx {
        if state.handle(event, &mut stdout)? == Flow::Quit {
            break;
        }
    }

    info!("Exiting");
    Ok(())
}
