//! flip_watch - Prints expected values for item stats copied from the trade site

mod clipboard;

use clipboard::SystemClipboard;
use flip_core::{default_constants, run, Watcher};
use std::io;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const DISCLAIMER: [&str; 3] = [
    "Please be advised that this tool continuously reads the content of your clipboard.",
    "After reading the content, your clipboard is immediately purged, so copy and paste will not work as usual while it runs.",
    "To start, copy (CTRL + C) some item stats from the PoE2 trade site.",
];

fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_target(false)
        .with_level(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,flip_core=debug,flip_watch=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .init();
}

fn main() -> ExitCode {
    setup_logging();

    for line in DISCLAIMER {
        println!("{}", line);
    }

    // Ctrl-C only raises the flag; the watcher notices it on its next poll
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        tracing::error!("failed to install interrupt handler: {e}");
        return ExitCode::FAILURE;
    }

    let clipboard = match SystemClipboard::new() {
        Ok(clipboard) => clipboard,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let constants = default_constants();
    tracing::debug!(?constants, "formula constants");

    let mut watcher = Watcher::new(clipboard, interrupted);
    match run(&mut watcher, &constants, &mut io::stdout()) {
        Ok(()) => {
            println!("Program exited by user.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
