//! tel-handler: click-to-dial handler for `tel:` URIs, entry point.
//!
//! The operating system starts this binary with the clicked URI as its only
//! argument (e.g. `tel-handler tel:+31201234567`).  The handler dials the
//! number on the telephony line stored in the user's configuration and exits.
//! Started without arguments it runs the installer and lets the user choose
//! the line.
//!
//! # Usage
//!
//! ```text
//! tel-handler [OPTIONS] [TEL_URI] [IGNORED...]
//!
//! Options:
//!   --config   <PATH>   Configuration file [default: <local data dir>/TelProtocolHandler/config.xml]
//!   --log-file <PATH>   Append log output to this file instead of stderr
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                 | Description                      |
//! |--------------------------|----------------------------------|
//! | `TEL_HANDLER_CONFIG`     | Same as `--config`               |
//! | `TEL_HANDLER_LOG_FILE`   | Same as `--log-file`             |
//! | `RUST_LOG`               | Log filter [default: `info`]     |
//!
//! # Exit status
//!
//! `0` whenever the flow ran, including after errors that were shown to the
//! user.  `1` when no configuration path can be determined.  `2` for
//! malformed options.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tel_handler::application::click_to_dial::{ClickToDial, RunOutcome};
use tel_handler::application::place_call::CallOutcome;
use tel_handler::application::Services;
use tel_handler::infrastructure::line_picker::NativeLinePicker;
use tel_handler::infrastructure::notifier::NativeNotifier;
use tel_handler::infrastructure::setup::NativeSetupLauncher;
use tel_handler::infrastructure::storage::config::{default_config_path, XmlSettingsStore};
use tel_handler::infrastructure::telephony::NativeTelephony;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Click-to-dial handler for `tel:` URIs.
#[derive(Debug, Parser)]
#[command(
    name = "tel-handler",
    about = "Dials tel: URIs on the configured telephony line",
    version
)]
struct Cli {
    /// Configuration file to read and write.
    #[arg(long, env = "TEL_HANDLER_CONFIG")]
    config: Option<PathBuf>,

    /// Append log output to this file instead of writing it to stderr.
    ///
    /// The handler is normally started by the shell without a visible
    /// console, so this is the only way to see its log.
    #[arg(long, env = "TEL_HANDLER_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// The `tel:` URI to dial.  Anything after it is ignored; no value at
    /// all runs setup.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TEL_URI")]
    args: Vec<String>,
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Initialises `tracing` on stderr, or on `log_file` when given.
///
/// A log file that cannot be opened is reported on stderr; logging then
/// stays on stderr rather than aborting the call.
fn init_logging(log_file: Option<&Path>) {
    // `RUST_LOG` if present and valid, otherwise `info`.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let opened = log_file.map(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {}", path.display()))
    });

    match opened {
        Some(Ok(file)) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Some(Err(e)) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            warn!("{e:#}; logging to stderr");
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Program entry point.
///
/// # What happens at startup
///
/// 1. CLI arguments are parsed with `clap` into a [`Cli`] struct.
/// 2. `tracing_subscriber` is initialised (stderr or `--log-file`).
/// 3. The configuration path is resolved.
/// 4. The platform adapters are wired into [`ClickToDial`], which runs setup
///    or dials the URI.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref());

    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()
            .context("could not determine the local data directory for config.xml")?,
    };
    debug!("using configuration file {}", config_path.display());

    let settings = XmlSettingsStore::new(config_path);
    let notifier = NativeNotifier::new();
    let picker = NativeLinePicker::new();
    let setup = NativeSetupLauncher::new();
    let services = Services {
        settings: &settings,
        notifier: &notifier,
        picker: &picker,
    };

    let mut app = ClickToDial::new(NativeTelephony::new(), services, &setup);
    match app.run(cli.args.as_slice()) {
        RunOutcome::Dialed(CallOutcome::Connected { dial_string }) => {
            info!("call to {dial_string} requested")
        }
        RunOutcome::Dialed(CallOutcome::Failed(e)) => warn!("call failed: {e}"),
        outcome => info!("finished: {outcome:?}"),
    }
    Ok(())
}
