//! ClickToDial: the complete flow of one handler invocation.
//!
//! # Two modes
//!
//! - **Setup mode** (no arguments): the user started the program directly,
//!   usually right after installing it.  The installer is run so the program
//!   registers itself as the `tel:` handler, then the line picker is shown.
//! - **Dial mode** (one or more arguments): the OS passed a `tel:` URI.  The
//!   configured line is validated, the number normalized, and the call placed.
//!
//! Either way the process does its work once and exits.  All failures have
//! already been logged or shown to the user by the time [`ClickToDial::run`]
//! returns, so the caller only needs the [`RunOutcome`] for its own logging.

use tel_core::HandlerConfig;
use thiserror::Error;
use tracing::{error, info};

use super::dial_number::number_to_call;
use super::notify::{inform_user, Notice};
use super::place_call::{place_call, CallOutcome};
use super::select_line::{configure_line, ConfigureOutcome};
use super::settings::load_settings;
use super::telephony::TelephonyProvider;
use super::validate_line::{validate_line, LineValidation};
use super::Services;

/// Message shown when the telephony provider cannot be initialised.
pub const TELEPHONY_UNAVAILABLE_MESSAGE: &str = "Could not initialise the telephony subsystem.";

/// Error type for the installer launch.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The installer executable could not be located.
    #[error("setup executable not found at {0}")]
    NotFound(String),
    /// The installer could not be started (e.g. elevation was refused).
    #[error("failed to start setup: {0}")]
    Launch(String),
}

/// Runs the external installer that registers the handler.
#[cfg_attr(test, mockall::automock)]
pub trait SetupLauncher {
    /// Starts the installer and blocks until it has exited.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the installer could not be started.
    fn launch(&self) -> Result<(), SetupError>;
}

/// How an invocation ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// Setup mode finished (installer run, line selection offered).
    SetupCompleted,
    /// Dial mode reached the call step.
    Dialed(CallOutcome),
    /// Dial mode stopped because the configured line is missing and the user
    /// declined to choose another one.
    LineDeclined,
    /// No line is configured; the user has been told.
    NoLineConfigured,
    /// The telephony provider could not be initialised.
    TelephonyUnavailable,
}

/// One handler invocation.
pub struct ClickToDial<'a, P: TelephonyProvider> {
    provider: P,
    services: Services<'a>,
    setup: &'a dyn SetupLauncher,
    config: HandlerConfig,
}

impl<'a, P: TelephonyProvider> ClickToDial<'a, P> {
    /// Creates the flow with a default (empty) configuration.
    pub fn new(provider: P, services: Services<'a>, setup: &'a dyn SetupLauncher) -> Self {
        Self {
            provider,
            services,
            setup,
            config: HandlerConfig::default(),
        }
    }

    /// The configuration as it stands after the run.
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// The telephony provider, e.g. to inspect a test double after the run.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs setup mode (empty `args`) or dial mode.
    pub fn run<S: AsRef<str>>(&mut self, args: &[S]) -> RunOutcome {
        if let Err(e) = self.provider.initialize() {
            error!("{e}");
            inform_user(self.services.notifier, &Notice::error(TELEPHONY_UNAVAILABLE_MESSAGE));
            return RunOutcome::TelephonyUnavailable;
        }

        if args.is_empty() {
            return self.run_setup();
        }
        self.dial(args)
    }

    fn run_setup(&mut self) -> RunOutcome {
        info!("started without arguments; running setup");
        match self.setup.launch() {
            Ok(()) => info!("setup completed"),
            Err(e) => {
                error!("{e}");
                inform_user(self.services.notifier, &Notice::error(e.to_string()));
            }
        }

        self.config = load_settings(self.services.settings);
        if configure_line(&self.provider, &mut self.config, &self.services)
            == ConfigureOutcome::Confirmed
            && validate_line(&self.provider, &mut self.config, &self.services)
                == LineValidation::NoLineConfigured
        {
            return RunOutcome::NoLineConfigured;
        }
        RunOutcome::SetupCompleted
    }

    fn dial<S: AsRef<str>>(&mut self, args: &[S]) -> RunOutcome {
        self.config = load_settings(self.services.settings);

        match validate_line(&self.provider, &mut self.config, &self.services) {
            LineValidation::Resolved => {}
            LineValidation::NoLineConfigured => return RunOutcome::NoLineConfigured,
            LineValidation::Declined => {
                // Bad input is still reported even though nothing will be dialed.
                number_to_call(args, self.services.notifier);
                return RunOutcome::LineDeclined;
            }
        }

        let number = number_to_call(args, self.services.notifier);
        RunOutcome::Dialed(place_call(&self.provider, &self.config, &number))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
