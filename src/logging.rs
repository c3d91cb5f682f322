//! Tracing setup.
//!
//! Views log through `tracing` under the `toggleui` target. Nothing is printed
//! until a subscriber is installed, either by the application or with
//! [`install_tracing`].

use std::str::FromStr;
use std::sync::{
    Arc, Once,
    atomic::{AtomicUsize, Ordering},
};

use tracing::{Event, Level, Subscriber, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::Context, prelude::*};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "TOGGLEUI_LOG";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static TRACING_INSTALLED: Once = Once::new();

/// Parses a level name such as `"warn"` or `"debug"`, falling back to `info`.
#[must_use]
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Installs a global `fmt` subscriber (idempotent).
///
/// The filter is read from [`LOG_ENV`]; when the variable is unset or invalid the
/// default level is `info`.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL.to_string()));

        let result = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_filter(filter))
            .try_init();

        if result.is_err() {
            eprintln!("toggleui tracing subscriber failed to initialize");
        }
    });
}

/// Installs a global `fmt` subscriber at a fixed level, ignoring [`LOG_ENV`].
pub fn install_tracing_with_level(level: &str) {
    TRACING_INSTALLED.call_once(|| {
        let result = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_filter(parse_level(level)))
            .try_init();

        if result.is_err() {
            eprintln!("toggleui tracing subscriber failed to initialize");
        }
    });
}

// ============================================================================
// Warning Counter
// ============================================================================

/// A layer that counts warning events.
///
/// Clones share the same counter, so one clone can be installed in a subscriber
/// while another is kept around to read the count.
///
/// ```rust
/// use toggleui::logging::WarningCounter;
/// use tracing_subscriber::prelude::*;
///
/// let counter = WarningCounter::new();
/// let subscriber = tracing_subscriber::registry().with(counter.clone());
/// tracing::subscriber::with_default(subscriber, || tracing::warn!("careful"));
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WarningCounter {
    warnings: Arc<AtomicUsize>,
}

impl WarningCounter {
    /// Creates a counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of warnings seen so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.warnings.load(Ordering::SeqCst)
    }

    /// Resets the count to zero.
    pub fn reset(&self) {
        self.warnings.store(0, Ordering::SeqCst);
    }
}

impl<S: Subscriber> Layer<S> for WarningCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.warnings.fetch_add(1, Ordering::SeqCst);
        }
    }
}
