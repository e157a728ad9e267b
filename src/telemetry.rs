//! Installing a `tracing` subscriber for binaries built on this crate.
//!
//! The library only emits events; nothing is printed until a subscriber is
//! installed. [`init_tracing`] sets up a formatting layer filtered through
//! `RUST_LOG` (default `info`).

use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Configure the global tracing subscriber.
///
/// # Errors
///
/// Returns [`InitError::AlreadyInitialised`] after a successful call, and
/// [`InitError::Subscriber`] if some other global subscriber is already set.
/// A failed call leaves nothing installed, so it may be retried.
pub fn init_tracing() -> Result<(), InitError> {
    if INITIALISED.get().is_some() {
        return Err(InitError::AlreadyInitialised);
    }

    let ansi = std::io::stderr().is_terminal();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(ansi);

    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(InitError::Subscriber)?;

    INITIALISED
        .set(())
        .map_err(|()| InitError::AlreadyInitialised)
}

/// Errors emitted when configuring the tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// [`init_tracing`] already succeeded.
    #[error("tracing has already been initialised")]
    AlreadyInitialised,
    /// Another global subscriber was installed first.
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[source] TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber is process-wide, so this is the only test that
    // touches it.
    #[test]
    fn test_foreign_subscriber_does_not_mark_initialised() {
        tracing::subscriber::set_global_default(tracing::subscriber::NoSubscriber::default())
            .unwrap();

        assert!(matches!(init_tracing(), Err(InitError::Subscriber(_))));
        // Still reported as a foreign subscriber, not as our own
        assert!(matches!(init_tracing(), Err(InitError::Subscriber(_))));
        assert!(INITIALISED.get().is_none());
    }
}
