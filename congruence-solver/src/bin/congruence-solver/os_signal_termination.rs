use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use congruence_solver::core::termination::TerminationCondition;
use log::warn;

/// A [`TerminationCondition`] which triggers due to a SIGINT or SIGTERM signal.
///
/// One listener serves every instance of a batch, so an interrupted search also skips the
/// remaining instances.
#[derive(Clone, Debug)]
pub(crate) struct OsSignal {
    signal_received: Arc<AtomicBool>,
}

impl OsSignal {
    /// Create a termination and install the event listeners.
    pub(crate) fn install() -> OsSignal {
        // The signals to listen to for termination.
        const TERMINATION_SIGNALS: &[std::ffi::c_int] =
            &[signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM];

        let signal_termination = OsSignal {
            signal_received: Arc::new(AtomicBool::new(false)),
        };

        for &signal in TERMINATION_SIGNALS {
            if let Err(error) =
                signal_hook::flag::register(signal, Arc::clone(&signal_termination.signal_received))
            {
                warn!("failed to register a listener for signal {signal}: {error}");
            }
        }

        signal_termination
    }

    pub(crate) fn is_triggered(&self) -> bool {
        self.signal_received.load(Ordering::Relaxed)
    }
}

impl TerminationCondition for OsSignal {
    fn should_stop(&mut self) -> bool {
        self.is_triggered()
    }
}
