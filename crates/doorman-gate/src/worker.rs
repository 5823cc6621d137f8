//! Async driver for the visibility gate
//!
//! Owns the interaction-event channel and the reveal timer, feeding the
//! synchronous state machine until the mount settles or is torn down.

use crate::{GateConfig, GateError, VisibilityGate};
use doorman_domain::signals::ClientSignals;
use doorman_domain::{GateState, GateView, InteractionKind};
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Background driver that runs one gate mount to completion
///
/// The hosting runtime forwards pointer/touch/key events through an mpsc
/// channel; dropping the sender unmounts the gate.
///
/// # Examples
///
/// ```no_run
/// use doorman_domain::{InteractionKind, SignalSnapshot};
/// use doorman_gate::{GateConfig, GateWorker};
/// use tokio::sync::mpsc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let (events, receiver) = mpsc::channel(16);
///     tokio::spawn(async move {
///         // Forward interaction events from the host; drop to unmount.
///         events.send(InteractionKind::KeyDown).await.ok();
///     });
///
///     let worker = GateWorker::new(GateConfig::default());
///     let state = worker.run(&SignalSnapshot::desktop(), receiver).await?;
///     println!("final classification: {}", state.classification().as_str());
///     Ok(())
/// }
/// ```
pub struct GateWorker {
    config: GateConfig,
}

impl GateWorker {
    /// Create a worker with the given configuration
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Create a worker with default configuration
    pub fn default_config() -> Self {
        Self::new(GateConfig::default())
    }

    /// Run one mount to completion
    ///
    /// Mounts the gate, then processes interaction events and the reveal
    /// timer until the content becomes visible, the mount settles terminally
    /// (development bypass or bot verdict), or the sender side of `events`
    /// closes (unmount). Subscriptions and the timer are released on every
    /// exit path.
    ///
    /// # Errors
    ///
    /// Returns an error only for invalid configuration; the running gate
    /// itself cannot fail.
    pub async fn run<S: ClientSignals>(
        &self,
        signals: &S,
        mut events: mpsc::Receiver<InteractionKind>,
    ) -> Result<GateState, GateError> {
        let mut gate = VisibilityGate::mount(&self.config, signals)?;

        match gate.view() {
            GateView::Content => {
                tracing::info!("Content revealed on mount (development bypass)");
                return Ok(gate.state().clone());
            }
            GateView::Placeholder(_) if !gate.timer_armed() => {
                // Bot verdict: nothing was acquired, nothing to drive.
                tracing::info!("Mount settled as bot, placeholder held");
                return Ok(gate.state().clone());
            }
            GateView::Placeholder(_) => {}
        }

        let reveal = sleep(self.config.reveal_delay());
        tokio::pin!(reveal);

        loop {
            tokio::select! {
                () = &mut reveal, if gate.timer_armed() => {
                    gate.on_reveal_timer();
                    tracing::debug!("Reveal delay elapsed");
                }
                event = events.recv() => match event {
                    Some(kind) => {
                        gate.on_interaction(kind);
                    }
                    None => {
                        gate.unmount();
                        tracing::debug!("Event channel closed, gate torn down");
                        break;
                    }
                },
            }

            if gate.view().is_content() {
                gate.unmount();
                tracing::info!("Content revealed");
                break;
            }
        }

        Ok(gate.state().clone())
    }
}
