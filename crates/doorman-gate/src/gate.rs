//! Visibility gate state machine
//!
//! Synchronous core of the gate: the mount-time environment resolution and
//! detection pass, interaction handling, reveal-timer bookkeeping, and
//! teardown. The async driver in `worker` feeds it events; the machine
//! itself never blocks.

use crate::{GateConfig, GateError, SubscriptionSet};
use doorman_detector::Inspector;
use doorman_domain::signals::ClientSignals;
use doorman_domain::{Environment, GateState, GateView, InteractionKind};

/// Reveal-timer lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    /// Never armed (development bypass or bot verdict)
    Unarmed,

    /// Counting down
    Armed,

    /// Fired
    Elapsed,

    /// Canceled by teardown
    Canceled,
}

/// The visibility gate for a single mount
///
/// Decides, per page load, whether to show the wrapped content or a
/// placeholder, using a one-shot heuristic check plus a window for
/// human-interaction signals.
///
/// # Examples
///
/// ```
/// use doorman_domain::{InteractionKind, SignalSnapshot};
/// use doorman_gate::{GateConfig, VisibilityGate};
///
/// let config = GateConfig::production();
/// let mut gate = VisibilityGate::mount(&config, &SignalSnapshot::desktop()).unwrap();
///
/// gate.on_interaction(InteractionKind::KeyDown);
/// gate.on_reveal_timer();
/// assert!(gate.view().is_content());
/// ```
pub struct VisibilityGate {
    state: GateState,
    subscriptions: SubscriptionSet,
    timer: TimerState,
    pointer_moves: u32,
    pointer_move_threshold: u32,
}

impl VisibilityGate {
    /// Mount the gate: resolve the environment and run detection once
    ///
    /// In development (or with the gate disabled) the heuristics never run
    /// and nothing is acquired. A bot verdict likewise acquires nothing: no
    /// subscriptions are attached, no timer is armed, and no reveal will
    /// ever occur for this mount. Only a clear verdict attaches the three
    /// interaction subscriptions and arms the reveal timer.
    pub fn mount<S: ClientSignals>(config: &GateConfig, signals: &S) -> Result<Self, GateError> {
        config.validate()?;

        let environment = Environment::resolve(
            config.development_build,
            config.disabled,
            signals.hostname(),
        );
        let mut state = GateState::new(environment);

        if environment.is_development() {
            tracing::debug!("Development mount, heuristics bypassed");
            return Ok(Self {
                state,
                subscriptions: SubscriptionSet::empty(),
                timer: TimerState::Unarmed,
                pointer_moves: 0,
                pointer_move_threshold: config.pointer_move_threshold,
            });
        }

        let inspection = Inspector::new(config.detection.clone()).inspect(signals);
        if inspection.is_automated() {
            tracing::info!(
                "Visitor classified as bot ({} checks fired)",
                inspection.reasons.len()
            );
            state.mark_bot();
            return Ok(Self {
                state,
                subscriptions: SubscriptionSet::empty(),
                timer: TimerState::Unarmed,
                pointer_moves: 0,
                pointer_move_threshold: config.pointer_move_threshold,
            });
        }

        tracing::debug!("No automation detected, awaiting interaction");
        Ok(Self {
            state,
            subscriptions: SubscriptionSet::attach_all(),
            timer: TimerState::Armed,
            pointer_moves: 0,
            pointer_move_threshold: config.pointer_move_threshold,
        })
    }

    /// Handle one interaction event
    ///
    /// Ignored unless the channel's subscription is still attached. The
    /// pointer channel fires only after the configured number of cumulative
    /// events; touch and key fire on their first. A channel that fires marks
    /// the visitor human (idempotent) and detaches itself; the others stay
    /// attached until their own first event or teardown. Returns whether the
    /// classification changed.
    pub fn on_interaction(&mut self, kind: InteractionKind) -> bool {
        if !self.subscriptions.is_active(kind) {
            return false;
        }

        if kind == InteractionKind::PointerMove {
            self.pointer_moves += 1;
            if self.pointer_moves < self.pointer_move_threshold {
                return false;
            }
        }

        self.subscriptions.cancel(kind);
        let changed = self.state.mark_human();
        if changed {
            tracing::debug!("Human interaction observed on {}", kind.as_str());
        }
        changed
    }

    /// Handle reveal-timer elapse
    ///
    /// Sets the reveal flag as long as the mount-time verdict still holds;
    /// whether content is actually shown still depends on the
    /// classification. Returns whether the state changed.
    pub fn on_reveal_timer(&mut self) -> bool {
        if self.timer != TimerState::Armed {
            return false;
        }
        self.timer = TimerState::Elapsed;
        self.state.reveal()
    }

    /// Whether the reveal timer is counting down
    pub fn timer_armed(&self) -> bool {
        self.timer == TimerState::Armed
    }

    /// Current state of this mount
    pub fn state(&self) -> &GateState {
        &self.state
    }

    /// The view to render
    pub fn view(&self) -> GateView {
        self.state.view()
    }

    /// Cumulative pointer-move events seen by this mount
    pub fn pointer_moves(&self) -> u32 {
        self.pointer_moves
    }

    /// Attached subscriptions
    pub fn subscriptions(&self) -> &SubscriptionSet {
        &self.subscriptions
    }

    /// Tear the mount down: cancel every subscription and the timer
    ///
    /// Safe on every exit path, including mounts that never acquired them.
    pub fn unmount(&mut self) {
        self.subscriptions.cancel_all();
        if self.timer == TimerState::Armed {
            self.timer = TimerState::Canceled;
        }
        tracing::debug!("Gate unmounted");
    }
}
