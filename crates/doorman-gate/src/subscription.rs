//! One-shot interaction subscriptions
//!
//! Each interaction channel owns an explicit handle that is canceled on its
//! first qualifying event or on teardown, whichever comes first. Handles are
//! bookkeeping for the hosting runtime's listener registrations; the gate
//! never processes an event whose handle is gone.

use doorman_domain::InteractionKind;

/// Handle for one interaction channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    kind: InteractionKind,
    active: bool,
}

impl Subscription {
    /// Create an active subscription for the given channel
    pub fn new(kind: InteractionKind) -> Self {
        Self { kind, active: true }
    }

    /// The channel this subscription listens on
    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    /// Whether the subscription is still attached
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Detach the subscription (idempotent)
    pub fn cancel(&mut self) {
        self.active = false;
    }
}

/// The set of subscriptions held by one gate mount
#[derive(Debug, Clone, Default)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    /// An empty set (nothing acquired)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach one subscription per interaction channel
    pub fn attach_all() -> Self {
        Self {
            subscriptions: InteractionKind::ALL.iter().copied().map(Subscription::new).collect(),
        }
    }

    /// Whether the channel for `kind` is still attached
    pub fn is_active(&self, kind: InteractionKind) -> bool {
        self.subscriptions
            .iter()
            .any(|s| s.kind() == kind && s.is_active())
    }

    /// Cancel the subscription for `kind` (idempotent)
    pub fn cancel(&mut self, kind: InteractionKind) {
        for subscription in &mut self.subscriptions {
            if subscription.kind() == kind {
                subscription.cancel();
            }
        }
    }

    /// Cancel every subscription
    pub fn cancel_all(&mut self) {
        for subscription in &mut self.subscriptions {
            subscription.cancel();
        }
    }

    /// Number of attached subscriptions
    pub fn active_count(&self) -> usize {
        self.subscriptions.iter().filter(|s| s.is_active()).count()
    }
}
