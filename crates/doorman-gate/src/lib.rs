//! Doorman Gate
//!
//! The visibility gate that decides, per mount, whether to reveal wrapped
//! page content or hold it behind a placeholder until the visitor looks
//! human.
//!
//! The gate provides:
//! - Environment resolution with a development bypass
//! - A one-shot detection pass over ambient signals
//! - One-shot interaction subscriptions (pointer, touch, key)
//! - A fixed-delay reveal timer
//! - Guaranteed teardown of subscriptions and the timer on unmount
//!
//! This is a heuristic UX gate, not a security control: a determined agent
//! can synthesize every signal it reads.
//!
//! # Examples
//!
//! ```no_run
//! use doorman_domain::{InteractionKind, SignalSnapshot};
//! use doorman_gate::{GateConfig, GateWorker};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (events, receiver) = mpsc::channel(16);
//!     tokio::spawn(async move {
//!         events.send(InteractionKind::KeyDown).await.ok();
//!     });
//!
//!     let worker = GateWorker::new(GateConfig::default().with_env_overrides());
//!     let state = worker.run(&SignalSnapshot::desktop(), receiver).await?;
//!     println!("final view: {:?}", state.view());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod gate;
mod subscription;
mod worker;

pub use config::{GateConfig, ENV_BOT_PROTECTION, ENV_ENVIRONMENT};
pub use error::GateError;
pub use gate::VisibilityGate;
pub use subscription::{Subscription, SubscriptionSet};
pub use worker::GateWorker;
