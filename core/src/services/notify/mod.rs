//! Outbound event-publishing port.
//!
//! The identity service never calls its sibling services directly; it emits
//! events onto named queues and moves on. Publishing is best-effort from the
//! core's perspective: callers log failures and continue.

mod mock;
#[path = "trait.rs"]
mod trait_;

pub mod r#trait {
    pub use super::trait_::*;
}

pub use mock::{PublishedEvent, RecordingEventPublisher};
pub use r#trait::EventPublisher;
