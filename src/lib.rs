//! freqlist: self-organizing association lists that promote frequently
//! found keys toward the head of a singly linked chain.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;

pub use crate::ds::{ForwardList, Link, SlotArena, SlotId};
pub use crate::error::InvariantError;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::PromotionMetricsSnapshot;
pub use crate::policy::self_organizing::SelfOrganizingMap;
