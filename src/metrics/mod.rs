//! Feature-gated counters for [`SelfOrganizingMap`](crate::SelfOrganizingMap).
//!
//! Enabled with the `metrics` cargo feature.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
