pub use crate::ds::{ForwardList, Link, SlotArena, SlotId};

pub use crate::error::InvariantError;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::PromotionMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
pub use crate::policy::self_organizing::SelfOrganizingMap;
pub use crate::traits::{AssocContainer, FrequencyPromoting};
