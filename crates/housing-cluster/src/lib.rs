//! K-means clustering of cleaned housing entries.
//!
//! Entries are grouped on two features, `TotalUnits` and `ActiveSubs`,
//! each min-max scaled to `[0, 1]` before fitting so neither dominates the
//! distance. Centroids are reported back in the original units.

mod error;
mod kmeans;
mod scale;

pub use error::{ClusterError, Result};
pub use kmeans::{Cluster, ClusterReport, DEFAULT_CLUSTERS, cluster_properties};
