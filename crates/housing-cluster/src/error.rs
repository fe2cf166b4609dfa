use linfa_clustering::KMeansError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("no housing entries to cluster")]
    NoProperties,

    #[error("cluster count must be at least 1")]
    NoClusters,

    /// K-means needs at least one entry per cluster.
    #[error("cannot form {clusters} clusters from {properties} entries")]
    TooFewProperties { clusters: usize, properties: usize },

    #[error("k-means failed: {0}")]
    KMeans(#[from] KMeansError),
}

pub type Result<T> = std::result::Result<T, ClusterError>;
