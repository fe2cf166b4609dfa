//! K-means fit and per-cluster summaries.

use std::collections::BTreeMap;

use housing_ingest::HousingProperty;
use linfa::DatasetBase;
use linfa::prelude::{Fit, Predict};
use linfa_clustering::KMeans;
use ndarray::Array1;

use crate::error::{ClusterError, Result};
use crate::scale::scaled_features;

/// Cluster count used when none is given.
pub const DEFAULT_CLUSTERS: usize = 4;

const MAX_ITERATIONS: u64 = 100;

/// One k-means cluster in original units.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub id: usize,
    /// Centroid `TotalUnits`.
    pub total_units: f64,
    /// Centroid `ActiveSubs`.
    pub active_subs: f64,
    /// Entries assigned to this cluster.
    pub size: usize,
    /// Entry count per owner type within the cluster.
    pub owner_types: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterReport {
    /// Cluster id per input entry, in input order.
    pub labels: Vec<usize>,
    /// One entry per cluster, ordered by id.
    pub clusters: Vec<Cluster>,
}

/// Group entries into `clusters` k-means clusters over scaled
/// (`TotalUnits`, `ActiveSubs`).
///
/// The fit is seeded, so the same input always yields the same labels.
/// A cluster that ends up with no entries is still reported, with size 0.
pub fn cluster_properties(
    properties: &[HousingProperty],
    clusters: usize,
) -> Result<ClusterReport> {
    if properties.is_empty() {
        return Err(ClusterError::NoProperties);
    }
    if clusters == 0 {
        return Err(ClusterError::NoClusters);
    }
    if properties.len() < clusters {
        return Err(ClusterError::TooFewProperties {
            clusters,
            properties: properties.len(),
        });
    }

    let (data, scale) = scaled_features(properties);
    let dataset = DatasetBase::from(data);
    let model = KMeans::params(clusters)
        .max_n_iterations(MAX_ITERATIONS)
        .fit(&dataset)?;
    let labels: Array1<usize> = model.predict(dataset.records());
    tracing::debug!(
        entries = properties.len(),
        clusters,
        inertia = model.inertia(),
        "fitted k-means"
    );

    let mut summaries: Vec<Cluster> = model
        .centroids()
        .outer_iter()
        .enumerate()
        .map(|(id, centroid)| {
            let [total_units, active_subs] = scale.denormalize([centroid[0], centroid[1]]);
            Cluster {
                id,
                total_units,
                active_subs,
                size: 0,
                owner_types: BTreeMap::new(),
            }
        })
        .collect();
    for (property, &label) in properties.iter().zip(labels.iter()) {
        let Some(cluster) = summaries.get_mut(label) else {
            continue;
        };
        cluster.size += 1;
        *cluster
            .owner_types
            .entry(property.owner_type.clone())
            .or_insert(0) += 1;
    }

    Ok(ClusterReport {
        labels: labels.to_vec(),
        clusters: summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(total_units: u32, active_subs: u32, owner_type: &str) -> HousingProperty {
        HousingProperty {
            total_units,
            active_subs,
            latitude: 42.36,
            longitude: -71.05,
            owner_type: owner_type.into(),
        }
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let result = cluster_properties(&[], DEFAULT_CLUSTERS);

        assert!(matches!(result, Err(ClusterError::NoProperties)));
    }

    #[test]
    fn test_zero_clusters_is_rejected() {
        let result = cluster_properties(&[property(1, 1, "A")], 0);

        assert!(matches!(result, Err(ClusterError::NoClusters)));
    }

    #[test]
    fn test_fewer_entries_than_clusters_is_rejected() {
        let props = [property(1, 1, "A"), property(2, 2, "A")];

        let result = cluster_properties(&props, 3);

        assert!(matches!(
            result,
            Err(ClusterError::TooFewProperties {
                clusters: 3,
                properties: 2
            })
        ));
    }

    #[test]
    fn test_single_cluster_centroid_is_the_mean() {
        let props = [property(10, 2, "A"), property(30, 6, "B")];

        let report = cluster_properties(&props, 1).unwrap();

        assert_eq!(report.labels, vec![0, 0]);
        let cluster = &report.clusters[0];
        assert_eq!(cluster.size, 2);
        assert!((cluster.total_units - 20.0).abs() < 1e-9);
        assert!((cluster.active_subs - 4.0).abs() < 1e-9);
        assert_eq!(cluster.owner_types.get("A"), Some(&1));
        assert_eq!(cluster.owner_types.get("B"), Some(&1));
    }
}
