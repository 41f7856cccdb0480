use std::cmp::Ordering;

use serde::Serialize;
use thiserror::Error;

use super::listing::{Dimension, Listing};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("cannot normalize an empty batch of listings")]
    EmptyBatch,
}

/// One row of ranked output: 1-based position, identity, weighted score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedListing {
    pub rank: usize,
    pub name: String,
    pub score: f64,
    pub url: String,
}

/// Chart handoff for one listing: name plus normalized values in fixed
/// dimension order. Rendering is the chart collaborator's job, not ours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub values: [f64; Dimension::COUNT],
}

/// The batch of listings being compared. Construction runs the
/// normalization pass, so scores are comparable from the start.
#[derive(Debug, Clone)]
pub struct ListingSet {
    listings: Vec<Listing>,
}

impl ListingSet {
    pub fn new(listings: Vec<Listing>) -> Result<Self, BatchError> {
        if listings.is_empty() {
            return Err(BatchError::EmptyBatch);
        }
        let mut set = Self { listings };
        set.normalize();
        Ok(set)
    }

    /// Column-wise normalization: each dimension slot is normalized
    /// independently against the batch's observed min/max of raw values.
    /// Attributes with a declared range keep their own scale. Raw values are
    /// never touched, so re-running the pass is idempotent.
    pub fn normalize(&mut self) {
        for dimension in Dimension::ALL {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for listing in &self.listings {
                let value = listing.attribute(dimension).value();
                min = min.min(value);
                max = max.max(value);
            }
            for listing in &mut self.listings {
                listing.attribute_mut(dimension).normalize(min, max);
            }
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// The top `limit` listings by weighted score descending. Ties are
    /// broken by name ascending so output order is deterministic.
    pub fn top(&self, limit: usize) -> Vec<&Listing> {
        let mut scored: Vec<(f64, &Listing)> = self
            .listings
            .iter()
            .map(|listing| (listing.weighted_score(), listing))
            .collect();
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.name.cmp(&b.1.name))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, listing)| listing)
            .collect()
    }

    pub fn rank(&self, limit: usize) -> Vec<RankedListing> {
        self.top(limit)
            .into_iter()
            .enumerate()
            .map(|(index, listing)| RankedListing {
                rank: index + 1,
                name: listing.name.clone(),
                score: listing.weighted_score(),
                url: listing.url.clone(),
            })
            .collect()
    }

    /// The top `limit` listings' normalized vectors, in rank order, for an
    /// external radar-chart renderer.
    pub fn top_for_presentation(&self, limit: usize) -> Vec<ChartSeries> {
        self.top(limit)
            .into_iter()
            .map(|listing| ChartSeries {
                name: listing.name.clone(),
                values: listing.normalized_vector(),
            })
            .collect()
    }
}
