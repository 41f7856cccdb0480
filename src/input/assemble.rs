use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{AttributeRules, Config};
use crate::scoring::{Attribute, AttributeError, Dimension, Listing, ValidRange};

use super::records::RawListing;

/// Why a single record could not become a listing.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{dimension}: {source}")]
pub struct RecordError {
    pub dimension: &'static str,
    #[source]
    pub source: AttributeError,
}

/// Build one listing from a raw record using the configured rules.
///
/// The zone label is resolved through the zone table first; the resulting
/// numeric desirability is scored like any other attribute.
pub fn build_listing(record: &RawListing, config: &Config) -> Result<Listing, RecordError> {
    let rules = &config.attributes;
    let attributes = [
        attribute_for(record.price, Dimension::Price, rules)?,
        attribute_for(record.area, Dimension::Area, rules)?,
        attribute_for(record.year, Dimension::Year, rules)?,
        attribute_for(record.fee, Dimension::Fee, rules)?,
        attribute_for(record.floor, Dimension::Floor, rules)?,
        attribute_for(record.rooms, Dimension::Rooms, rules)?,
        attribute_for(
            config.zones.score_for(&record.zone),
            Dimension::Zone,
            rules,
        )?,
    ];
    Ok(Listing::new(
        record.name.clone(),
        record.url.clone(),
        attributes,
    ))
}

fn attribute_for(
    value: f64,
    dimension: Dimension,
    rules: &AttributeRules,
) -> Result<Attribute, RecordError> {
    let wrap = |source| RecordError {
        dimension: dimension.label(),
        source,
    };
    let rule = rules.rule(dimension);
    let range = match rule.range {
        Some([min, max]) => Some(ValidRange::new(min, max).map_err(wrap)?),
        None => None,
    };
    Attribute::new(value, dimension.direction(), range, rule.weight).map_err(wrap)
}

/// Assemble the batch with a drop-and-report policy: a record whose
/// attribute construction fails is logged and excluded, and the rest of the
/// batch proceeds. Input order is kept for the survivors.
pub fn assemble(records: &[RawListing], config: &Config) -> Vec<Listing> {
    let mut listings = Vec::with_capacity(records.len());
    for record in records {
        match build_listing(record, config) {
            Ok(listing) => listings.push(listing),
            Err(e) => {
                warn!(listing = %record.name, error = %e, "dropping listing");
            }
        }
    }
    debug!(
        kept = listings.len(),
        dropped = records.len() - listings.len(),
        "assembled batch"
    );
    listings
}
