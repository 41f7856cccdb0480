pub mod attribute;
pub mod listing;
pub mod set;
pub mod validation;
pub mod zone;

pub use attribute::{Attribute, AttributeError, Direction, ValidRange};
pub use listing::{Dimension, Listing};
pub use set::{BatchError, ChartSeries, ListingSet, RankedListing};
pub use validation::validate_config;
pub use zone::ZoneTable;
