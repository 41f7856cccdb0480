pub mod assemble;
pub mod records;

pub use assemble::{assemble, build_listing, RecordError};
pub use records::{load_records, RawListing};
