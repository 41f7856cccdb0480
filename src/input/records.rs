use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One extracted listing record, as handed over by the extraction side.
///
/// Numeric fields are already parsed out of the source markup; `zone` stays
/// free text and is resolved through the zone table during assembly.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawListing {
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub price: f64,
    pub area: f64,
    pub year: f64,
    pub fee: f64,
    pub floor: f64,
    pub rooms: f64,
    pub zone: String,
}

/// Load a JSON array of listing records.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// records.
pub fn load_records(path: &Path) -> Result<Vec<RawListing>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read listings file at {}", path.display()))?;

    let records: Vec<RawListing> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse listings: invalid JSON in {}", path.display()))?;

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_parse() {
        let json = r#"{
            "name": "Kaivomestarinkatu 8",
            "url": "https://example.com/listing/1",
            "price": 215000,
            "area": 74.5,
            "year": 1987,
            "fee": 320,
            "floor": 3,
            "rooms": 3,
            "zone": "Matinkylä"
        }"#;
        let record: RawListing = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Kaivomestarinkatu 8");
        assert_eq!(record.price, 215_000.0);
        assert_eq!(record.area, 74.5);
        assert_eq!(record.zone, "Matinkylä");
    }

    #[test]
    fn test_record_url_defaults_to_empty() {
        let json = r#"{
            "name": "Nameless",
            "price": 150000,
            "area": 60,
            "year": 2000,
            "fee": 200,
            "floor": 2,
            "rooms": 2,
            "zone": "olari"
        }"#;
        let record: RawListing = serde_json::from_str(json).unwrap();
        assert_eq!(record.url, "");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let json = r#"{
            "name": "Nameless",
            "price": 150000,
            "area": 60,
            "year": 2000,
            "fee": 200,
            "floor": 2,
            "rooms": 2,
            "zone": "olari",
            "balcony": true
        }"#;
        assert!(serde_json::from_str::<RawListing>(json).is_err());
    }
}
