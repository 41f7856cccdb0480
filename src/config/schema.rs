use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::scoring::{Dimension, ZoneTable};

/// Main configuration.
///
/// Defines the preference profile listings are scored against: one rule per
/// attribute dimension, the zone desirability table, and the output limits.
///
/// Example YAML:
/// ```yaml
/// attributes:
///   price: { range: [100000, 400000], weight: 1.0 }
///   area:  { range: [50, 150], weight: 0.8 }
/// zones:
///   matinkylä: 1.0
///   olari: 0.5
/// rank_limit: 10
/// chart_limit: 5
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Per-dimension scoring rules (range and weight).
    #[serde(default)]
    pub attributes: AttributeRules,

    /// Zone label to desirability weight. Labels missing from the table
    /// score 0.
    #[serde(default)]
    pub zones: ZoneTable,

    /// How many listings the ranked table shows.
    #[serde(default = "default_rank_limit")]
    pub rank_limit: usize,

    /// How many listings the chart handoff includes.
    #[serde(default = "default_chart_limit")]
    pub chart_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attributes: AttributeRules::default(),
            zones: ZoneTable::new(HashMap::from([
                ("matinkylä".to_string(), 1.0),
                ("leppävaara".to_string(), 1.0),
                ("tiistilä".to_string(), 1.0),
                ("olari".to_string(), 0.5),
            ])),
            rank_limit: default_rank_limit(),
            chart_limit: default_chart_limit(),
        }
    }
}

fn default_rank_limit() -> usize {
    10
}

fn default_chart_limit() -> usize {
    5
}

/// One rule per scored dimension. A dimension left out of the config keeps
/// its stock rule.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct AttributeRules {
    pub price: AttributeRule,
    pub area: AttributeRule,
    pub year: AttributeRule,
    pub fee: AttributeRule,
    pub floor: AttributeRule,
    pub rooms: AttributeRule,
    pub zone: AttributeRule,
}

impl AttributeRules {
    pub fn rule(&self, dimension: Dimension) -> &AttributeRule {
        match dimension {
            Dimension::Price => &self.price,
            Dimension::Area => &self.area,
            Dimension::Year => &self.year,
            Dimension::Fee => &self.fee,
            Dimension::Floor => &self.floor,
            Dimension::Rooms => &self.rooms,
            Dimension::Zone => &self.zone,
        }
    }
}

impl Default for AttributeRules {
    fn default() -> Self {
        Self {
            price: AttributeRule::ranged(100_000.0, 400_000.0),
            area: AttributeRule::ranged(50.0, 150.0),
            year: AttributeRule::ranged(1950.0, 2022.0),
            fee: AttributeRule::ranged(10.0, 450.0),
            floor: AttributeRule::ranged(0.0, 10.0),
            rooms: AttributeRule::ranged(1.0, 5.0),
            zone: AttributeRule::ranged(0.0, 1.0),
        }
    }
}

/// Scoring rule for a single dimension.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct AttributeRule {
    /// Intrinsic [min, max] scale. Values outside it invalidate the listing;
    /// omit the range to normalize against the batch's observed spread
    /// instead.
    pub range: Option<[f64; 2]>,

    /// Importance weight in [0, 1].
    pub weight: f64,
}

impl AttributeRule {
    fn ranged(min: f64, max: f64) -> Self {
        Self {
            range: Some([min, max]),
            weight: 1.0,
        }
    }
}

impl Default for AttributeRule {
    fn default() -> Self {
        Self {
            range: None,
            weight: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.attributes.price.range, Some([100_000.0, 400_000.0]));
        assert_eq!(config.attributes.rooms.range, Some([1.0, 5.0]));
        assert_eq!(config.attributes.price.weight, 1.0);
        assert_eq!(config.zones.score_for("matinkylä"), 1.0);
        assert_eq!(config.zones.score_for("olari"), 0.5);
        assert_eq!(config.rank_limit, 10);
        assert_eq!(config.chart_limit, 5);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
attributes:
  price: { range: [120000, 300000], weight: 0.9 }
rank_limit: 3
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.attributes.price.range, Some([120_000.0, 300_000.0]));
        assert_eq!(config.attributes.price.weight, 0.9);
        // Dimensions not mentioned keep their stock rules.
        assert_eq!(config.attributes.area.range, Some([50.0, 150.0]));
        assert_eq!(config.rank_limit, 3);
        assert_eq!(config.chart_limit, 5);
        assert!(config.zones.is_empty());
    }

    #[test]
    fn test_rule_without_range() {
        let yaml = r#"
attributes:
  price: { weight: 0.5 }
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.attributes.price.range, None);
        assert_eq!(config.attributes.price.weight, 0.5);
    }

    #[test]
    fn test_empty_config_parse() {
        let yaml = "{}";
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.attributes, AttributeRules::default());
        assert!(config.zones.is_empty());
        assert_eq!(config.rank_limit, 10);
    }

    #[test]
    fn test_zone_table_parse() {
        let yaml = r#"
zones:
  Matinkylä: 1.0
  olari: 0.5
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.zones.score_for("matinkylä"), 1.0);
        assert_eq!(config.zones.len(), 2);
    }

    #[test]
    fn test_rule_lookup_by_dimension() {
        let rules = AttributeRules::default();
        assert_eq!(rules.rule(Dimension::Fee).range, Some([10.0, 450.0]));
        assert_eq!(rules.rule(Dimension::Zone).range, Some([0.0, 1.0]));
    }
}
