use crate::config::Config;

use super::listing::Dimension;

/// Validate the configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Validate per-dimension rules
    for dimension in Dimension::ALL {
        let rule = config.attributes.rule(dimension);
        let label = dimension.label();

        if let Some([min, max]) = rule.range {
            if max <= min {
                errors.push(format!(
                    "attributes.{}.range: max {} must be greater than min {}",
                    label, max, min
                ));
            }
        }

        if !(0.0..=1.0).contains(&rule.weight) {
            errors.push(format!(
                "attributes.{}.weight: {} is outside [0, 1]",
                label, rule.weight
            ));
        }
    }

    // Zone weights must fit the zone dimension's declared scale
    if let Some([min, max]) = config.attributes.rule(Dimension::Zone).range {
        if max > min {
            for (zone, weight) in config.zones.iter() {
                if weight < min || weight > max {
                    errors.push(format!(
                        "zones.{}: weight {} is outside the zone range [{}, {}]",
                        zone, weight, min, max
                    ));
                }
            }
        }
    }

    // Validate output limits
    if config.rank_limit == 0 {
        errors.push("rank_limit: must be at least 1".to_string());
    }
    if config.chart_limit == 0 {
        errors.push("chart_limit: must be at least 1".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
