//! Conversion registry: catalog lookups and the `convert` pipeline.
//!
//! `convert` runs, in order:
//! 1. parse the raw input (`parse_value`)
//! 2. the category's domain rule
//! 3. lookup of the (category, label) pair
//! 4. the transform
//! 5. formatting with the category's precision and the output unit

use crate::{Category, Conversion, ConvertError};

/// Immutable table of categories, in display order
#[derive(Clone, Debug)]
pub struct Registry {
    categories: Vec<Category>,
}

impl Registry {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category names, same order every call
    pub fn list_categories(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.name).collect()
    }

    /// Conversion labels of `category`, first entry is the default selection
    pub fn list_conversions(&self, category: &str) -> Result<Vec<&'static str>, ConvertError> {
        Ok(self.category(category)?.labels())
    }

    pub fn category(&self, name: &str) -> Result<&Category, ConvertError> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ConvertError::UnknownCategory(name.to_string()))
    }

    pub fn conversion(&self, category: &str, label: &str) -> Result<&Conversion, ConvertError> {
        self.category(category)?
            .conversion(label)
            .ok_or_else(|| ConvertError::UnknownConversion {
                category: category.to_string(),
                label: label.to_string(),
            })
    }

    /// Parse, validate, transform and format `raw` using the named conversion.
    ///
    /// Input errors win over selection errors: a blank value reports
    /// `EmptyInput` even when the category is unknown.
    pub fn convert(&self, category: &str, label: &str, raw: &str) -> Result<String, ConvertError> {
        let value = parse_value(raw)?;

        let found = self.category(category);
        if let Ok(cat) = &found {
            cat.rule.check(label, value)?;
        }
        let cat = found?;

        let conversion = cat
            .conversion(label)
            .ok_or_else(|| ConvertError::UnknownConversion {
                category: category.to_string(),
                label: label.to_string(),
            })?;

        let out = conversion.apply(value);
        let formatted = cat.format(out, conversion.unit);

        tracing::debug!("{} / {}: {} -> {}", category, label, value, formatted);
        Ok(formatted)
    }
}

/// Parse a user-entered number.
///
/// Surrounding whitespace is ignored and `,` is accepted as the decimal
/// separator.
pub fn parse_value(raw: &str) -> Result<f64, ConvertError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ConvertError::Parse(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_default_registry;

    #[test]
    fn test_list_categories_order() {
        let registry = build_default_registry();
        assert_eq!(
            registry.list_categories(),
            vec!["Weight", "Temperature", "Distance", "Time"]
        );
        assert_eq!(registry.list_categories(), registry.list_categories());
    }

    #[test]
    fn test_every_category_has_conversions() {
        let registry = build_default_registry();
        for name in registry.list_categories() {
            let labels = registry.list_conversions(name).unwrap();
            assert!(!labels.is_empty(), "{} has no conversions", name);
        }
    }

    #[test]
    fn test_list_conversions_unknown_category() {
        let registry = build_default_registry();
        assert_eq!(
            registry.list_conversions("Volume"),
            Err(ConvertError::UnknownCategory("Volume".into()))
        );
    }

    #[test]
    fn test_parse_value_separators() {
        assert_eq!(parse_value("12,5"), Ok(12.5));
        assert_eq!(parse_value("12.5"), Ok(12.5));
        assert_eq!(parse_value("  -3 \t"), Ok(-3.0));
        assert_eq!(parse_value("1e3"), Ok(1000.0));
    }

    #[test]
    fn test_parse_value_errors() {
        assert_eq!(parse_value(""), Err(ConvertError::EmptyInput));
        assert_eq!(parse_value("   "), Err(ConvertError::EmptyInput));
        assert_eq!(
            parse_value("abc"),
            Err(ConvertError::Parse("abc".into()))
        );
        assert_eq!(
            parse_value("1,2,3"),
            Err(ConvertError::Parse("1,2,3".into()))
        );
    }

    #[test]
    fn test_convert_weight_four_decimals() {
        let registry = build_default_registry();
        assert_eq!(
            registry.convert("Weight", "kg → lb", "10").unwrap(),
            "22.0462 lb"
        );
        assert_eq!(
            registry.convert("Weight", "lb → kg", "0").unwrap(),
            "0.0000 kg"
        );
    }

    #[test]
    fn test_convert_temperature_two_decimals() {
        let registry = build_default_registry();
        assert_eq!(
            registry.convert("Temperature", "°C → °F", "100").unwrap(),
            "212.00 °F"
        );
        assert_eq!(
            registry.convert("Temperature", "°F → °C", "32").unwrap(),
            "0.00 °C"
        );
    }

    #[test]
    fn test_convert_accepts_comma() {
        let registry = build_default_registry();
        assert_eq!(
            registry.convert("Distance", "km → miles", "12,5"),
            registry.convert("Distance", "km → miles", "12.5")
        );
        assert_eq!(
            registry.convert("Time", "minutes → hours", " 90 ").unwrap(),
            "1.5000 h"
        );
    }

    #[test]
    fn test_negative_time_rejected() {
        let registry = build_default_registry();
        assert_eq!(
            registry.convert("Time", "seconds → minutes", "-5"),
            Err(ConvertError::Domain("Time values cannot be negative.".into()))
        );
    }

    #[test]
    fn test_negative_kelvin_rejected_only_from_kelvin() {
        let registry = build_default_registry();
        assert_eq!(
            registry.convert("Temperature", "K → °C", "-1"),
            Err(ConvertError::Domain("Kelvin cannot be negative.".into()))
        );
        assert_eq!(
            registry.convert("Temperature", "°C → K", "-1").unwrap(),
            "272.15 K"
        );
        assert_eq!(
            registry.convert("Temperature", "°C → °F", "-40").unwrap(),
            "-40.00 °F"
        );
    }

    #[test]
    fn test_negative_allowed_elsewhere() {
        let registry = build_default_registry();
        assert_eq!(
            registry.convert("Distance", "m → ft", "-1").unwrap(),
            "-3.2808 ft"
        );
    }

    #[test]
    fn test_empty_input_is_not_parse_error() {
        let registry = build_default_registry();
        assert_eq!(
            registry.convert("Weight", "kg → lb", "  "),
            Err(ConvertError::EmptyInput)
        );
        assert_eq!(
            registry.convert("Weight", "kg → lb", "ten"),
            Err(ConvertError::Parse("ten".into()))
        );
    }

    #[test]
    fn test_unknown_selection() {
        let registry = build_default_registry();
        assert_eq!(
            registry.convert("Weight", "stone → kg", "1"),
            Err(ConvertError::UnknownConversion {
                category: "Weight".into(),
                label: "stone → kg".into(),
            })
        );
        assert_eq!(
            registry.convert("Volume", "l → gal", "1"),
            Err(ConvertError::UnknownCategory("Volume".into()))
        );
        // parsing runs before lookup
        assert_eq!(
            registry.convert("Volume", "l → gal", ""),
            Err(ConvertError::EmptyInput)
        );
    }

    #[test]
    fn test_domain_check_runs_before_lookup() {
        let registry = build_default_registry();
        assert_eq!(
            registry.convert("Time", "days → hours", "-1"),
            Err(ConvertError::Domain("Time values cannot be negative.".into()))
        );
    }
}
