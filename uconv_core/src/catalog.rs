//! Default catalog of categories and conversions.
//!
//! This module provides the built-in conversion table for the system.

use crate::registry::Registry;
use crate::transforms::*;
use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Cached default registry, built once and shared read-only
static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(build_default_registry);

/// Get a reference to the cached default registry
pub fn get_default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Builds the default registry.
///
/// **Note**: For production use, prefer `get_default_registry()` which returns a
/// cached reference. This function is retained for testing.
pub fn build_default_registry() -> Registry {
    let categories = vec![
        Category {
            name: "Weight",
            decimals: 4,
            rule: DomainRule::None,
            conversions: vec![
                Conversion::new("kg → lb", kg_to_lb, "lb"),
                Conversion::new("lb → kg", lb_to_kg, "kg"),
            ],
        },
        Category {
            name: "Temperature",
            decimals: 2,
            rule: DomainRule::NonNegativeForPrefix {
                prefix: "K",
                message: "Kelvin cannot be negative.",
            },
            conversions: vec![
                Conversion::new("°C → °F", c_to_f, "°F"),
                Conversion::new("°F → °C", f_to_c, "°C"),
                Conversion::new("°C → K", c_to_k, "K"),
                Conversion::new("K → °C", k_to_c, "°C"),
            ],
        },
        Category {
            name: "Distance",
            decimals: 4,
            rule: DomainRule::None,
            conversions: vec![
                Conversion::new("km → miles", km_to_miles, "miles"),
                Conversion::new("miles → km", miles_to_km, "km"),
                Conversion::new("m → ft", m_to_ft, "ft"),
                Conversion::new("ft → m", ft_to_m, "m"),
            ],
        },
        Category {
            name: "Time",
            decimals: 4,
            rule: DomainRule::NonNegative {
                message: "Time values cannot be negative.",
            },
            conversions: vec![
                Conversion::new("seconds → minutes", s_to_min, "min"),
                Conversion::new("minutes → seconds", min_to_s, "s"),
                Conversion::new("minutes → hours", min_to_h, "h"),
                Conversion::new("hours → minutes", h_to_min, "min"),
            ],
        },
    ];

    Registry::new(categories)
}

impl Registry {
    /// Validate the registry for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.categories().is_empty() {
            errors.push("Registry has no categories".to_string());
        }

        let mut seen_categories = HashSet::new();
        for category in self.categories() {
            if category.name.is_empty() {
                errors.push("Category has empty name".to_string());
            }
            if !seen_categories.insert(category.name) {
                errors.push(format!("Duplicate category '{}'", category.name));
            }
            if category.conversions.is_empty() {
                errors.push(format!("Category '{}' has no conversions", category.name));
            }

            let mut seen_labels = HashSet::new();
            for conversion in &category.conversions {
                if conversion.label.is_empty() {
                    errors.push(format!(
                        "Category '{}' has a conversion with empty label",
                        category.name
                    ));
                }
                if !seen_labels.insert(conversion.label) {
                    errors.push(format!(
                        "Category '{}': duplicate conversion '{}'",
                        category.name, conversion.label
                    ));
                }
                if conversion.unit.is_empty() {
                    errors.push(format!(
                        "Category '{}': conversion '{}' has empty unit",
                        category.name, conversion.label
                    ));
                }
            }
        }

        errors
    }
}
