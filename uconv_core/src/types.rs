//! Core domain types for the unit converter.
//!
//! This module defines the catalog building blocks:
//! - Conversions (label, transform, output unit)
//! - Categories and their formatting/validation rules

use crate::ConvertError;

/// A pure numeric transform from one unit to another
pub type Transform = fn(f64) -> f64;

// ============================================================================
// Conversion
// ============================================================================

/// A single directed unit transform (e.g. "°C → °F")
#[derive(Clone, Debug)]
pub struct Conversion {
    /// Display label, unique within its category
    pub label: &'static str,
    pub transform: Transform,
    /// Unit suffix appended to formatted results
    pub unit: &'static str,
}

impl Conversion {
    pub const fn new(label: &'static str, transform: Transform, unit: &'static str) -> Self {
        Self {
            label,
            transform,
            unit,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        (self.transform)(value)
    }
}

// ============================================================================
// Domain rules
// ============================================================================

/// Sanity check applied to a parsed value before it is transformed
#[derive(Clone, Debug, PartialEq)]
pub enum DomainRule {
    /// Any finite or infinite value is accepted
    None,

    /// Negative values are rejected for every conversion in the category
    NonNegative { message: &'static str },

    /// Negative values are rejected only for conversions whose label starts
    /// with `prefix`. Only the label is inspected.
    NonNegativeForPrefix {
        prefix: &'static str,
        message: &'static str,
    },
}

impl DomainRule {
    pub fn check(&self, label: &str, value: f64) -> Result<(), ConvertError> {
        match self {
            DomainRule::None => Ok(()),
            DomainRule::NonNegative { message } if value < 0.0 => {
                Err(ConvertError::Domain((*message).to_string()))
            }
            DomainRule::NonNegativeForPrefix { prefix, message }
                if label.starts_with(prefix) && value < 0.0 =>
            {
                Err(ConvertError::Domain((*message).to_string()))
            }
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Category
// ============================================================================

/// A named group of related conversions
#[derive(Clone, Debug)]
pub struct Category {
    pub name: &'static str,
    /// Decimal places used when formatting results
    pub decimals: usize,
    pub rule: DomainRule,
    /// Ordered; the first entry is the default selection
    pub conversions: Vec<Conversion>,
}

impl Category {
    pub fn conversion(&self, label: &str) -> Option<&Conversion> {
        self.conversions.iter().find(|c| c.label == label)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.conversions.iter().map(|c| c.label).collect()
    }

    /// First conversion label, the default selection for this category
    pub fn default_label(&self) -> Option<&'static str> {
        self.conversions.first().map(|c| c.label)
    }

    /// Format a transformed value with this category's precision and `unit`
    pub fn format(&self, value: f64, unit: &str) -> String {
        format!("{:.*} {}", self.decimals, value, unit)
    }
}
