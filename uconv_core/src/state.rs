//! Presentation state shared by the front ends.
//!
//! Holds the current selection, the raw value text and the last result, and
//! enforces the selection rules: changing category resets the conversion to
//! that category's first entry and clears the displayed result.

use crate::{ConvertError, Registry};

/// Text shown when there is no result to display
pub const NO_RESULT: &str = "—";

/// Value pre-filled when nothing else is configured
pub const DEFAULT_INITIAL_VALUE: &str = "0";

#[derive(Clone, Debug)]
pub struct ConverterState<'r> {
    registry: &'r Registry,
    category: &'static str,
    conversion: &'static str,
    value: String,
    result: String,
}

impl<'r> ConverterState<'r> {
    /// Start on `category`, or on the registry's first category if unknown.
    ///
    /// Returns `UnknownCategory` only when the registry is empty.
    pub fn new(registry: &'r Registry, category: &str) -> Result<Self, ConvertError> {
        let cat = registry
            .category(category)
            .or_else(|err| registry.categories().first().ok_or(err))?;

        let mut state = Self {
            registry,
            category: cat.name,
            conversion: "",
            value: DEFAULT_INITIAL_VALUE.to_string(),
            result: NO_RESULT.to_string(),
        };
        state.select_category(cat.name)?;
        Ok(state)
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn conversion(&self) -> &'static str {
        self.conversion
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    /// Labels of the current category
    pub fn conversions(&self) -> Vec<&'static str> {
        self.registry
            .list_conversions(self.category)
            .unwrap_or_default()
    }

    /// Switch category, resetting the conversion and clearing the result
    pub fn select_category(&mut self, name: &str) -> Result<(), ConvertError> {
        let cat = self.registry.category(name)?;
        let first = cat
            .default_label()
            .ok_or_else(|| ConvertError::UnknownConversion {
                category: cat.name.to_string(),
                label: String::new(),
            })?;

        self.category = cat.name;
        self.conversion = first;
        self.result = NO_RESULT.to_string();
        tracing::debug!("Selected category {} ({})", self.category, self.conversion);
        Ok(())
    }

    pub fn select_conversion(&mut self, label: &str) -> Result<(), ConvertError> {
        let conversion = self.registry.conversion(self.category, label)?;
        self.conversion = conversion.label;
        Ok(())
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Convert the current value. The previous result survives a failure.
    pub fn convert(&mut self) -> Result<&str, ConvertError> {
        let formatted = self
            .registry
            .convert(self.category, self.conversion, &self.value)?;
        self.result = formatted;
        Ok(&self.result)
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.result = NO_RESULT.to_string();
    }
}
