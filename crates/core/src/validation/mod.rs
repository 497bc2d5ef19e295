//! Field validation with translated failure messages.
//!
//! [`FieldValidator`] is constructed once at startup for a [`Locale`] and
//! shared through application state. It runs the `validator` derive rules
//! of a request body and reports the first failure, in declared field
//! order, as a [`CoreError::Validation`] carrying the translated message.

pub mod catalog;

use std::collections::HashMap;

use validator::{Validate, ValidationError};

pub use catalog::{Locale, UnknownLocale};

use crate::error::CoreError;

/// Declares the order in which a body's fields are reported.
///
/// `validator` collects failures in a hash map, so the order has to come
/// from the type itself for "first failure" to be stable.
pub trait DeclaredFields {
    const FIELDS: &'static [&'static str];
}

#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    locale: Locale,
}

impl FieldValidator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Validate `value`, returning the first translated failure.
    pub fn check<T>(&self, value: &T) -> Result<(), CoreError>
    where
        T: Validate + DeclaredFields,
    {
        let Err(errors) = value.validate() else {
            return Ok(());
        };

        let by_field: HashMap<String, &Vec<ValidationError>> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| (field.to_string(), errs))
            .collect();

        // Declared fields first, then anything undeclared in name order.
        let mut undeclared: Vec<&String> = by_field
            .keys()
            .filter(|k| !T::FIELDS.contains(&k.as_str()))
            .collect();
        undeclared.sort();
        let ordered = T::FIELDS
            .iter()
            .copied()
            .chain(undeclared.into_iter().map(String::as_str));

        for field in ordered {
            let Some(errs) = by_field.get(field) else {
                continue;
            };
            if let Some(message) = errs
                .iter()
                .map(|e| catalog::translate(self.locale, field, e))
                .find(|m| !m.is_empty())
            {
                return Err(CoreError::Validation(message));
            }
        }

        // Only struct-level errors are left, which carry no field name.
        Err(CoreError::Validation(catalog::translate(
            self.locale,
            "input",
            &ValidationError::new("invalid"),
        )))
    }
}
