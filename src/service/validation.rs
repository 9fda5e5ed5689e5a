//! Request validation: run the declared rules and collect every failing field.

use crate::case::to_camel_case;
use crate::error::AppError;
use serde::Serialize;
use std::collections::BTreeMap;
use validator::{Validate, ValidationError, ValidationErrors};

/// Failing fields (camelCase, as they appear on the wire) and their messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport(BTreeMap<String, Vec<String>>);

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl From<&ValidationErrors> for ValidationReport {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = BTreeMap::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs.iter().map(describe).collect();
            out.insert(to_camel_case(&field), messages);
        }
        ValidationReport(out)
    }
}

fn describe(e: &ValidationError) -> String {
    match &e.message {
        Some(m) => m.to_string(),
        None => e.code.to_string(),
    }
}

/// Validate a transfer object; every failing field ends up in the error report.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), AppError> {
    dto.validate()
        .map_err(|errors| AppError::Validation(ValidationReport::from(&errors)))
}
