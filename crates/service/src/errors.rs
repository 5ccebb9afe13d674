use std::{collections::BTreeMap, fmt};

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

/// Field-level validation messages keyed by the external (camelCase) field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errs = Self::default();
        errs.push(field, message);
        errs
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for msg in messages {
                if !first { f.write_str("; ")?; }
                write!(f, "{field}: {msg}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errs: ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, list) in errs.field_errors() {
            let key = camel_case(field);
            for e in list {
                let msg = e.message.as_ref().map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string());
                out.push(&key, msg);
            }
        }
        out
    }
}

/// `address_line1` -> `addressLine1`
fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: Uuid) -> Self {
        Self::NotFound(format!("{entity} not found with id: {id}"))
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errs: ValidationErrors) -> Self { Self::Validation(errs.into()) }
}
