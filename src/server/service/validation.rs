//! Declarative payload validation.
//!
//! Controllers describe each payload as a list of fields with rules; `Validator::finish`
//! returns every violation at once as `AppError::ValidationFailed`. Validation always runs
//! before a service touches the store.
//!
//! ```rust,ignore
//! Validator::new()
//!     .text("name", dto.name.as_deref(), &[Rule::Required])
//!     .text("email", dto.email.as_deref(), &[Rule::Required, Rule::Email])
//!     .number("salary", dto.salary, &[Rule::NonNegative])
//!     .finish()?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::server::error::AppError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Rule applied to one field.
///
/// `Required` fails on an absent or blank value. Every other rule only checks values that
/// are present, so patch payloads can reuse the same rule sets.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required,
    /// Present values must not be blank.
    NotBlank,
    Email,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    Date,
    NonNegative,
    OneOf(&'static [&'static str]),
}

/// Accumulates field errors across a payload.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a string field. Stops at the first failing rule for the field.
    pub fn text(mut self, field: &str, value: Option<&str>, rules: &[Rule]) -> Self {
        for rule in rules {
            if let Some(message) = check_text(field, value, *rule) {
                self.errors.push(FieldError::new(field, message));
                break;
            }
        }
        self
    }

    /// Checks a numeric field. Stops at the first failing rule for the field.
    pub fn number(mut self, field: &str, value: Option<f64>, rules: &[Rule]) -> Self {
        for rule in rules {
            if let Some(message) = check_number(field, value, *rule) {
                self.errors.push(FieldError::new(field, message));
                break;
            }
        }
        self
    }

    /// # Returns
    /// - `Ok(())` - No rule failed
    /// - `Err(AppError::ValidationFailed)` - One entry per failing field
    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationFailed(self.errors))
        }
    }
}

fn check_text(field: &str, value: Option<&str>, rule: Rule) -> Option<String> {
    match (rule, value) {
        (Rule::Required, None) => Some(format!("{} is required", field)),
        (Rule::Required | Rule::NotBlank, Some(v)) if v.trim().is_empty() => {
            Some(format!("{} is required", field))
        }
        (Rule::Email, Some(v)) if !EMAIL_PATTERN.is_match(v.trim()) => {
            Some(format!("{} must be a valid email address", field))
        }
        (Rule::Date, Some(v)) if parse_date(v).is_none() => {
            Some(format!("{} must be a date (YYYY-MM-DD or RFC 3339)", field))
        }
        (Rule::OneOf(allowed), Some(v)) if !allowed.contains(&v) => Some(format!(
            "{} must be one of: {}",
            field,
            allowed.join(", ")
        )),
        _ => None,
    }
}

fn check_number(field: &str, value: Option<f64>, rule: Rule) -> Option<String> {
    match (rule, value) {
        (Rule::Required, None) => Some(format!("{} is required", field)),
        (_, Some(v)) if !v.is_finite() => Some(format!("{} must be a number", field)),
        (Rule::NonNegative, Some(v)) if v < 0.0 => Some(format!("{} must not be negative", field)),
        _ => None,
    }
}

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (taken as midnight UTC).
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
