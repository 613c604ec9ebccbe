//! Client-side form validation
//!
//! Mirrors the declarative validators of the web forms: required, minimum
//! numeric value and minimum string length, plus the register-form checks.

use crate::error::{Result, ViewError};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    Min(i64),
    MinLength(usize),
    Email,
    Matches(&'static str),
}

/// One failed validator on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: Rule,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            Rule::Required => write!(f, "{} is required", self.field),
            Rule::Min(min) => write!(f, "{} must be at least {}", self.field, min),
            Rule::MinLength(len) => write!(f, "{} must be at least {} characters", self.field, len),
            Rule::Email => write!(f, "{} must be a valid email address", self.field),
            Rule::Matches(other) => write!(f, "{} must match {}", self.field, other),
        }
    }
}

/// Collects field errors; `finish` turns them into a blocked submission.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(mut self, field: &'static str, rule: Rule) -> Self {
        self.errors.push(FieldError { field, rule });
        self
    }

    pub fn required(self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.fail(field, Rule::Required)
        } else {
            self
        }
    }

    pub fn required_some<T>(self, field: &'static str, value: Option<&T>) -> Self {
        if value.is_none() {
            self.fail(field, Rule::Required)
        } else {
            self
        }
    }

    /// Absent values are left to `required_some`.
    pub fn min(self, field: &'static str, value: Option<i64>, min: i64) -> Self {
        match value {
            Some(v) if v < min => self.fail(field, Rule::Min(min)),
            _ => self,
        }
    }

    /// Empty values are left to `required`.
    pub fn min_length(self, field: &'static str, value: &str, len: usize) -> Self {
        let count = value.trim().chars().count();
        if count > 0 && count < len {
            self.fail(field, Rule::MinLength(len))
        } else {
            self
        }
    }

    pub fn email(self, field: &'static str, value: &str) -> Self {
        if !value.is_empty() && !value.contains('@') {
            self.fail(field, Rule::Email)
        } else {
            self
        }
    }

    pub fn matches(self, field: &'static str, value: &str, other_field: &'static str, other: &str) -> Self {
        if value != other {
            self.fail(field, Rule::Matches(other_field))
        } else {
            self
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn finish(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ViewError::InvalidForm(self.errors))
        }
    }
}

/// Block submission while a related request is in flight.
pub fn ensure_idle(loading: bool) -> Result<()> {
    if loading {
        Err(ViewError::Busy)
    } else {
        Ok(())
    }
}
