//! Argument validation run before a request is sent.

use chrono::{DateTime, Utc};

use crate::error::{ClickUpError, Result};

/// Require an identifier to be non-empty after trimming.
///
/// `.` and `..` are rejected too, as URL normalization would resolve them
/// against the rest of the path.
pub fn require_id(field: &'static str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClickUpError::validation(field, "must not be empty"));
    }
    if is_dot_segment(trimmed) {
        return Err(ClickUpError::validation(field, "must not be a dot segment"));
    }
    Ok(())
}

/// Require every identifier in a slice to pass [`require_id`], and the slice
/// itself to hold at least one.
pub fn require_ids<S: AsRef<str>>(field: &'static str, values: &[S]) -> Result<()> {
    require_non_empty_slice(field, values)?;
    if values.iter().any(|v| v.as_ref().trim().is_empty()) {
        return Err(ClickUpError::validation(field, "must not contain empty ids"));
    }
    if values.iter().any(|v| is_dot_segment(v.as_ref().trim())) {
        return Err(ClickUpError::validation(field, "must not contain dot segments"));
    }
    Ok(())
}

fn is_dot_segment(value: &str) -> bool {
    value == "." || value == ".."
}

/// Require a text field that was set on a builder.
pub fn require_text(field: &'static str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        Some(_) => Err(ClickUpError::validation(field, "must not be blank")),
        None => Err(ClickUpError::validation(field, "is required")),
    }
}

/// Require a value that was set on a builder.
pub fn require_some<T>(field: &'static str, value: Option<&T>) -> Result<()> {
    if value.is_none() {
        return Err(ClickUpError::validation(field, "is required"));
    }
    Ok(())
}

/// Require a collection to have at least one element.
pub fn require_non_empty_slice<T>(field: &'static str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(ClickUpError::validation(
            field,
            "must contain at least one value",
        ));
    }
    Ok(())
}

/// Reject two options that cannot be combined.
pub fn require_exclusive(a: &'static str, a_set: bool, b: &'static str, b_set: bool) -> Result<()> {
    if a_set && b_set {
        return Err(ClickUpError::validation(
            a,
            format!("cannot be combined with '{b}'"),
        ));
    }
    Ok(())
}

/// Allow at most one of the named options to be set.
pub fn require_at_most_one(fields: &[(&'static str, bool)]) -> Result<()> {
    let set: Vec<&str> = fields
        .iter()
        .filter(|(_, is_set)| *is_set)
        .map(|(name, _)| *name)
        .collect();
    if set.len() > 1 {
        return Err(ClickUpError::validation(
            fields.iter().find(|(_, s)| *s).map_or("options", |(n, _)| *n),
            format!("only one of {} may be set", set.join(", ")),
        ));
    }
    Ok(())
}

/// Require exactly one of the named options to be set.
pub fn require_exactly_one(fields: &[(&'static str, bool)]) -> Result<()> {
    require_at_most_one(fields)?;
    if !fields.iter().any(|(_, s)| *s) {
        let names: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
        return Err(ClickUpError::validation(
            fields.first().map_or("options", |(n, _)| *n),
            format!("one of {} is required", names.join(", ")),
        ));
    }
    Ok(())
}

/// Require a strictly positive number.
pub fn require_positive(field: &'static str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(ClickUpError::validation(field, "must be greater than zero"));
    }
    Ok(())
}

/// Require `start` to come before `end` when both are present.
pub fn require_ordered(
    field: &'static str,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<()> {
    if let (Some(s), Some(e)) = (start, end) {
        if e <= s {
            return Err(ClickUpError::validation(field, "must be after the start"));
        }
    }
    Ok(())
}
