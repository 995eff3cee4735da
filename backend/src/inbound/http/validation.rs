//! Field-presence validation for inbound HTTP payloads.
//!
//! Every rule is evaluated; when several fail, the error for the last failing
//! rule in declaration order is the one reported.

use crate::domain::Error;

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

/// A "must not be blank" rule for one field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NotBlank {
    field: FieldName,
    message: &'static str,
}

impl NotBlank {
    pub(crate) const fn new(field: FieldName, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// A value counts as blank when it is absent or only whitespace.
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|text| text.trim().is_empty())
}

/// Check each `(rule, value)` pair, reporting the last failure.
pub(crate) fn require_not_blank<'a>(
    checks: impl IntoIterator<Item = (NotBlank, Option<&'a str>)>,
) -> Result<(), Error> {
    let last_failure = checks
        .into_iter()
        .filter(|(_, value)| is_blank(*value))
        .map(|(rule, _)| rule)
        .last();

    match last_failure {
        None => Ok(()),
        Some(rule) => {
            Err(Error::invalid_request(rule.message).with_field(rule.field.as_str()))
        }
    }
}
