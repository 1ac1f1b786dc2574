//! Request body validation on top of `validator` derives.

use restaurant_core::error::CoreError;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::{AppError, AppResult};

/// Run `validator` rules on a request body.
///
/// The first failing field (alphabetically, for stable output) becomes a
/// 400 `VALIDATION_ERROR` carrying that rule's message. Nested structs and
/// lists are searched the same way, lowest list index first.
pub fn validate_body<T: Validate>(input: &T) -> AppResult<()> {
    input.validate().map_err(|errors| {
        let message =
            first_message(&errors).unwrap_or_else(|| "Invalid request body".to_string());
        AppError::Core(CoreError::Validation(message))
    })
}

fn first_message(errors: &ValidationErrors) -> Option<String> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields.into_iter().find_map(|(field, kind)| match kind {
        ValidationErrorsKind::Field(errs) => errs.first().map(|e| match &e.message {
            Some(msg) => msg.to_string(),
            None => format!("Invalid `{field}`"),
        }),
        ValidationErrorsKind::Struct(inner) => first_message(inner),
        ValidationErrorsKind::List(items) => items.values().find_map(|inner| first_message(inner)),
    })
}
