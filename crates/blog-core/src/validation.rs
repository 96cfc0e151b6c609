//! Input validation - the gate between client input and the repository.
//!
//! Nothing that fails here ever reaches storage.

use chrono::Utc;
use validator::{Validate, ValidationErrors};

use crate::domain::{CreatePost, NewPost, PostUpdate};
use crate::error::DomainError;

/// Validate a creation request and resolve its timestamp.
///
/// A missing `created_at` is set to the current instant (UTC).
pub fn validate_create(input: CreatePost) -> Result<NewPost, DomainError> {
    input.validate().map_err(into_domain_error)?;

    Ok(NewPost {
        title: input.title,
        content: input.content,
        author: input.author,
        created_at: input.created_at.unwrap_or_else(Utc::now),
    })
}

/// Validate a partial update. Absent fields are never errors.
pub fn validate_update(input: PostUpdate) -> Result<PostUpdate, DomainError> {
    input.validate().map_err(into_domain_error)?;
    Ok(input)
}

/// Flatten validator output into one message, `field: constraint` per entry,
/// sorted by field name.
fn into_domain_error(errors: ValidationErrors) -> DomainError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let detail = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, detail)
            })
        })
        .collect();
    messages.sort();

    DomainError::Validation(messages.join("; "))
}
