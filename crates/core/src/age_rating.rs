//! Age rating field rules and validation messages.

use validator::ValidationError;

/// Maximum length of an age rating name, which doubles as its primary key.
pub const MAX_NAME_LENGTH: u64 = 10;

pub const MSG_NAME_TOO_LONG: &str = "Ensure this field has no more than 10 characters.";
pub const MSG_DUPLICATE_NAME: &str = "age rating with this name already exists.";
pub const MSG_NAME_IMMUTABLE: &str = "The name of an existing age rating cannot be changed.";

/// Trim a rating name and reject it when nothing is left.
pub fn clean_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(crate::movie::MSG_BLANK);
    }
    Ok(name.to_string())
}

/// `validator` hook: the name fits the key column once trimmed.
pub fn validate_name_length(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().chars().count() as u64 > MAX_NAME_LENGTH {
        return Err(ValidationError::new("length").with_message(MSG_NAME_TOO_LONG.into()));
    }
    Ok(())
}

/// Message returned when deleting a rating that movies still reference.
pub fn still_referenced_message(name: &str, movie_count: i64) -> String {
    format!(
        "Cannot delete age rating '{name}': it is referenced by {movie_count} movie(s)"
    )
}
