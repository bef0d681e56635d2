//! Movie field rules and validation messages.

use chrono::NaiveDate;
use validator::ValidationError;

/// Maximum length of a movie title (characters).
pub const MAX_TITLE_LENGTH: u64 = 255;

/// Shortest accepted running time, in minutes.
pub const MIN_DURATION: i64 = 1;

/// Wire format for `release_date`.
pub const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

pub const MSG_BLANK: &str = "This field may not be blank.";
pub const MSG_TITLE_TOO_LONG: &str = "Ensure this field has no more than 255 characters.";
pub const MSG_DURATION_TOO_SMALL: &str = "Ensure this value is greater than or equal to 1.";
pub const MSG_DATE_FORMAT: &str =
    "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";

/// Trim a title and reject it when nothing is left.
pub fn clean_title(raw: &str) -> Result<String, &'static str> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(MSG_BLANK);
    }
    Ok(title.to_string())
}

/// `validator` hook: the title fits the column once trimmed.
pub fn validate_title_length(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().chars().count() as u64 > MAX_TITLE_LENGTH {
        return Err(ValidationError::new("length").with_message(MSG_TITLE_TOO_LONG.into()));
    }
    Ok(())
}

/// Reject running times below [`MIN_DURATION`].
pub fn check_duration(duration: i32) -> Result<i32, &'static str> {
    if i64::from(duration) < MIN_DURATION {
        return Err(MSG_DURATION_TOO_SMALL);
    }
    Ok(duration)
}

/// Parse a `YYYY-MM-DD` release date.
pub fn parse_release_date(raw: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(raw.trim(), RELEASE_DATE_FORMAT).map_err(|_| MSG_DATE_FORMAT)
}

/// Message for an `age_rating` reference that does not resolve.
pub fn unknown_age_rating_message(name: &str) -> String {
    format!("Invalid pk \"{name}\" - object does not exist.")
}
