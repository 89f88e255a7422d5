use crate::error::ReviewDeskError;

/// Longest review text accepted for analysis, in characters.
pub const MAX_REVIEW_LENGTH: usize = 5000;

/// Shortest and longest accepted language tag (e.g. `en`, `pt-br`).
pub const MIN_LANGUAGE_LENGTH: usize = 2;
pub const MAX_LANGUAGE_LENGTH: usize = 8;

/// Strip ASCII control characters other than newline and tab, trim, and
/// enforce a character-count limit.
pub fn validate_review_text(input: &str) -> Result<String, ReviewDeskError> {
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(ReviewDeskError::InvalidInput(
            "review text is empty".to_string(),
        ));
    }
    let len = sanitized.chars().count();
    if len > MAX_REVIEW_LENGTH {
        return Err(ReviewDeskError::InvalidInput(format!(
            "review text is {} characters; maximum is {}",
            len, MAX_REVIEW_LENGTH
        )));
    }
    Ok(sanitized)
}

/// Validate an optional language tag. Blank input means "let the backend
/// detect it" and yields `None`; anything else is normalized to lowercase.
pub fn validate_language(input: Option<&str>) -> Result<Option<String>, ReviewDeskError> {
    let trimmed = match input.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(t) => t,
    };
    let valid_chars = trimmed.chars().all(|c| c.is_ascii_alphabetic() || c == '-');
    if !valid_chars || !(MIN_LANGUAGE_LENGTH..=MAX_LANGUAGE_LENGTH).contains(&trimmed.len()) {
        return Err(ReviewDeskError::InvalidInput(format!(
            "invalid language '{}'. Expected {}-{} letters or '-' (e.g., en, pt-br)",
            trimmed, MIN_LANGUAGE_LENGTH, MAX_LANGUAGE_LENGTH
        )));
    }
    Ok(Some(trimmed.to_ascii_lowercase()))
}

/// Validate a review ID before it is interpolated into a URL path.
pub fn validate_review_id(input: &str) -> Result<&str, ReviewDeskError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ReviewDeskError::InvalidInput(
            "review ID is empty".to_string(),
        ));
    }
    if trimmed.contains('/') || trimmed.chars().any(char::is_whitespace) {
        return Err(ReviewDeskError::InvalidInput(format!(
            "invalid review ID '{}'",
            input
        )));
    }
    Ok(trimmed)
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: u64) -> Result<u64, ReviewDeskError> {
    if page < 1 {
        return Err(ReviewDeskError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Offset of the first item on 1-based `page` for a given page size.
pub fn page_to_offset(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit)
}
