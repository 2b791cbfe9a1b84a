use crate::error::PriorFormsError;

pub const MAX_FORM_NAME_LENGTH: usize = 100;

/// Validate a year bound: trim, then parse as an integer.
pub fn validate_year(input: &str) -> Result<i32, PriorFormsError> {
    input.trim().parse::<i32>().map_err(|_| {
        PriorFormsError::InvalidInput(format!(
            "the start and end years must be numbers eg 1999, 2000, 2020 (got '{}')",
            input.trim()
        ))
    })
}

/// Validate an inclusive year range: both bounds must parse.
///
/// An inverted range is allowed and simply selects no years.
pub fn validate_year_range(start: &str, end: &str) -> Result<(i32, i32), PriorFormsError> {
    Ok((validate_year(start)?, validate_year(end)?))
}

/// Validate one form name: trim, reject empty input, enforce a length limit
/// on the trimmed name.
pub fn validate_form_name(input: &str) -> Result<String, PriorFormsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PriorFormsError::InvalidInput(
            "form name is empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_FORM_NAME_LENGTH {
        return Err(PriorFormsError::InvalidInput(format!(
            "form name exceeds maximum length of {} bytes",
            MAX_FORM_NAME_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

/// Split a comma-separated list of form names, validating each and dropping
/// empty fragments.
pub fn parse_form_names(input: &str) -> Result<Vec<String>, PriorFormsError> {
    let names: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(validate_form_name)
        .collect::<Result<_, _>>()?;

    if names.is_empty() {
        return Err(PriorFormsError::InvalidInput(
            "expected at least one form name, e.g. 'Form W-2, Form 1095-C'".to_string(),
        ));
    }
    Ok(names)
}
