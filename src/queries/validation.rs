use std::sync::LazyLock;

use cadastre_api_types::SubmitQueryRequest;
use regex::Regex;

use crate::error::AppError;

static CADASTRE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,7}:[0-9]{1,9}$").expect("static regex is valid")
});

static COORDINATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]{1,3}\.[0-9]+$").expect("static regex is valid"));

pub fn is_valid_cadastre_number(value: &str) -> bool {
    CADASTRE_NUMBER_RE.is_match(value)
}

pub fn is_valid_coordinate(value: &str) -> bool {
    COORDINATE_RE.is_match(value)
}

/// Checks every field of a lookup request; the first offending field is
/// reported.
pub fn validate_query(request: &SubmitQueryRequest) -> Result<(), AppError> {
    if !is_valid_cadastre_number(&request.cadastre_number) {
        return Err(AppError::validation(
            "cadastre_number",
            format!(
                "cadastre_number '{}' must look like NN:NN:NNNNNNN:NNNNNNNNN",
                request.cadastre_number
            ),
        ));
    }

    for (field, value) in [
        ("latitude", &request.latitude),
        ("longitude", &request.longitude),
    ] {
        if !is_valid_coordinate(value) {
            return Err(AppError::validation(
                field,
                format!("{field} '{value}' must be a decimal number such as 55.75"),
            ));
        }
    }

    Ok(())
}
