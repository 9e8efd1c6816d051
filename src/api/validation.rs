use super::ApiError;

/// Unwraps a field the request must carry.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::validation(format!("Missing required field: {}", field)))
}

/// Ids in request bodies must be positive; zero or negative can never resolve.
pub fn validate_reference_id(id: i64, field: &str) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid {}: {}. ID must be a positive integer",
            field, id
        )));
    }

    i32::try_from(id).map_err(|_| ApiError::validation(format!("Invalid {}: {}", field, id)))
}

pub fn validate_episode_number(number: i64) -> Result<i32, ApiError> {
    i32::try_from(number).map_err(|_| {
        ApiError::validation(format!(
            "Invalid episode number: {}. Number must fit in a 32-bit integer",
            number
        ))
    })
}

pub fn validate_name(name: &str, field: &str) -> Result<(), ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::validation(format!("{} cannot be empty", field)));
    }

    if name.chars().count() > 100 {
        return Err(ApiError::validation(format!(
            "{} must be 100 characters or less",
            field
        )));
    }

    Ok(())
}

pub fn validate_description(description: Option<&str>) -> Result<(), ApiError> {
    if description.is_some_and(|d| d.chars().count() > 255) {
        return Err(ApiError::validation(
            "Description must be 255 characters or less",
        ));
    }
    Ok(())
}
