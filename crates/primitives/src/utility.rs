use validator::ValidationError;

const MAX_LEN: usize = 64;

/// Item ids travel to the gateway as correlation tokens, so keep them short
/// and free of characters PayPal rejects in `reference_id`.
pub fn validate_item_id(item_id: &str) -> Result<(), ValidationError> {
    let trimmed = item_id.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::new("item_id_required"));
    }

    if trimmed.len() > MAX_LEN {
        let mut err = ValidationError::new("item_id_too_long");
        err.add_param("max_length".into(), &MAX_LEN);
        return Err(err);
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::new("item_id_invalid_character"));
    }

    Ok(())
}
