use validator::ValidationErrors;

/// First human-readable message out of a failed `validate()`.
pub fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    for (field, errors) in fields {
        if let Some(error) = errors.first() {
            return match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid.", field),
            };
        }
    }

    "Request is invalid.".to_string()
}
