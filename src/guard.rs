//! Client-side password confirmation check for the registration form

use crate::config::FormsConfig;
use crate::types::FormPayload;

/// Whether the password and its confirmation agree. A missing field reads as
/// an empty string.
pub fn passwords_match(payload: &FormPayload, config: &FormsConfig) -> bool {
    let password = payload.get(&config.password_field).unwrap_or_default();
    let confirmation = payload
        .get(&config.password_confirm_field)
        .unwrap_or_default();
    password == confirmation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(password: &str, confirmation: &str) -> FormPayload {
        FormPayload::from_iter([
            ("nom", "Doe"),
            ("email", "jane@example.com"),
            ("mdp", password),
            ("mdp_confirm", confirmation),
        ])
    }

    #[test]
    fn test_matching_passwords() {
        let config = FormsConfig::default();
        assert!(passwords_match(&registration("s3cret", "s3cret"), &config));
    }

    #[test]
    fn test_mismatched_passwords() {
        let config = FormsConfig::default();
        assert!(!passwords_match(&registration("abc", "xyz"), &config));
        // Comparison is exact
        assert!(!passwords_match(&registration("abc", "abc "), &config));
        assert!(!passwords_match(&registration("abc", "ABC"), &config));
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        let config = FormsConfig::default();
        assert!(passwords_match(&FormPayload::new(), &config));
        assert!(!passwords_match(
            &FormPayload::from_iter([("mdp", "abc")]),
            &config
        ));
    }

    #[test]
    fn test_field_names_follow_config() {
        let config = FormsConfig {
            password_field: "password1".to_string(),
            password_confirm_field: "password2".to_string(),
            ..FormsConfig::default()
        };
        let payload = FormPayload::from_iter([
            ("password1", "same"),
            ("password2", "same"),
            ("mdp", "ignored"),
        ]);

        assert!(passwords_match(&payload, &config));
    }
}
