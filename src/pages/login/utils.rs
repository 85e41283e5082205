/// Local gate before any network call: both fields must be present.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please enter email and password".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_when_either_field_is_empty() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("alice@example.com", "").is_err());
        assert!(validate_credentials("", "").is_err());
        assert!(validate_credentials("   ", "secret").is_err());
    }

    #[test]
    fn accepts_when_both_fields_are_present() {
        assert!(validate_credentials("alice@example.com", "secret").is_ok());
    }
}
