use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating username fields
    /// Must start with letter or underscore and contain only alphanumeric characters and underscores
    /// - Valid: "ivan_petrov", "user123", "_admin"
    /// - Invalid: "123user", "-user", "user-name", "user name"
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();

    /// Regex for contact phone fields: digits with optional leading +,
    /// spaces, parentheses and dashes allowed as separators
    /// - Valid: "+7 (903) 123-45-67", "84951234567"
    /// - Invalid: "phone", "+7_903"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 ()\-]{2,18}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_regex_valid() {
        assert!(USERNAME_REGEX.is_match("ivan_petrov"));
        assert!(USERNAME_REGEX.is_match("user123"));
        assert!(USERNAME_REGEX.is_match("_admin"));
        assert!(USERNAME_REGEX.is_match("IvanPetrov"));
    }

    #[test]
    fn test_username_regex_invalid() {
        assert!(!USERNAME_REGEX.is_match("123user")); // starts with digit
        assert!(!USERNAME_REGEX.is_match("-user")); // starts with hyphen
        assert!(!USERNAME_REGEX.is_match("user-name")); // hyphen
        assert!(!USERNAME_REGEX.is_match("user name")); // space
        assert!(!USERNAME_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+7 (903) 123-45-67"));
        assert!(PHONE_REGEX.is_match("84951234567"));
        assert!(PHONE_REGEX.is_match("112"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("phone"));
        assert!(!PHONE_REGEX.is_match("+7_903"));
        assert!(!PHONE_REGEX.is_match(""));
    }
}
