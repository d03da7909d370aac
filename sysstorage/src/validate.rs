//! Input checks run before any backend I/O
//!
//! Lengths are UTF-8 byte lengths. Each check returns the first violated
//! constraint.

/// Maximum key length in bytes
pub const MAX_KEY_LENGTH: usize = 32;

/// Maximum value (and default value) length in bytes
pub const MAX_VALUE_LENGTH: usize = 128;

/// A violated input constraint
///
/// The discriminants are the stable error codes reported to `fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ValidationError {
    KeyEmpty = -1006,
    KeyTooLong = -1016,
    ValueTooLong = -1017,
    DefaultTooLong = -1018,
}

impl ValidationError {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::KeyEmpty => "The key string is null or empty.",
            Self::KeyTooLong => "The key string length should shorter than 32.",
            Self::ValueTooLong => "The value string length should shorter than 128.",
            Self::DefaultTooLong => "The default string length should shorter than 128.",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Checks for `set`: key non-empty, key length, value length
///
/// # Errors
///
/// Returns the first violated constraint.
pub fn check_set(key: &str, value: &str) -> Result<(), ValidationError> {
    check_key(key)?;
    if key.len() > MAX_KEY_LENGTH {
        return Err(ValidationError::KeyTooLong);
    }
    if value.len() > MAX_VALUE_LENGTH {
        return Err(ValidationError::ValueTooLong);
    }
    Ok(())
}

/// Checks for `get`: only the default length
///
/// The key is not checked, an empty key reads as "not found".
///
/// # Errors
///
/// Returns `DefaultTooLong` if the default exceeds the value limit.
pub fn check_get(default: Option<&str>) -> Result<(), ValidationError> {
    match default {
        Some(default) if default.len() > MAX_VALUE_LENGTH => Err(ValidationError::DefaultTooLong),
        _ => Ok(()),
    }
}

/// Checks for `delete`: key non-empty
///
/// # Errors
///
/// Returns `KeyEmpty` for an empty key.
pub fn check_delete(key: &str) -> Result<(), ValidationError> {
    check_key(key)
}

fn check_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::KeyEmpty);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_boundaries() {
        assert_eq!(check_set(&"k".repeat(32), &"v".repeat(128)), Ok(()));
        assert_eq!(check_set("k", ""), Ok(()));
        assert_eq!(check_set(&"k".repeat(33), "v"), Err(ValidationError::KeyTooLong));
        assert_eq!(check_set("k", &"v".repeat(129)), Err(ValidationError::ValueTooLong));
    }

    #[test]
    fn test_set_precedence() {
        // Empty key wins over an oversized value
        assert_eq!(check_set("", &"v".repeat(129)), Err(ValidationError::KeyEmpty));
        // Oversized key wins over an oversized value
        assert_eq!(
            check_set(&"k".repeat(33), &"v".repeat(129)),
            Err(ValidationError::KeyTooLong)
        );
    }

    #[test]
    fn test_lengths_are_bytes() {
        // 17 chars, 34 bytes
        assert_eq!(check_set(&"é".repeat(17), "v"), Err(ValidationError::KeyTooLong));
        assert_eq!(check_set(&"é".repeat(16), "v"), Ok(()));
    }

    #[test]
    fn test_get_only_checks_default() {
        assert_eq!(check_get(None), Ok(()));
        assert_eq!(check_get(Some("")), Ok(()));
        assert_eq!(check_get(Some(&"d".repeat(128))), Ok(()));
        assert_eq!(check_get(Some(&"d".repeat(129))), Err(ValidationError::DefaultTooLong));
    }

    #[test]
    fn test_delete_only_checks_emptiness() {
        assert_eq!(check_delete(""), Err(ValidationError::KeyEmpty));
        assert_eq!(check_delete(&"k".repeat(40)), Ok(()));
    }

    #[test]
    fn test_codes_and_messages() {
        assert_eq!(ValidationError::KeyEmpty.code(), -1006);
        assert_eq!(ValidationError::KeyTooLong.code(), -1016);
        assert_eq!(ValidationError::ValueTooLong.code(), -1017);
        assert_eq!(ValidationError::DefaultTooLong.code(), -1018);
        assert_eq!(
            ValidationError::DefaultTooLong.to_string(),
            "The default string length should shorter than 128."
        );
    }
}
