//! Device token value object

use std::fmt;

/// An opaque device token issued by the platform notification service.
///
/// The OS commonly supplies the token as raw bytes; [`DeviceToken::from_raw`]
/// converts those to the fixed-width lowercase hexadecimal form the backend
/// expects. The SDK never inspects the token's contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceToken(String);

impl DeviceToken {
    /// Create a token from the raw bytes delivered by the OS callback.
    pub fn from_raw(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the token is empty. Empty tokens are treated as absent.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DeviceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DeviceToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for DeviceToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_bytes_convert_to_lowercase_hex() {
        let token = DeviceToken::from_raw(&[0x0A, 0xBC, 0x01]);
        assert_eq!(token.as_str(), "0abc01");
    }

    #[test]
    fn raw_conversion_is_fixed_width() {
        let token = DeviceToken::from_raw(&[0x00, 0x01, 0xFF]);
        assert_eq!(token.as_str(), "0001ff");
    }

    #[test]
    fn empty_token_is_empty() {
        assert!(DeviceToken::from("").is_empty());
        assert!(!DeviceToken::from("abc").is_empty());
    }
}
