//! Stored Name Value Object
//!
//! The collision-free filename under which an attachment is persisted,
//! distinct from the user-supplied original filename. Format:
//! `<uuid-v4>_<sanitized-original-name>`, flat namespace.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EmployeeError, EmployeeResult};

/// Maximum length kept from the sanitized original filename
const MAX_ORIGINAL_LENGTH: usize = 100;

/// Stored attachment filename
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoredName(String);

impl StoredName {
    /// Generate a fresh, globally-unique stored name
    ///
    /// A new random UUID per call makes collisions negligible even for
    /// concurrent uploads of the same original filename.
    pub fn generate(original_filename: &str) -> Self {
        Self(format!(
            "{}_{}",
            Uuid::new_v4(),
            sanitize_filename(original_filename)
        ))
    }

    /// Parse an externally supplied stored name (e.g. a URL path segment)
    ///
    /// Rejects anything that could escape the flat content directory.
    pub fn parse(s: &str) -> EmployeeResult<Self> {
        if s.is_empty() || s.len() > 255 {
            return Err(EmployeeError::Validation(
                "Invalid stored name length".to_string(),
            ));
        }
        if s.contains('/') || s.contains('\\') || s.contains("..") || s.starts_with('.') {
            return Err(EmployeeError::Validation(
                "Invalid stored name".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the stored name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to string for database storage
    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for StoredName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for StoredName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Sanitize a user-supplied filename for the flat content directory
///
/// Takes the final path segment, keeps ASCII alphanumerics plus `.`,
/// `-`, `_`, and caps the length. Never returns an empty string.
fn sanitize_filename(original: &str) -> String {
    let last_segment = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);

    let mut sanitized: String = last_segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    sanitized.truncate(MAX_ORIGINAL_LENGTH);

    if sanitized.trim_matches(['_', '.']).is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_keeps_sanitized_original() {
        let name = StoredName::generate("photo.png");
        assert!(name.as_str().ends_with("_photo.png"));
    }

    #[test]
    fn test_generate_is_unique_for_same_input() {
        let a = StoredName::generate("photo.png");
        let b = StoredName::generate("photo.png");
        assert_ne!(a, b);
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\x\\pic.jpg"), "pic.jpg");
        assert_eq!(sanitize_filename("dir/photo.png"), "photo.png");
    }

    #[test]
    fn test_sanitize_replaces_special_characters() {
        assert_eq!(sanitize_filename("my photo (1).png"), "my_photo__1_.png");
        assert_eq!(sanitize_filename("日本語.png"), "____.png");
    }

    #[test]
    fn test_sanitize_never_empty() {
        assert_eq!(sanitize_filename(""), "file");
        assert_eq!(sanitize_filename("///"), "file");
        assert_eq!(sanitize_filename("???"), "file");
    }

    #[test]
    fn test_sanitize_caps_length() {
        let long = "a".repeat(500);
        assert_eq!(sanitize_filename(&long).len(), MAX_ORIGINAL_LENGTH);
    }

    #[test]
    fn test_parse_accepts_generated_names() {
        let name = StoredName::generate("photo.png");
        assert!(StoredName::parse(name.as_str()).is_ok());
    }

    #[test]
    fn test_parse_rejects_traversal() {
        assert!(StoredName::parse("../secret").is_err());
        assert!(StoredName::parse("a/b.png").is_err());
        assert!(StoredName::parse("a\\b.png").is_err());
        assert!(StoredName::parse(".hidden").is_err());
        assert!(StoredName::parse("").is_err());
    }
}
