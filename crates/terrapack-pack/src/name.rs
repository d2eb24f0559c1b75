//! Texture name validation.
//!
//! The texture name is used verbatim in output filenames, archive entry
//! paths, and descriptor fields, so it must be filesystem-safe on every
//! platform the pack might be installed on.

use crate::error::PackError;

/// Checks whether a texture name is safe to use.
pub fn is_valid_texture_name(name: &str) -> bool {
    validate_texture_name(name).is_ok()
}

/// Validate a texture name, rejecting anything that could escape the pack
/// layout or collide with platform path syntax.
pub fn validate_texture_name(name: &str) -> Result<(), PackError> {
    let invalid = |reason: &'static str| PackError::InvalidName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if let Some(c) = name
        .chars()
        .find(|&c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        if c == '/' || c == '\\' {
            return Err(invalid("name cannot contain path separators"));
        }
        return Err(invalid("name contains a character outside [A-Za-z0-9._-]"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_typical_names() {
        for name in ["basalt", "srb_rock", "dem-tile-04", "limestone.v2"] {
            assert!(is_valid_texture_name(name), "{} should be valid", name);
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            validate_texture_name(""),
            Err(PackError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_rejects_traversal_and_separators() {
        for name in ["../basalt", "a/b", "a\\b", "..", "."] {
            assert!(!is_valid_texture_name(name), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_rejects_leading_dot() {
        assert!(!is_valid_texture_name(".hidden"));
    }

    #[test]
    fn test_rejects_odd_characters() {
        for name in ["a b", "a:b", "a*b", "ore!", "c++"] {
            assert!(!is_valid_texture_name(name), "{} should be rejected", name);
        }
    }
}
