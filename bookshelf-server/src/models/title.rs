//! Title prefix for catalog search

use super::ValidationError;

/// Maximum length for a search prefix (matches the `title` column width)
const MAX_PREFIX_LEN: usize = 256;

/// Validated title prefix.
///
/// An empty prefix is allowed and matches every title. The prefix is
/// matched literally: LIKE wildcards typed by the user do not widen it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitlePrefix(String);

impl TitlePrefix {
    /// Build a prefix from the raw `q` parameter.
    ///
    /// # Example
    /// ```
    /// use bookshelf_server::models::TitlePrefix;
    ///
    /// assert!(TitlePrefix::new(Some("Harry")).is_ok());
    /// assert!(TitlePrefix::new(Some("")).is_ok());
    /// assert!(TitlePrefix::new(None).is_err());
    /// ```
    pub fn new(raw: Option<&str>) -> Result<Self, ValidationError> {
        let raw = raw.ok_or(ValidationError::Missing { field: "q" })?;

        if raw.chars().count() > MAX_PREFIX_LEN {
            return Err(ValidationError::TooLong {
                field: "q",
                max: MAX_PREFIX_LEN,
            });
        }

        Ok(Self(raw.to_owned()))
    }

    /// The prefix as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// LIKE pattern `<escaped prefix>%`.
    ///
    /// Backslash is MySQL's default LIKE escape character.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 1);
        for c in self.0.chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}

impl AsRef<str> for TitlePrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
