/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be blank")]
    Blank,
}

/// A string type that guarantees at least one non-whitespace character.
///
/// Unlike a trimmed wrapper, the input is kept **verbatim**. Lookup values such as medicine
/// names and composition strings are matched against the store exactly as the caller sent
/// them, so leading or trailing whitespace is significant once the value has passed the
/// blank check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonBlankText(String);

impl NonBlankText {
    /// Creates a new `NonBlankText` from the given input.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonBlankText)` holding the untouched input if it contains a
    /// non-whitespace character, or `Err(TextError::Blank)` otherwise.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let input = input.as_ref();
        if input.trim().is_empty() {
            return Err(TextError::Blank);
        }
        Ok(Self(input.to_owned()))
    }

    /// Builds a `NonBlankText` from an optional value, treating `None` like blank input.
    ///
    /// Query parameters arrive as `Option<String>`; this collapses "missing" and "blank"
    /// into the same rejection.
    pub fn from_optional(input: Option<impl AsRef<str>>) -> Result<Self, TextError> {
        match input {
            Some(value) => Self::new(value),
            None => Err(TextError::Blank),
        }
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonBlankText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns `true` when `value` is absent or holds only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_input_verbatim() {
        let text = NonBlankText::new("  Augmentin 625 ").unwrap();
        assert_eq!(text.as_str(), "  Augmentin 625 ");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(matches!(NonBlankText::new(""), Err(TextError::Blank)));
        assert!(matches!(NonBlankText::new(" \t\n"), Err(TextError::Blank)));
    }

    #[test]
    fn from_optional_rejects_missing() {
        assert!(NonBlankText::from_optional(None::<&str>).is_err());
        assert!(NonBlankText::from_optional(Some("  ")).is_err());
        assert_eq!(
            NonBlankText::from_optional(Some("Crocin")).unwrap().as_str(),
            "Crocin"
        );
    }

    #[test]
    fn is_blank_handles_none() {
        assert!(is_blank(None));
        assert!(is_blank(Some(" ")));
        assert!(!is_blank(Some("x")));
    }
}
