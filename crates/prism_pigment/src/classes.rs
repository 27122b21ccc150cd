//! Class string composition.

use std::fmt;

/// Ordered, space-separated list of CSS class tokens.
///
/// Empty fragments are skipped, repeated tokens are kept once at their
/// last position so that later fragments win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every token of a fragment.
    pub fn push(&mut self, fragment: &str) -> &mut Self {
        for token in fragment.split_whitespace() {
            self.tokens.retain(|existing| existing != token);
            self.tokens.push(token.to_string());
        }
        self
    }

    /// Append a fragment only when `condition` holds.
    #[inline]
    pub fn push_if(&mut self, condition: bool, fragment: &str) -> &mut Self {
        if condition {
            self.push(fragment);
        }
        self
    }

    /// Builder form of [`ClassList::push`].
    #[inline]
    pub fn with(mut self, fragment: &str) -> Self {
        self.push(fragment);
        self
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for fragment in iter {
            list.push(fragment);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_empty_fragments() {
        let list: ClassList = ["  relative  ", "", "inline-flex\n items-center"]
            .into_iter()
            .collect();
        assert_eq!(list.to_string(), "relative inline-flex items-center");
    }

    #[test]
    fn test_repeated_token_moves_to_end() {
        let list = ClassList::new().with("border p-4").with("border");
        assert_eq!(list.to_string(), "p-4 border");
    }

    #[test]
    fn test_push_if() {
        let mut list = ClassList::new();
        list.push_if(false, "w-full").push_if(true, "opacity-50");
        assert_eq!(list.to_string(), "opacity-50");
        assert!(!list.contains("w-full"));
    }
}
