//! ClassList
//!
//! Ordered, duplicate-free class tokens of an element.

/// Class token list (`class` attribute)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a space-separated attribute value
    pub fn parse(s: &str) -> Self {
        let mut list = Self::new();
        for token in s.split_whitespace() {
            list.add(token);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Append `token` unless present; empty tokens are ignored
    pub fn add(&mut self, token: &str) -> bool {
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    /// Replace all tokens, dropping empties and duplicates
    pub fn set(&mut self, tokens: Vec<String>) {
        self.tokens.clear();
        for token in tokens {
            if !token.is_empty() && !self.contains(&token) {
                self.tokens.push(token);
            }
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.tokens.clone()
    }

    /// Attribute value
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
