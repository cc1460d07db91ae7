/// Order-preserving set of lowercase match tokens.
///
/// Token order matters to the consuming matcher (earlier tokens take
/// precedence on equal length), so duplicates are dropped on insert
/// rather than by sorting afterwards.
#[derive(Debug, Default)]
pub struct TokenSet {
    tokens: Vec<String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, lowercasing it. A token already present is ignored;
    /// first occurrence wins.
    pub fn push(&mut self, token: impl Into<String>) {
        let token = token.into().to_lowercase();
        if token.is_empty() {
            return;
        }
        if !self.tokens.iter().any(|t| *t == token) {
            self.tokens.push(token);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl Extend<String> for TokenSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for token in iter {
            self.push(token);
        }
    }
}
