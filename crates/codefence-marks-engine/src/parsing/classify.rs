use crate::keywords::KeywordConfig;

/// Resolves info strings to configured keywords.
pub struct KeywordClassifier<'a> {
    config: &'a KeywordConfig,
}

impl<'a> KeywordClassifier<'a> {
    pub fn new(config: &'a KeywordConfig) -> Self {
        Self { config }
    }

    /// Returns the keyword matched by `info`, if any.
    ///
    /// Tokens are the whitespace-separated, lower-cased words of `info`, tried
    /// left to right. A token matches a keyword it equals exactly; failing
    /// that, the first keyword in declaration order that it starts with.
    pub fn classify(&self, info: &str) -> Option<&'a str> {
        info.split_whitespace()
            .map(str::to_lowercase)
            .find_map(|token| self.match_token(&token))
    }

    fn match_token(&self, token: &str) -> Option<&'a str> {
        let config = self.config;
        config
            .keywords()
            .find(|k| *k == token)
            .or_else(|| config.keywords().find(|k| token.starts_with(*k)))
    }
}
