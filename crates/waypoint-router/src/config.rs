//! Router configuration

use crate::tokenizer::SeparatorTokenizer;

/// Router configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    /// Separator used by the default tokenizer
    pub separator: char,
    /// Leading character that marks a wildcard segment in patterns
    pub wildcard_marker: char,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            separator: '/',
            wildcard_marker: ':',
        }
    }
}

impl RouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn wildcard_marker(mut self, marker: char) -> Self {
        self.wildcard_marker = marker;
        self
    }

    /// The default tokenizer for this configuration
    pub fn tokenizer(&self) -> SeparatorTokenizer {
        SeparatorTokenizer::new(self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tokenizer;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::new();
        assert_eq!(config.separator, '/');
        assert_eq!(config.wildcard_marker, ':');
    }

    #[test]
    fn test_builder() {
        let config = RouterConfig::new().separator(' ').wildcard_marker('<');
        assert_eq!(config.separator, ' ');
        assert_eq!(config.wildcard_marker, '<');
        assert_eq!(config.tokenizer().tokenize("run  <task>"), vec!["run", "<task>"]);
    }
}
