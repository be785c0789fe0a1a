//! Path tokenizers
//!
//! A tokenizer turns a path string into the ordered segment tokens the trie is
//! keyed by. It never interprets the wildcard marker; wildcard detection
//! happens afterwards by inspecting each token's first character.

/// Splits a path into segment tokens
///
/// Implementations must be deterministic. Any `Fn(&str) -> Vec<String>`
/// closure is a tokenizer.
///
/// # Example
/// ```
/// use waypoint_router::{Router, Tokenizer};
///
/// let dotted = |path: &str| path.split('.').map(str::to_string).collect::<Vec<_>>();
/// assert_eq!(dotted.tokenize("a.b"), vec!["a", "b"]);
///
/// let mut router: Router<()> = Router::with_tokenizer(dotted);
/// router.add("db.:table.drop").unwrap();
/// let resolved = router.resolve("db.users.drop").unwrap();
/// assert_eq!(resolved.params.get("table"), Some("users"));
/// ```
pub trait Tokenizer {
    /// Split `path` into segment tokens
    fn tokenize(&self, path: &str) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, path: &str) -> Vec<String> {
        self(path)
    }
}

/// Default tokenizer: splits on a single separator character
///
/// Runs of consecutive separators count as one delimiter, so `//` behaves
/// like `/`. A leading separator yields an empty first token and a trailing
/// separator yields an empty last token:
///
/// ```
/// use waypoint_router::{SeparatorTokenizer, Tokenizer};
///
/// let t = SeparatorTokenizer::default();
/// assert_eq!(t.tokenize("/foo//baz"), vec!["", "foo", "baz"]);
/// assert_eq!(t.tokenize("1/2/"), vec!["1", "2", ""]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorTokenizer {
    separator: char,
}

impl SeparatorTokenizer {
    /// Create a tokenizer splitting on `separator`
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    /// The separator character
    pub fn separator(&self) -> char {
        self.separator
    }
}

impl Default for SeparatorTokenizer {
    fn default() -> Self {
        Self::new('/')
    }
}

impl Tokenizer for SeparatorTokenizer {
    fn tokenize(&self, path: &str) -> Vec<String> {
        let pieces: Vec<&str> = path.split(self.separator).collect();
        let last = pieces.len() - 1;

        // Interior empty pieces come from repeated separators
        pieces
            .into_iter()
            .enumerate()
            .filter(|(i, piece)| !piece.is_empty() || *i == 0 || *i == last)
            .map(|(_, piece)| piece.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(path: &str) -> Vec<String> {
        SeparatorTokenizer::default().tokenize(path)
    }

    #[test]
    fn test_leading_separator() {
        assert_eq!(split("/1/2/3/4"), vec!["", "1", "2", "3", "4"]);
        assert_eq!(split("1/2/3/4"), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_trailing_separator() {
        assert_eq!(split("1/2/3/4/"), vec!["1", "2", "3", "4", ""]);
    }

    #[test]
    fn test_collapses_runs() {
        assert_eq!(split("/foo//baz"), vec!["", "foo", "baz"]);
        assert_eq!(split("///a///"), vec!["", "a", ""]);
        assert_eq!(split("//"), vec!["", ""]);
    }

    #[test]
    fn test_empty_and_root() {
        assert_eq!(split(""), vec![""]);
        assert_eq!(split("/"), vec!["", ""]);
    }

    #[test]
    fn test_marker_is_not_special() {
        assert_eq!(split("/foo/:bar"), vec!["", "foo", ":bar"]);
    }

    #[test]
    fn test_custom_separator() {
        let t = SeparatorTokenizer::new('.');
        assert_eq!(t.tokenize("a..b.c"), vec!["a", "b", "c"]);
        assert_eq!(t.separator(), '.');
    }

    #[test]
    fn test_closure_tokenizer() {
        let words = |path: &str| path.split_whitespace().map(str::to_string).collect::<Vec<_>>();
        assert_eq!(words.tokenize("git  remote add"), vec!["git", "remote", "add"]);
    }
}
