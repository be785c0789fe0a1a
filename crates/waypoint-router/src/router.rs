//! The routing trie

use crate::config::RouterConfig;
use crate::data::MatchData;
use crate::error::{Error, Result};
use crate::node::{Key, Node, Terminal};
use crate::params::{Params, Resolved};
use crate::search;
use crate::tokenizer::Tokenizer;
use smallvec::SmallVec;
use std::fmt::{self, Write};
use tracing::{debug, trace};

/// Segment trie router
///
/// Patterns are split into segments by the router's tokenizer. A segment
/// starting with the wildcard marker (`:` by default) matches any single
/// segment and captures it under the name that follows the marker.
///
/// When several patterns fit a path, the one with the most literal segment
/// matches wins; among equally specific patterns the earliest registered wins.
///
/// ## Example
/// ```
/// use waypoint_router::Router;
///
/// let mut router = Router::new();
/// router.add_data("/foo/:bar/baz", 1).unwrap();
/// router.add_data("/foo/wolf/baz", 2).unwrap();
///
/// let m = router.resolve("/foo/wolf/baz").unwrap();
/// assert_eq!(m.route, "/foo/wolf/baz");
/// assert_eq!(m.data, Some(&2));
///
/// let m = router.resolve("/foo/car/baz").unwrap();
/// assert_eq!(m.route, "/foo/:bar/baz");
/// assert_eq!(m.params.get("bar"), Some("car"));
/// ```
pub struct Router<T> {
    root: Node<T>,
    tokenizer: Box<dyn Tokenizer + Send + Sync>,
    wildcard_marker: char,
    /// Bumped on every `insert` call; source of registration order
    route_count: u64,
    registered: usize,
}

impl<T> Router<T> {
    /// Create a router with the default configuration
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Create a router using the configured separator and wildcard marker
    pub fn with_config(config: RouterConfig) -> Self {
        Self::with_config_and_tokenizer(config, config.tokenizer())
    }

    /// Create a router with a custom tokenizer and the default wildcard marker
    pub fn with_tokenizer<K>(tokenizer: K) -> Self
    where
        K: Tokenizer + Send + Sync + 'static,
    {
        Self::with_config_and_tokenizer(RouterConfig::default(), tokenizer)
    }

    /// Create a router with a custom tokenizer; `config.separator` is unused
    pub fn with_config_and_tokenizer<K>(config: RouterConfig, tokenizer: K) -> Self
    where
        K: Tokenizer + Send + Sync + 'static,
    {
        Self {
            root: Node::default(),
            tokenizer: Box::new(tokenizer),
            wildcard_marker: config.wildcard_marker,
            route_count: 0,
            registered: 0,
        }
    }

    /// Register a pattern without data
    pub fn add(&mut self, pattern: &str) -> Result<()> {
        self.insert(pattern, MatchData::Empty)
    }

    /// Register a pattern carrying `data`
    pub fn add_data(&mut self, pattern: &str, data: T) -> Result<()> {
        self.insert(pattern, MatchData::Value(data))
    }

    /// Register a pattern whose callback runs on every successful resolution
    ///
    /// ```
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    /// use waypoint_router::Router;
    ///
    /// let hits = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&hits);
    ///
    /// let mut router: Router<()> = Router::new();
    /// router
    ///     .add_callback("/foo/bin", move |route, _params| {
    ///         assert_eq!(route, "/foo/bin");
    ///         counter.fetch_add(1, Ordering::SeqCst);
    ///     })
    ///     .unwrap();
    ///
    /// let m = router.resolve("/foo/bin").unwrap();
    /// assert!(m.data.is_none());
    /// assert_eq!(hits.load(Ordering::SeqCst), 1);
    /// ```
    pub fn add_callback<F>(&mut self, pattern: &str, callback: F) -> Result<()>
    where
        F: Fn(&str, &Params) + Send + Sync + 'static,
    {
        self.insert(pattern, MatchData::callback(callback))
    }

    /// Register a pattern
    ///
    /// Fails with [`Error::RouteConflict`] if another pattern already ends at
    /// the same node (for example `/a/:x` and `/a/:y`). Intermediate nodes
    /// created before the conflict was found are kept.
    pub fn insert(&mut self, pattern: &str, data: MatchData<T>) -> Result<()> {
        let tokens = self.tokenizer.tokenize(pattern);

        // Counted before the conflict check, so a failed insert consumes an order
        self.route_count += 1;
        let order = self.route_count;

        let marker = self.wildcard_marker;
        let mut vars = SmallVec::new();
        let mut node = &mut self.root;
        for token in tokens {
            let key = match token.strip_prefix(marker) {
                Some(name) => {
                    vars.push(name.to_string());
                    Key::Wildcard
                }
                None => Key::Literal(token),
            };
            node = node.child_or_insert(key);
        }

        if let Some(existing) = &node.terminal {
            debug!(pattern, existing = %existing.route, "route conflict");
            return Err(Error::RouteConflict {
                route: existing.route.clone(),
            });
        }

        node.terminal = Some(Terminal {
            route: pattern.to_string(),
            vars,
            data,
            order,
        });
        self.registered += 1;
        debug!(pattern, order, "route registered");
        Ok(())
    }

    /// Remove the registration reached by `pattern`
    ///
    /// Each segment follows the literal child when one exists and falls back to
    /// the wildcard child otherwise, so `/foo/x` may remove `/foo/:id`. Nodes
    /// left without children or a registration are detached, cascading
    /// upwards. Returns the removed pattern, or `None` if nothing matched.
    pub fn remove(&mut self, pattern: &str) -> Option<String> {
        let tokens = self.tokenizer.tokenize(pattern);
        let removed = Self::remove_at(&mut self.root, &tokens, self.wildcard_marker);

        match removed {
            Some(terminal) => {
                self.registered -= 1;
                debug!(pattern, route = %terminal.route, "route removed");
                Some(terminal.route)
            }
            None => {
                debug!(pattern, "no route to remove");
                None
            }
        }
    }

    fn remove_at(node: &mut Node<T>, tokens: &[String], marker: char) -> Option<Terminal<T>> {
        let Some((token, rest)) = tokens.split_first() else {
            return node.terminal.take();
        };

        let slot = if token.starts_with(marker) {
            node.wildcard_position()
        } else {
            node.literal_position(token)
                .or_else(|| node.wildcard_position())
        };
        let index = slot?;

        let child = &mut node.children[index].1;
        let removed = Self::remove_at(child, rest, marker)?;
        if child.is_prunable() {
            node.children.remove(index);
        }
        Some(removed)
    }

    /// Find the best route for `path`
    ///
    /// Returns `None` when no pattern fits every segment of the path. If the
    /// winning route carries a callback it is invoked once with the route and
    /// params before returning, and `data` is `None`.
    pub fn resolve(&self, path: &str) -> Option<Resolved<'_, T>> {
        let tokens = self.tokenizer.tokenize(path);

        let Some(best) = search::best_match(&self.root, &tokens) else {
            trace!(path, "no route matched");
            return None;
        };

        let terminal = best.terminal;
        let mut params = Params::new();
        for (name, value) in terminal.vars.iter().zip(&best.captures) {
            params.insert(name, value);
        }
        trace!(path, route = %terminal.route, quality = best.quality, "route resolved");

        let data = match &terminal.data {
            MatchData::Empty => None,
            MatchData::Value(value) => Some(value),
            MatchData::Callback(callback) => {
                callback(terminal.route.as_str(), &params);
                None
            }
        };

        Some(Resolved {
            route: &terminal.route,
            params,
            data,
        })
    }

    /// Registered patterns in trie pre-order
    ///
    /// Siblings appear in the order their first segment was inserted; the
    /// result is not sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut routes = Vec::with_capacity(self.registered);
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if let Some(terminal) = &node.terminal {
                routes.push(terminal.route.as_str());
            }
            stack.extend(node.children.iter().rev().map(|(_, child)| child));
        }
        routes
    }

    /// Whether `pattern` is registered under exactly this string
    pub fn contains(&self, pattern: &str) -> bool {
        let mut node = &self.root;
        for token in self.tokenizer.tokenize(pattern) {
            let next = if token.starts_with(self.wildcard_marker) {
                node.wildcard()
            } else {
                node.literal(&token)
            };
            match next {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
            .as_ref()
            .is_some_and(|terminal| terminal.route == pattern)
    }

    /// Number of registered patterns
    pub fn len(&self) -> usize {
        self.registered
    }

    pub fn is_empty(&self) -> bool {
        self.registered == 0
    }

    /// Wildcard marker this router was configured with
    pub fn wildcard_marker(&self) -> char {
        self.wildcard_marker
    }

    fn write_tree(f: &mut fmt::Formatter<'_>, node: &Node<T>, depth: usize) -> fmt::Result {
        for (key, child) in &node.children {
            for _ in 0..depth {
                f.write_char('\t')?;
            }
            write!(f, "{key}")?;
            if let Some(terminal) = &child.terminal {
                if !terminal.vars.is_empty() {
                    write!(f, " {:?}", terminal.vars.as_slice())?;
                }
            }
            f.write_char('\n')?;
            Self::write_tree(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Indented tree dump: one segment per line, one tab per depth, with the
/// wildcard variable names of terminals. Empty for an empty router.
impl<T> fmt::Display for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_tree(f, &self.root, 0)
    }
}

impl<T> fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.list())
            .field("wildcard_marker", &self.wildcard_marker)
            .field("route_count", &self.route_count)
            .finish()
    }
}
