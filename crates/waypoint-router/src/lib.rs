//! waypoint-router: segment trie route matcher
//!
//! Maps separator-delimited strings (URL paths, sub-command lines, topic
//! names) to registered patterns and their data.
//!
//! ## Features
//! - Literal segments: `/users`, `/api/v1/health`
//! - Named single-segment captures: `/users/:id`, `/:org/repos/:repo`
//! - Data or callbacks attached per route
//! - Removal with pruning of emptied branches
//! - Pluggable tokenizer and wildcard marker
//!
//! ## Path Syntax
//! - Segments are split on `/`; runs of `/` count as one separator
//! - A leading or trailing `/` produces an empty segment, so `/a`, `a` and
//!   `a/` are three different patterns
//! - `:name` - captures exactly one segment
//!
//! ## Priority
//! 1. Most literal segment matches across the whole path
//! 2. Earliest registration among equally specific routes
//!
//! ## Example
//! ```
//! use waypoint_router::{Error, Router};
//!
//! let mut router = Router::new();
//! router.add_data("/a/b/:a/:b/:c", "first").unwrap();
//! router.add_data("/:a/:b/a/b/c", "second").unwrap();
//!
//! // Four literal matches beat three
//! let m = router.resolve("/a/b/a/b/c").unwrap();
//! assert_eq!(m.route, "/:a/:b/a/b/c");
//! assert_eq!(m.params.get("a"), Some("a"));
//! assert_eq!(m.params.get("b"), Some("b"));
//! assert_eq!(m.data, Some(&"second"));
//!
//! assert_eq!(
//!     router.add_data("/a/b/:x/:y/:z", "dup"),
//!     Err(Error::RouteConflict { route: "/a/b/:a/:b/:c".to_string() })
//! );
//! assert!(router.resolve("/nope").is_none());
//! ```
//!
//! The router does no locking; wrap it in a lock of your choice to share it
//! between threads.

mod config;
mod data;
mod error;
mod node;
mod params;
mod router;
mod search;
mod tokenizer;

pub use config::RouterConfig;
pub use data::{Callback, MatchData};
pub use error::{Error, Result};
pub use params::{Params, Resolved};
pub use router::Router;
pub use tokenizer::{SeparatorTokenizer, Tokenizer};
