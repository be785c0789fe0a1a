//! Data attached to a registered route

use crate::params::Params;
use std::fmt;

/// Callback invoked with `(route, params)` when its route wins a resolution
pub type Callback = Box<dyn Fn(&str, &Params) + Send + Sync>;

/// What a route carries besides its pattern
///
/// `Empty` and `Value` are kept apart so a stored `false` or `0` is still
/// returned as data.
pub enum MatchData<T> {
    /// Nothing attached
    Empty,
    /// A value returned by reference from [`Router::resolve`](crate::Router::resolve)
    Value(T),
    /// Called synchronously on every successful resolution; no data is returned
    Callback(Callback),
}

impl<T> MatchData<T> {
    /// Wrap a closure as callback data
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&str, &Params) + Send + Sync + 'static,
    {
        MatchData::Callback(Box::new(f))
    }

    /// The stored value, if this is `Value`
    pub fn value(&self) -> Option<&T> {
        match self {
            MatchData::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_callback(&self) -> bool {
        matches!(self, MatchData::Callback(_))
    }
}

impl<T> Default for MatchData<T> {
    fn default() -> Self {
        MatchData::Empty
    }
}

impl<T> From<T> for MatchData<T> {
    fn from(value: T) -> Self {
        MatchData::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for MatchData<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchData::Empty => f.write_str("Empty"),
            MatchData::Value(value) => f.debug_tuple("Value").field(value).finish(),
            MatchData::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}
