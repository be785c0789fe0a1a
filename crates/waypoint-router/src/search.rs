//! Best-match search over the trie
//!
//! Every route whose shape fits the whole token list is a candidate. Quality
//! counts literal segment matches; the highest quality wins and the lowest
//! registration order breaks ties. Orders are unique, so a single winner
//! always exists once any candidate does.

use crate::node::{Node, Terminal};
use smallvec::SmallVec;

type Captures<'p> = SmallVec<[&'p str; 4]>;

/// A route that matched the full token list
pub(crate) struct Candidate<'t, 'p, T> {
    pub terminal: &'t Terminal<T>,
    pub quality: usize,
    /// Tokens consumed by wildcards, in path order
    pub captures: Captures<'p>,
}

impl<T> Candidate<'_, '_, T> {
    fn beats(&self, other: &Self) -> bool {
        self.quality > other.quality
            || (self.quality == other.quality && self.terminal.order < other.terminal.order)
    }
}

struct Frame<'t, 'p, T> {
    node: &'t Node<T>,
    depth: usize,
    quality: usize,
    captures: Captures<'p>,
}

/// Depth-first search from `root` for the best candidate
///
/// Uses an explicit stack, so depth is bounded by the token count rather than
/// the call stack. Each branch owns its captures.
pub(crate) fn best_match<'t, 'p, T>(
    root: &'t Node<T>,
    tokens: &'p [String],
) -> Option<Candidate<'t, 'p, T>> {
    let mut best: Option<Candidate<'t, 'p, T>> = None;
    let mut stack = vec![Frame {
        node: root,
        depth: 0,
        quality: 0,
        captures: Captures::new(),
    }];

    while let Some(frame) = stack.pop() {
        let Some(token) = tokens.get(frame.depth) else {
            if let Some(terminal) = &frame.node.terminal {
                let candidate = Candidate {
                    terminal,
                    quality: frame.quality,
                    captures: frame.captures,
                };
                if best.as_ref().map_or(true, |b| candidate.beats(b)) {
                    best = Some(candidate);
                }
            }
            continue;
        };

        if let Some(child) = frame.node.wildcard() {
            let mut captures = frame.captures.clone();
            captures.push(token.as_str());
            stack.push(Frame {
                node: child,
                depth: frame.depth + 1,
                quality: frame.quality,
                captures,
            });
        }

        // Pushed last so the literal branch is explored first
        if let Some(child) = frame.node.literal(token) {
            stack.push(Frame {
                node: child,
                depth: frame.depth + 1,
                quality: frame.quality + 1,
                captures: frame.captures,
            });
        }
    }

    best
}
