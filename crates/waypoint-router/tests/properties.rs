//! Property tests over generated route sets

use proptest::prelude::*;
use waypoint_router::Router;

/// Literal segment: short lowercase word, never starting with the marker
fn literal() -> impl Strategy<Value = String> {
    "[a-c]{1,2}"
}

/// Pattern segment: literal or `:name` wildcard
fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => literal(),
        1 => "[x-z]".prop_map(|name| format!(":{name}")),
    ]
}

fn static_pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(literal(), 1..5).prop_map(|segs| format!("/{}", segs.join("/")))
}

fn pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..5).prop_map(|segs| format!("/{}", segs.join("/")))
}

/// Register every pattern, skipping conflicts; returns the accepted ones
fn build(patterns: &[String]) -> (Router<usize>, Vec<String>) {
    let mut router = Router::new();
    let mut accepted = Vec::new();
    for (i, p) in patterns.iter().enumerate() {
        if router.add_data(p, i).is_ok() {
            accepted.push(p.clone());
        }
    }
    (router, accepted)
}

/// Concrete path for a pattern, filling every wildcard with `fill`
fn instantiate(pattern: &str, fill: &str) -> String {
    pattern
        .split('/')
        .map(|seg| if seg.starts_with(':') { fill } else { seg })
        .collect::<Vec<_>>()
        .join("/")
}

proptest! {
    #[test]
    fn prop_static_round_trip(patterns in prop::collection::vec(static_pattern(), 1..12)) {
        let (router, accepted) = build(&patterns);
        for p in &accepted {
            let m = router.resolve(p).unwrap();
            prop_assert_eq!(m.route, p.as_str());
            prop_assert!(m.params.is_empty());
        }
    }

    #[test]
    fn prop_filled_wildcards_resolve_to_own_pattern(
        patterns in prop::collection::vec(pattern(), 1..12),
    ) {
        let (router, accepted) = build(&patterns);
        for p in &accepted {
            // `q` never appears as a literal, so only wildcard routes can take it
            let path = instantiate(p, "q");
            let m = router.resolve(&path).unwrap();
            prop_assert_eq!(m.route, p.as_str());
            for value in m.params.iter().map(|(_, v)| v) {
                prop_assert_eq!(value, "q");
            }
        }
    }

    #[test]
    fn prop_remove_unknown_is_noop(
        patterns in prop::collection::vec(pattern(), 0..10),
        // One segment longer than any generated pattern
        missing in "/[d-f]{1,3}(/[d-f]{1,3}){4}",
    ) {
        let (mut router, _) = build(&patterns);
        let before_list: Vec<String> = router.list().iter().map(|s| s.to_string()).collect();
        let before_dump = router.to_string();

        prop_assert_eq!(router.remove(&missing), None);
        prop_assert_eq!(router.list(), before_list.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(router.to_string(), before_dump);
    }

    #[test]
    fn prop_removing_everything_prunes_trie(patterns in prop::collection::vec(pattern(), 1..12)) {
        let (mut router, accepted) = build(&patterns);
        prop_assert_eq!(router.len(), accepted.len());

        for p in accepted.iter().rev() {
            prop_assert!(router.contains(p));
            router.remove(p);
        }
        prop_assert!(router.is_empty());
        prop_assert_eq!(router.to_string(), "");
    }

    #[test]
    fn prop_list_matches_registrations(patterns in prop::collection::vec(pattern(), 0..12)) {
        let (router, accepted) = build(&patterns);
        let mut listed: Vec<&str> = router.list();
        let mut expected: Vec<&str> = accepted.iter().map(String::as_str).collect();
        listed.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(listed, expected);
    }
}
