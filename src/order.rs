//! Ordering of listed directory names.
//!
//! Stage 2 of the index pipeline. Takes the unordered listing from
//! [`crate::scan`] and produces the display order according to a
//! [`SortPolicy`].
//!
//! ## Semver Policy
//!
//! ```text
//! input:  v1.2.0  guide  v1.10.0  api  v2.0.0
//! plain:  api guide                         (ascending, code-point order)
//! tags:   v2.0.0 v1.10.0 v1.2.0             (descending, numeric per part)
//! output: api guide v2.0.0 v1.10.0 v1.2.0
//! ```
//!
//! Named directories (`api`, `guide`, `latest`) come first because they are
//! the stable entry points; release tags follow, newest first. Two tags with
//! the same triple (`v1.0.0`, `v1.0.0-rc1`) fall back to ascending name order
//! so the output never depends on filesystem enumeration order.
//!
//! Every policy is a permutation of its input: nothing is added, dropped or
//! deduplicated.

use crate::types::SortPolicy;
use crate::version::{ParsedVersion, parse_version};

/// Order directory names for display.
pub fn order_entries(names: Vec<String>, policy: SortPolicy) -> Vec<String> {
    match policy {
        SortPolicy::Semver => semver_order(names),
        SortPolicy::Lexical => {
            let mut names = names;
            names.sort();
            names
        }
        SortPolicy::Listing => names,
    }
}

fn semver_order(names: Vec<String>) -> Vec<String> {
    let mut plain = Vec::new();
    let mut versioned: Vec<(ParsedVersion, String)> = Vec::new();

    for name in names {
        match parse_version(&name) {
            Some(version) => versioned.push((version, name)),
            None => plain.push(name),
        }
    }

    plain.sort();
    versioned.sort_by(|(va, na), (vb, nb)| vb.cmp(va).then_with(|| na.cmp(nb)));

    plain.extend(versioned.into_iter().map(|(_, name)| name));
    plain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::names;

    #[test]
    fn versions_sort_numerically_descending() {
        let ordered = order_entries(names(&["v1.2.0", "v1.10.0", "v2.0.0"]), SortPolicy::Semver);
        assert_eq!(ordered, names(&["v2.0.0", "v1.10.0", "v1.2.0"]));
    }

    #[test]
    fn plain_names_before_versions() {
        let ordered = order_entries(
            names(&["guide", "v1.0.0", "v2.0.0", "api"]),
            SortPolicy::Semver,
        );
        assert_eq!(ordered, names(&["api", "guide", "v2.0.0", "v1.0.0"]));
    }

    #[test]
    fn minor_and_patch_compared_after_major() {
        let ordered = order_entries(
            names(&["v1.0.9", "v1.1.0", "v1.0.10", "v0.99.99"]),
            SortPolicy::Semver,
        );
        assert_eq!(ordered, names(&["v1.1.0", "v1.0.10", "v1.0.9", "v0.99.99"]));
    }

    #[test]
    fn plain_names_are_case_sensitive() {
        let ordered = order_entries(names(&["beta", "Zeta", "alpha"]), SortPolicy::Semver);
        assert_eq!(ordered, names(&["Zeta", "alpha", "beta"]));
    }

    #[test]
    fn suffixed_tags_sort_by_their_prefix() {
        let ordered = order_entries(
            names(&["v1.0.0", "v2.0.0-rc.1", "v1.5.0-beta"]),
            SortPolicy::Semver,
        );
        assert_eq!(ordered, names(&["v2.0.0-rc.1", "v1.5.0-beta", "v1.0.0"]));
    }

    #[test]
    fn equal_triples_break_ties_by_name() {
        let ordered = order_entries(
            names(&["v1.0.0-rc1", "v01.0.0", "v1.0.0"]),
            SortPolicy::Semver,
        );
        assert_eq!(ordered, names(&["v01.0.0", "v1.0.0", "v1.0.0-rc1"]));

        let reversed = order_entries(
            names(&["v1.0.0", "v01.0.0", "v1.0.0-rc1"]),
            SortPolicy::Semver,
        );
        assert_eq!(reversed, ordered);
    }

    #[test]
    fn near_miss_tags_are_plain() {
        let ordered = order_entries(
            names(&["v2.0.0", "v1.2", "1.0.0", "V3.0.0"]),
            SortPolicy::Semver,
        );
        assert_eq!(ordered, names(&["1.0.0", "V3.0.0", "v1.2", "v2.0.0"]));
    }

    #[test]
    fn lexical_policy_ignores_versions() {
        let ordered = order_entries(
            names(&["v1.2.0", "v1.10.0", "api", "v2.0.0"]),
            SortPolicy::Lexical,
        );
        assert_eq!(ordered, names(&["api", "v1.10.0", "v1.2.0", "v2.0.0"]));
    }

    #[test]
    fn listing_policy_preserves_input_order() {
        let input = names(&["zeta", "v1.0.0", "alpha"]);
        assert_eq!(order_entries(input.clone(), SortPolicy::Listing), input);
    }

    #[test]
    fn empty_input_for_every_policy() {
        for policy in [SortPolicy::Semver, SortPolicy::Lexical, SortPolicy::Listing] {
            assert!(order_entries(Vec::new(), policy).is_empty());
        }
    }

    #[test]
    fn ordering_is_a_permutation() {
        let input = names(&["v3.1.0", "docs", "v3.1.0-rc", "latest", "v0.1.0", "docs2"]);
        for policy in [SortPolicy::Semver, SortPolicy::Lexical, SortPolicy::Listing] {
            let mut out = order_entries(input.clone(), policy);
            let mut expected = input.clone();
            out.sort();
            expected.sort();
            assert_eq!(out, expected, "{policy:?} changed the set of names");
        }
    }

    #[test]
    fn semver_policy_independent_of_input_order() {
        let a = order_entries(names(&["v1.0.0", "api", "v2.0.0", "guide"]), SortPolicy::Semver);
        let b = order_entries(names(&["guide", "v2.0.0", "api", "v1.0.0"]), SortPolicy::Semver);
        assert_eq!(a, b);
    }
}
