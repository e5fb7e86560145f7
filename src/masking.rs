// SPDX-FileCopyrightText: 2026 har2doc contributors
//
// SPDX-License-Identifier: ISC

//! Literal substring masking for secret/PII scrubbing.

use serde::Deserialize;

/// One masking substitution: every occurrence of `find` becomes `replace`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MaskingRule {
    pub find: String,
    pub replace: String,
}

/// Apply `rules` to `text` in order, each rule replacing all occurrences of
/// its literal before the next rule runs. Plain substring replacement, no
/// regex or word boundaries; rule order matters when one literal is a
/// substring of another's replacement.
pub fn apply_masking(text: &str, rules: &[MaskingRule]) -> String {
    rules.iter().fold(text.to_string(), |acc, rule| {
        acc.replace(&rule.find, &rule.replace)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rule(find: &str, replace: &str) -> MaskingRule {
        MaskingRule {
            find: find.to_string(),
            replace: replace.to_string(),
        }
    }

    #[test]
    fn replaces_all_occurrences() {
        let rules = vec![rule("secret1", "xxxx")];
        assert_eq!(
            apply_masking("token=secret1; refresh=secret1", &rules),
            "token=xxxx; refresh=xxxx"
        );
    }

    #[test]
    fn rules_apply_in_order() {
        let rules = vec![rule("a", "b"), rule("b", "c")];
        assert_eq!(apply_masking("a", &rules), "c");
    }

    #[rstest]
    #[case("no match here")]
    #[case("")]
    fn identity_when_no_rule_matches(#[case] text: &str) {
        let rules = vec![rule("secret1", "xxxx")];
        assert_eq!(apply_masking(text, &rules), text);
    }

    #[test]
    fn empty_rule_set_is_identity() {
        assert_eq!(apply_masking("anything", &[]), "anything");
    }
}
