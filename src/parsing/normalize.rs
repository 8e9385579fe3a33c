//! Input normalization.
//!
//! Free-form input is rewritten into either `IP/PREFIX` or `IP MASK` by an
//! ordered list of regex rules. Rules run in declaration order; each one only
//! sees the output of the rules before it.

use lazy_static::lazy_static;
use regex::Regex;

/// A single named rewrite step.
#[derive(Debug)]
pub struct NormalizeRule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl NormalizeRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> NormalizeRule {
        NormalizeRule {
            name,
            pattern: Regex::new(pattern).expect("Invalid Regex?"),
            replacement,
        }
    }

    /// Apply this rule alone.
    pub fn apply(&self, input: &str) -> String {
        let output = self.pattern.replace_all(input, self.replacement);
        if output != input {
            log::trace!("rule {}: {:?} -> {:?}", self.name, input, output);
        }
        output.into_owned()
    }
}

lazy_static! {
    static ref NORMALIZE_RULES: Vec<NormalizeRule> = vec![
        NormalizeRule::new("trim", r"^\s+|\s+$", ""),
        NormalizeRule::new("collapse-whitespace", r"\s+", " "),
        NormalizeRule::new("tight-slash", r" ?/ ?", "/"),
        // A lone '-' or ':' before a dot-free token separates a prefix length.
        NormalizeRule::new(
            "alt-separator-prefix",
            r"^([^\s/:-]+) ?[-:] ?([^\s./:-]+)$",
            "${1}/${2}",
        ),
        // ...and before a dotted token it separates a netmask.
        NormalizeRule::new(
            "alt-separator-mask",
            r"^([^\s/:-]+) ?[-:] ?([^\s/:-]*\.[^\s/:-]*)$",
            "${1} ${2}",
        ),
    ];
}

/// The normalization rules in the order they are applied.
pub fn normalize_rules() -> &'static [NormalizeRule] {
    &NORMALIZE_RULES
}

/// Run every normalization rule over `input`.
pub fn normalize(input: &str) -> String {
    normalize_rules()
        .iter()
        .fold(input.to_string(), |acc, rule| rule.apply(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static NormalizeRule {
        normalize_rules()
            .iter()
            .find(|r| r.name == name)
            .expect("rule exists")
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = normalize_rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "trim",
                "collapse-whitespace",
                "tight-slash",
                "alt-separator-prefix",
                "alt-separator-mask"
            ]
        );
    }

    #[test]
    fn test_trim() {
        assert_eq!(rule("trim").apply("  10.0.0.1/8 \t\n"), "10.0.0.1/8");
        assert_eq!(rule("trim").apply("10.0.0.1 8"), "10.0.0.1 8");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            rule("collapse-whitespace").apply("10.0.0.1 \t  255.0.0.0"),
            "10.0.0.1 255.0.0.0"
        );
    }

    #[test]
    fn test_tight_slash() {
        assert_eq!(rule("tight-slash").apply("10.0.0.1 / 8"), "10.0.0.1/8");
        assert_eq!(rule("tight-slash").apply("10.0.0.1/8"), "10.0.0.1/8");
    }

    #[test]
    fn test_alt_separator_prefix() {
        let r = rule("alt-separator-prefix");
        assert_eq!(r.apply("10.0.0.1-8"), "10.0.0.1/8");
        assert_eq!(r.apply("192.168.1.50:24"), "192.168.1.50/24");
        assert_eq!(r.apply("192.168.1.50 - 24"), "192.168.1.50/24");
        // Dotted tokens are left for the mask rule.
        assert_eq!(r.apply("10.0.0.1-255.0.0.0"), "10.0.0.1-255.0.0.0");
        // Doubled separators are not a single separator.
        assert_eq!(r.apply("10.0.0.1--8"), "10.0.0.1--8");
    }

    #[test]
    fn test_alt_separator_mask() {
        let r = rule("alt-separator-mask");
        assert_eq!(r.apply("10.0.0.1-255.0.0.0"), "10.0.0.1 255.0.0.0");
        assert_eq!(r.apply("10.0.0.1:255.255.0.0"), "10.0.0.1 255.255.0.0");
        assert_eq!(r.apply("10.0.0.1-8"), "10.0.0.1-8");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("192.0.2.10/27"), "192.0.2.10/27");
        assert_eq!(normalize("  10.0.0.1-8 "), "10.0.0.1/8");
        assert_eq!(normalize("192.168.1.50:24"), "192.168.1.50/24");
        assert_eq!(normalize("10.0.0.1 - 255.0.0.0"), "10.0.0.1 255.0.0.0");
        assert_eq!(
            normalize("192.168.1.10    255.255.255.0"),
            "192.168.1.10 255.255.255.0"
        );
        assert_eq!(normalize("abcd"), "abcd");
    }

    #[test]
    fn test_normalize_keeps_dotted_content() {
        assert_eq!(normalize("10.0.0.1 255.0.0.0"), "10.0.0.1 255.0.0.0");
        assert_eq!(normalize("0.0.0.0/0"), "0.0.0.0/0");
    }
}
