//! Rewrites Korean adjective glosses from sentence-final form to modifier form.
//!
//! A gloss list such as `"좋다, 조용하다"` becomes `"좋은, 조용한"`. Each
//! comma-separated segment is resolved in three stages:
//!
//! 1. the exact-match table of irregular adjectives,
//! 2. the ordered suffix rules (first match wins),
//! 3. the generic `다` -> `은` fallback, skipped for the `보다` postposition.
//!
//! Segments nothing applies to pass through unchanged.

use std::sync::LazyLock;

use regex::Regex;

/// Irregular adjectives whose modifier form no suffix rule produces.
const EXACT_FORMS: &[(&str, &str)] = &[
    ("좋다", "좋은"),
    ("많다", "많은"),
    ("적다", "적은"),
    ("크다", "큰"),
    ("작다", "작은"),
    ("높다", "높은"),
    ("낮다", "낮은"),
    ("깊다", "깊은"),
    ("얕다", "얕은"),
    ("좁다", "좁은"),
    ("넓다", "넓은"),
    ("멀다", "먼"),
    ("같다", "같은"),
    ("아름답다", "아름다운"),
    ("차다", "찬"),
    ("길다", "긴"),
    ("짧다", "짧은"),
    ("젊다", "젊은"),
    ("늙다", "늙은"),
    ("귀엽다", "귀여운"),
    ("둥글다", "둥근"),
    ("시다", "신"),
    ("쓰다", "쓴"),
    ("달다", "단"),
    ("짜다", "짠"),
    ("맵다", "매운"),
    ("덥다", "더운"),
    ("춥다", "추운"),
    ("무겁다", "무거운"),
    ("가볍다", "가벼운"),
    ("무섭다", "무서운"),
    ("아프다", "아픈"),
    ("기쁘다", "기쁜"),
    ("슬프다", "슬픈"),
    ("빠르다", "빠른"),
    ("느리다", "느린"),
    ("다르다", "다른"),
    ("재미있다", "재미있는"),
    ("맛있다", "맛있는"),
    ("맛없다", "맛없는"),
    ("어렵다", "어려운"),
    ("쉽다", "쉬운"),
];

/// `다` ending that is the comparison postposition, not an adjective.
const COMPARISON_ENDING: &str = "보다";

static JAMO_BIEUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([가-힣])ㅂ다$").unwrap());
static DAPDA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([가-힣])답다$").unwrap());

/// How a suffix rule recognises and rewrites its ending.
enum Matcher {
    /// Plain trailing string replaced by a fixed modifier ending.
    Literal {
        ending: &'static str,
        modifier: &'static str,
    },
    /// Anchored pattern whose captures feed the replacement.
    Pattern {
        regex: &'static LazyLock<Regex>,
        replacement: &'static str,
    },
}

impl Matcher {
    fn apply(&self, segment: &str) -> Option<String> {
        match self {
            Matcher::Literal { ending, modifier } => segment
                .strip_suffix(*ending)
                .map(|stem| format!("{stem}{modifier}")),
            Matcher::Pattern { regex, replacement } => regex
                .is_match(segment)
                .then(|| regex.replace(segment, *replacement).into_owned()),
        }
    }
}

struct SuffixRule {
    name: &'static str,
    matcher: Matcher,
}

const fn pattern(
    name: &'static str,
    regex: &'static LazyLock<Regex>,
    replacement: &'static str,
) -> SuffixRule {
    SuffixRule {
        name,
        matcher: Matcher::Pattern { regex, replacement },
    }
}

const fn literal(name: &'static str, ending: &'static str, modifier: &'static str) -> SuffixRule {
    SuffixRule {
        name,
        matcher: Matcher::Literal { ending, modifier },
    }
}

/// Suffix rules in priority order. Longer endings precede the shorter ones
/// they share trailing characters with.
static SUFFIX_RULES: [SuffixRule; 12] = [
    literal("hada", "하다", "한"),
    literal("ida", "이다", "인"),
    literal("seureopda", "스럽다", "스러운"),
    literal("ropda", "롭다", "로운"),
    // standalone jamo only: 부드러ㅂ다 -> 부드러운
    pattern("bieup-irregular", &JAMO_BIEUP_RE, "${1}운"),
    literal("ppeuda", "쁘다", "쁜"),
    literal("peuda", "프다", "픈"),
    literal("reuda", "르다", "른"),
    literal("gida", "기다", "긴"),
    literal("itda", "있다", "있는"),
    literal("eopda", "없다", "없는"),
    pattern("dapda", &DAPDA_RE, "${1}다운"),
];

/// Which stage produced a segment's modifier form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Exact-match table hit.
    Exact,
    /// Named suffix rule.
    Suffix(&'static str),
    /// Generic `다` -> `은` substitution.
    Fallback,
    /// Nothing applied.
    Unchanged,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Exact => f.write_str("exact"),
            Rule::Suffix(name) => write!(f, "suffix:{name}"),
            Rule::Fallback => f.write_str("fallback"),
            Rule::Unchanged => f.write_str("unchanged"),
        }
    }
}

/// One rewritten segment of a gloss list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRewrite {
    /// Trimmed input segment.
    pub before: String,
    pub after: String,
    pub rule: Rule,
}

/// Traced rewrite of a whole gloss list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rewrite {
    pub segments: Vec<SegmentRewrite>,
}

impl Rewrite {
    /// Segments rejoined with `", "`.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.after.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Segments that only the generic fallback could rewrite.
    pub fn fallbacks(&self) -> impl Iterator<Item = &SegmentRewrite> {
        self.segments
            .iter()
            .filter(|segment| segment.rule == Rule::Fallback)
    }
}

/// Rewrite a comma-separated gloss list into modifier form.
///
/// Empty input is returned as-is.
pub fn to_modifier_form(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    rewrite(text).text()
}

/// Like [`to_modifier_form`] but records the rule used for every segment.
pub fn rewrite(text: &str) -> Rewrite {
    if text.is_empty() {
        return Rewrite::default();
    }
    let segments = text
        .split(',')
        .map(|segment| rewrite_segment(segment.trim()))
        .collect();
    Rewrite { segments }
}

/// Modifier form for a single gloss, if it is in the exact-match table.
pub fn exact_form(gloss: &str) -> Option<&'static str> {
    EXACT_FORMS
        .iter()
        .find(|(plain, _)| *plain == gloss)
        .map(|(_, modifier)| *modifier)
}

/// The full exact-match table, in declaration order.
pub fn exact_forms() -> &'static [(&'static str, &'static str)] {
    EXACT_FORMS
}

fn rewrite_segment(segment: &str) -> SegmentRewrite {
    let (after, rule) = resolve(segment);
    SegmentRewrite {
        before: segment.to_string(),
        after,
        rule,
    }
}

fn resolve(segment: &str) -> (String, Rule) {
    if let Some(modifier) = exact_form(segment) {
        return (modifier.to_string(), Rule::Exact);
    }
    for rule in &SUFFIX_RULES {
        if let Some(rewritten) = rule.matcher.apply(segment) {
            return (rewritten, Rule::Suffix(rule.name));
        }
    }
    if !segment.ends_with(COMPARISON_ENDING) {
        if let Some(stem) = segment.strip_suffix('다') {
            return (format!("{stem}은"), Rule::Fallback);
        }
    }
    (segment.to_string(), Rule::Unchanged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_table_hits() {
        assert_eq!(to_modifier_form("좋다"), "좋은");
        assert_eq!(to_modifier_form("재미있다"), "재미있는");
        assert_eq!(to_modifier_form("맵다"), "매운");
    }

    #[test]
    fn every_exact_entry_maps_verbatim() {
        for (plain, modifier) in exact_forms() {
            assert_eq!(to_modifier_form(plain), *modifier, "{plain}");
            assert_eq!(rewrite(plain).segments[0].rule, Rule::Exact);
        }
    }

    #[test]
    fn exact_table_wins_over_suffix_rules() {
        assert_eq!(to_modifier_form("좁다"), "좁은");
        assert_eq!(rewrite("다르다").segments[0].rule, Rule::Exact);
    }

    #[test]
    fn hada_rule() {
        assert_eq!(to_modifier_form("조용하다"), "조용한");
        assert_eq!(
            rewrite("조용하다").segments[0].rule,
            Rule::Suffix("hada")
        );
    }

    #[test]
    fn suffix_rules_each_fire() {
        let cases = [
            ("학생이다", "학생인", "ida"),
            ("자연스럽다", "자연스러운", "seureopda"),
            ("평화롭다", "평화로운", "ropda"),
            ("부드러ㅂ다", "부드러운", "bieup-irregular"),
            ("예쁘다", "예쁜", "ppeuda"),
            ("배고프다", "배고픈", "peuda"),
            ("게으르다", "게으른", "reuda"),
            ("굶기다", "굶긴", "gida"),
            ("멋있다", "멋있는", "itda"),
            ("재미없다", "재미없는", "eopda"),
            ("정답다", "정다운", "dapda"),
        ];
        for (input, expected, name) in cases {
            let traced = rewrite(input);
            assert_eq!(traced.text(), expected, "{input}");
            assert_eq!(traced.segments[0].rule, Rule::Suffix(name), "{input}");
        }
    }

    #[test]
    fn dapda_words_become_daun() {
        assert_eq!(to_modifier_form("여자답다"), "여자다운");
        assert_eq!(
            rewrite("꽃답다").segments[0].rule,
            Rule::Suffix("dapda")
        );
    }

    #[test]
    fn precomposed_bieup_final_is_not_irregular() {
        // only the standalone jamo spelling hits the ㅂ rule
        let cases = [
            ("부드럽다", "부드럽은"),
            ("수줍다", "수줍은"),
            ("답다", "답은"),
        ];
        for (input, expected) in cases {
            let traced = rewrite(input);
            assert_eq!(traced.text(), expected, "{input}");
            assert_eq!(traced.segments[0].rule, Rule::Fallback, "{input}");
        }
    }

    #[test]
    fn generic_fallback_appends_eun() {
        let traced = rewrite("밝다");
        assert_eq!(traced.text(), "밝은");
        assert_eq!(traced.segments[0].rule, Rule::Fallback);
        assert_eq!(traced.fallbacks().count(), 1);
    }

    #[test]
    fn comparison_postposition_is_left_alone() {
        assert_eq!(to_modifier_form("보다"), "보다");
        assert_eq!(to_modifier_form("그것보다"), "그것보다");
        assert_eq!(rewrite("보다").segments[0].rule, Rule::Unchanged);
    }

    #[test]
    fn non_da_segments_pass_through() {
        assert_eq!(to_modifier_form("좋은"), "좋은");
        assert_eq!(to_modifier_form("quiet"), "quiet");
    }

    #[test]
    fn splits_and_rejoins_lists() {
        assert_eq!(to_modifier_form("좋다, 크다"), "좋은, 큰");
        assert_eq!(to_modifier_form("  좋다 ,크다 "), "좋은, 큰");
        assert_eq!(to_modifier_form("조용하다,보다"), "조용한, 보다");
    }

    #[test]
    fn empty_input_is_unchanged() {
        assert_eq!(to_modifier_form(""), "");
        assert!(rewrite("").segments.is_empty());
    }

    #[test]
    fn rewriting_twice_is_a_no_op() {
        let inputs = [
            "좋다, 크다",
            "조용하다",
            "부드러ㅂ다, 정답다",
            "수줍다",
            "밝다",
            "보다",
            "학생이다, 재미없다, 예쁘다",
        ];
        for input in inputs {
            let once = to_modifier_form(input);
            assert_eq!(to_modifier_form(&once), once, "{input}");
        }
        for (_, modifier) in exact_forms() {
            assert_eq!(to_modifier_form(modifier), *modifier);
        }
    }

    #[test]
    fn rule_display_names() {
        assert_eq!(Rule::Suffix("hada").to_string(), "suffix:hada");
        assert_eq!(Rule::Fallback.to_string(), "fallback");
    }
}
