use serde::{Deserialize, Serialize};

/// A single inflection rule.
///
/// Rules live in an ordered list scanned front to back; the first
/// structurally matching rule wins. `Irregular` and `Uncountable` entries
/// are exact, case-sensitive word matches and take precedence over the
/// pattern rules in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InflectionRule {
    /// Pattern applied when converting singular to plural.
    Pluralization { pattern: String, replacement: String },
    /// Pattern applied when converting plural to singular.
    Singularization { pattern: String, replacement: String },
    /// Exact singular/plural pair overriding the pattern rules.
    Irregular { singular: String, plural: String },
    /// A word whose singular and plural forms are identical.
    Uncountable { word: String },
}

/// Default pluralization patterns, most specific first.
///
/// The final two entries keep a trailing `s` as-is and append `s` to
/// everything else, so the scan always terminates with a match.
/// Replacements use `${n}` capture substitution.
const PLURALIZATION: &[(&str, &str)] = &[
    (r"(?i)(quiz)$", "${1}zes"),
    (r"(?i)^(oxen)$", "${1}"),
    (r"(?i)^(ox)$", "${1}en"),
    (r"(?i)^(m|l)ice$", "${1}ice"),
    (r"(?i)^(m|l)ouse$", "${1}ice"),
    (r"(?i)(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    (r"(?i)(x|ch|ss|sh)$", "${1}es"),
    (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?i)(hive)$", "${1}s"),
    (r"(?i)(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    (r"(?i)sis$", "ses"),
    (r"(?i)([ti])a$", "${1}a"),
    (r"(?i)([ti])um$", "${1}a"),
    (r"(?i)(buffal|tomat)o$", "${1}oes"),
    (r"(?i)(bu)s$", "${1}ses"),
    (r"(?i)(alias|status)$", "${1}es"),
    (r"(?i)(octop|vir)i$", "${1}i"),
    (r"(?i)(octop|vir)us$", "${1}i"),
    (r"(?i)^(ax|test)is$", "${1}es"),
    (r"(?i)s$", "s"),
    (r"$", "s"),
];

/// Default singularization patterns, most specific first.
const SINGULARIZATION: &[(&str, &str)] = &[
    (r"(?i)(database)s$", "${1}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)^(ox)en", "${1}"),
    (r"(?i)(alias|status)(es)?$", "${1}"),
    (r"(?i)(octop|vir)(us|i)$", "${1}us"),
    (r"(?i)^(a)x[ie]s$", "${1}xis"),
    (r"(?i)(cris|test)(is|es)$", "${1}is"),
    (r"(?i)(shoe)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)(bus)(es)?$", "${1}"),
    (r"(?i)^(m|l)ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)(s)eries$", "${1}eries"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(tive)s$", "${1}"),
    (r"(?i)(hive)s$", "${1}"),
    (r"(?i)([^f])ves$", "${1}fe"),
    (r"(?i)(^analy)(sis|ses)$", "${1}sis"),
    (
        r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
        "${1}sis",
    ),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(n)ews$", "${1}ews"),
    (r"(?i)(ss)$", "${1}"),
    (r"(?i)s$", ""),
];

/// Exact singular/plural pairs the pattern rules get wrong.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("leaf", "leaves"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

/// Words returned unchanged in both directions.
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "fish",
    "sheep",
    "jeans",
    "police",
];

/// The bundled default rule list, in scan order.
pub fn default_rules() -> Vec<InflectionRule> {
    let mut rules = Vec::new();
    for word in UNCOUNTABLE {
        rules.push(InflectionRule::Uncountable {
            word: (*word).to_string(),
        });
    }
    for (singular, plural) in IRREGULAR {
        rules.push(InflectionRule::Irregular {
            singular: (*singular).to_string(),
            plural: (*plural).to_string(),
        });
    }
    for (pattern, replacement) in PLURALIZATION {
        rules.push(InflectionRule::Pluralization {
            pattern: (*pattern).to_string(),
            replacement: (*replacement).to_string(),
        });
    }
    for (pattern, replacement) in SINGULARIZATION {
        rules.push(InflectionRule::Singularization {
            pattern: (*pattern).to_string(),
            replacement: (*replacement).to_string(),
        });
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_round_trip_through_serde() {
        let rule = InflectionRule::Irregular {
            singular: "criterion".to_string(),
            plural: "criteria".to_string(),
        };
        let encoded = serde_json::to_string(&rule).expect("serialize");
        assert!(encoded.contains("\"kind\":\"irregular\""));
        let decoded: InflectionRule = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, rule);
    }

    #[test]
    fn catch_all_is_last_pluralization_default() {
        let (pattern, replacement) = PLURALIZATION[PLURALIZATION.len() - 1];
        assert_eq!(pattern, "$");
        assert_eq!(replacement, "s");
    }
}
