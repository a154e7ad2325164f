use regex::Regex;
use thiserror::Error;

use crate::rules::{InflectionRule, default_rules};

/// Error raised while compiling a rule list.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid inflection pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Clone)]
struct CompiledRule {
    pattern: Regex,
    replacement: String,
}

/// Builder for an [`Inflector`].
///
/// The rule list starts with the bundled defaults; caller rules are
/// appended after them and consulted only when no earlier rule matched. A
/// caller overriding default behavior for a specific word should supply an
/// `Irregular` or `Uncountable` rule, which beats pattern rules regardless
/// of position.
#[derive(Debug, Clone)]
pub struct InflectorBuilder {
    rules: Vec<InflectionRule>,
}

impl InflectorBuilder {
    fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Append one rule after all existing ones.
    pub fn rule(mut self, rule: InflectionRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append rules in order.
    pub fn rules(mut self, rules: impl IntoIterator<Item = InflectionRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Compile the rule list into an immutable [`Inflector`].
    ///
    /// Fails only when a caller-supplied pattern does not compile; the
    /// bundled defaults always do.
    pub fn build(self) -> Result<Inflector, RuleError> {
        let mut inflector = Inflector {
            pluralization: Vec::new(),
            singularization: Vec::new(),
            irregular: Vec::new(),
            uncountable: Vec::new(),
        };

        for rule in self.rules {
            match rule {
                InflectionRule::Pluralization {
                    pattern,
                    replacement,
                } => inflector
                    .pluralization
                    .push(compile(pattern, replacement)?),
                InflectionRule::Singularization {
                    pattern,
                    replacement,
                } => inflector
                    .singularization
                    .push(compile(pattern, replacement)?),
                InflectionRule::Irregular { singular, plural } => {
                    inflector.irregular.push((singular, plural));
                }
                InflectionRule::Uncountable { word } => inflector.uncountable.push(word),
            }
        }

        Ok(inflector)
    }
}

fn compile(pattern: String, replacement: String) -> Result<CompiledRule, RuleError> {
    let compiled = Regex::new(&pattern).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.clone(),
        source,
    })?;
    Ok(CompiledRule {
        pattern: compiled,
        replacement,
    })
}

/// Converts nouns between singular and plural form using an ordered,
/// immutable rule table.
///
/// Both conversions are total: the default tables end in a catch-all, so
/// every input produces an output and no call fails. Instances are
/// read-only after construction and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Inflector {
    pluralization: Vec<CompiledRule>,
    singularization: Vec<CompiledRule>,
    irregular: Vec<(String, String)>,
    uncountable: Vec<String>,
}

impl Default for Inflector {
    fn default() -> Self {
        Inflector::builder()
            .build()
            .expect("bundled inflection rules compile")
    }
}

impl Inflector {
    /// Start from the bundled default rule list.
    pub fn builder() -> InflectorBuilder {
        InflectorBuilder::new()
    }

    /// Convert a singular noun to its plural form.
    pub fn pluralize(&self, word: &str) -> String {
        if word.is_empty() {
            return word.to_string();
        }
        if self.is_uncountable(word) {
            return word.to_string();
        }
        for (singular, plural) in &self.irregular {
            if word == singular || word == plural {
                return plural.clone();
            }
        }
        apply_first_match(&self.pluralization, word)
    }

    /// Convert a plural noun to its singular form.
    pub fn singularize(&self, word: &str) -> String {
        if word.is_empty() {
            return word.to_string();
        }
        if self.is_uncountable(word) {
            return word.to_string();
        }
        for (singular, plural) in &self.irregular {
            if word == plural || word == singular {
                return singular.clone();
            }
        }
        apply_first_match(&self.singularization, word)
    }

    fn is_uncountable(&self, word: &str) -> bool {
        self.uncountable.iter().any(|entry| entry == word)
    }
}

fn apply_first_match(rules: &[CompiledRule], word: &str) -> String {
    for rule in rules {
        if rule.pattern.is_match(word) {
            return rule
                .pattern
                .replace(word, rule.replacement.as_str())
                .into_owned();
        }
    }
    word.to_string()
}
