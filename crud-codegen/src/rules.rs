//! Validation rule inference for the store and update requests.

use indexmap::IndexMap;
use serde::Serialize;

use crate::classify::{ColumnDescriptor, ColumnKind};

/// Which request a rule set validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleContext {
    Create,
    Update,
}

/// Whether a field must be present in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Presence {
    Required,
    Sometimes,
}

impl Presence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Required => "required",
            Presence::Sometimes => "sometimes",
        }
    }
}

impl RuleContext {
    fn presence(&self) -> Presence {
        match self {
            RuleContext::Create => Presence::Required,
            RuleContext::Update => Presence::Sometimes,
        }
    }
}

/// A validation rule for one column: a presence flag followed by type constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub presence: Presence,
    pub constraints: Vec<String>,
}

impl Rule {
    /// The same constraints with presence relaxed to `sometimes`.
    pub fn relaxed(&self) -> Rule {
        Rule {
            presence: Presence::Sometimes,
            constraints: self.constraints.clone(),
        }
    }

    /// Pipe-delimited form, e.g. `required|string|max:255`.
    pub fn render(&self) -> String {
        std::iter::once(self.presence.as_str())
            .chain(self.constraints.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Column name to rule, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    pub context: RuleContext,
    pub rules: IndexMap<String, Rule>,
}

impl RuleSet {
    pub fn get(&self, column: &str) -> Option<&Rule> {
        self.rules.get(column)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }
}

/// Build the rule set for a request context.
///
/// Identifier and timestamp columns are filled by the database and never
/// validated. Every other column gets a rule, in input order.
pub fn build_rules(descriptors: &[ColumnDescriptor], context: RuleContext) -> RuleSet {
    let presence = context.presence();
    let rules = descriptors
        .iter()
        .filter(|desc| !desc.kind().is_managed())
        .map(|desc| {
            let rule = Rule {
                presence,
                constraints: constraints_for(desc),
            };
            (desc.name().to_string(), rule)
        })
        .collect();

    RuleSet { context, rules }
}

fn constraints_for(desc: &ColumnDescriptor) -> Vec<String> {
    match desc.kind() {
        ColumnKind::Text => std::iter::once("string".to_string())
            .chain(desc.max_length().map(|max| format!("max:{}", max)))
            .collect(),
        ColumnKind::Numeric => vec!["numeric".to_string()],
        ColumnKind::Boolean => vec!["boolean".to_string()],
        ColumnKind::ForeignKey => {
            let table = desc.references().unwrap_or_default();
            vec![format!("exists:{},id", table)]
        }
        ColumnKind::Identifier | ColumnKind::Timestamp | ColumnKind::Unknown => Vec::new(),
    }
}
