//! Name-based lookup of rule engines.

use tracing::debug;

use crate::error::{AutomatonError, AutomatonResult};
use crate::rule::{RuleKind, RuleOfExistence};

/// Resolves rule names to fresh engine instances.
///
/// Names are exact and case-sensitive. Unknown names are always an error;
/// there is no silent fallback rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleFactory;

impl RuleFactory {
    /// Create a new engine for `name`.
    pub fn create(name: &str) -> AutomatonResult<RuleOfExistence> {
        let kind = RuleKind::from_name(name).ok_or_else(|| AutomatonError::InvalidRuleName {
            name: name.to_string(),
        })?;
        debug!(rule = kind.name(), "rule_created");
        Ok(RuleOfExistence::new(kind))
    }

    /// All recognized rule names.
    pub fn names() -> Vec<&'static str> {
        RuleKind::ALL.iter().map(RuleKind::name).collect()
    }

    pub fn contains(name: &str) -> bool {
        RuleKind::from_name(name).is_some()
    }
}
