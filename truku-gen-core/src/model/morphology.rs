use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where an affix attaches to the base form.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffixKind {
	Prefix,
	Suffix,
}

impl FromStr for AffixKind {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"prefix" => Ok(AffixKind::Prefix),
			"suffix" => Ok(AffixKind::Suffix),
			_ => Err(Error::UnknownAffixKind(s.to_owned())),
		}
	}
}

impl fmt::Display for AffixKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AffixKind::Prefix => f.write_str("prefix"),
			AffixKind::Suffix => f.write_str("suffix"),
		}
	}
}

/// A named affixation rule, e.g. `past`: suffix `-in` (perfective).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AffixRule {
	pub name: String,
	pub kind: AffixKind,
	pub marker: String,
	pub gloss: String,
}

impl AffixRule {
	pub fn new(name: &str, kind: AffixKind, marker: &str, gloss: &str) -> Self {
		Self {
			name: name.to_owned(),
			kind,
			marker: marker.to_owned(),
			gloss: gloss.to_owned(),
		}
	}

	/// Attaches the marker to `base`.
	pub fn apply(&self, base: &str) -> String {
		match self.kind {
			AffixKind::Prefix => format!("{}{}", self.marker, base),
			AffixKind::Suffix => format!("{}{}", base, self.marker),
		}
	}
}

impl fmt::Display for AffixRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {} '{}' ({})", self.name, self.kind, self.marker, self.gloss)
	}
}

/// Ordered table of affix rules.
///
/// Rule names are not unique. Lookup returns the first rule with a matching
/// name, so a later rule reusing a name is shadowed.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AffixRuleTable {
	rules: Vec<AffixRule>,
}

impl AffixRuleTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// The three rules used when the player defines none.
	pub fn default_rules() -> [AffixRule; 3] {
		[
			AffixRule::new("negative", AffixKind::Prefix, "ma-", "negation"),
			AffixRule::new("past", AffixKind::Suffix, "-in", "perfective"),
			AffixRule::new("nominal", AffixKind::Suffix, "-an", "nominalization"),
		]
	}

	pub fn rules(&self) -> &[AffixRule] {
		&self.rules
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	/// Appends a rule. Duplicate names are kept (and shadowed by the first).
	pub fn add_rule(&mut self, name: &str, kind: AffixKind, marker: &str, gloss: &str) {
		let rule = AffixRule::new(name, kind, marker, gloss);
		debug!("added affix rule {rule}");
		self.rules.push(rule);
	}

	/// Adds the default rules, but only if the table is still empty.
	///
	/// Returns `true` if the defaults were added.
	pub fn seed_defaults(&mut self) -> bool {
		if !self.rules.is_empty() {
			return false;
		}
		self.rules.extend(Self::default_rules());
		debug!("seeded {} default affix rules", self.rules.len());
		true
	}

	/// First rule named `name`, if any.
	pub fn find(&self, name: &str) -> Option<&AffixRule> {
		self.rules.iter().find(|rule| rule.name == name)
	}

	/// Applies the rule named `rule_name` to `base`.
	///
	/// An unknown rule name leaves the word unchanged.
	pub fn apply_rule(&self, base: &str, rule_name: &str) -> String {
		match self.find(rule_name) {
			Some(rule) => rule.apply(base),
			None => base.to_owned(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn affix_kind_parsing() {
		assert_eq!("prefix".parse::<AffixKind>().unwrap(), AffixKind::Prefix);
		assert_eq!(" Suffix ".parse::<AffixKind>().unwrap(), AffixKind::Suffix);
		assert!(matches!("infix".parse::<AffixKind>(), Err(Error::UnknownAffixKind(_))));
	}

	#[test]
	fn prefix_and_suffix_application() {
		let mut table = AffixRuleTable::new();
		table.seed_defaults();
		assert_eq!(table.apply_rule("lukus", "negative"), "ma-lukus");
		assert_eq!(table.apply_rule("mita", "past"), "mita-in");
		assert_eq!(table.apply_rule("bubu", "nominal"), "bubu-an");
	}

	#[test]
	fn unknown_rule_returns_base() {
		let table = AffixRuleTable::new();
		assert_eq!(table.apply_rule("laqi", "past"), "laqi");
	}

	#[test]
	fn duplicate_names_are_shadowed() {
		let mut table = AffixRuleTable::new();
		table.add_rule("past", AffixKind::Suffix, "-un", "first");
		table.add_rule("past", AffixKind::Prefix, "s-", "second");
		assert_eq!(table.len(), 2);
		assert_eq!(table.apply_rule("malu", "past"), "malu-un");
	}

	#[test]
	fn defaults_only_seed_an_empty_table() {
		let mut table = AffixRuleTable::new();
		table.add_rule("plural", AffixKind::Prefix, "r-", "plural");
		assert!(!table.seed_defaults());
		assert_eq!(table.len(), 1);
		assert_eq!(table.apply_rule("tama", "past"), "tama");

		let mut empty = AffixRuleTable::new();
		assert!(empty.seed_defaults());
		assert!(!empty.seed_defaults());
		assert_eq!(empty.len(), 3);
	}

	#[test]
	fn rule_display() {
		let rule = AffixRule::new("past", AffixKind::Suffix, "-in", "perfective");
		assert_eq!(rule.to_string(), "past: suffix '-in' (perfective)");
	}
}
