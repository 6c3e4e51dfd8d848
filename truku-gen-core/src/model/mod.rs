//! The layers of a generated language.
//!
//! - Sound inventory and syllable shapes (`PhoneInventory`)
//! - Affixation rules (`AffixRuleTable`)
//! - Word order and question marker (`SyntaxTemplate`)
//! - Generated words sorted by category (`Vocabulary`)

/// Consonant/vowel sets and random syllable and word generation.
///
/// Generation fails cleanly on an empty grapheme set instead of panicking.
pub mod phonology;

/// Named prefix/suffix rules, looked up by first match.
pub mod morphology;

/// Sentence assembly under one of four basic word orders.
pub mod syntax;

/// Unclassified, verb and noun word buckets.
pub mod vocabulary;
