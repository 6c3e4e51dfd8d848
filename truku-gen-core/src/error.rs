use thiserror::Error;

use crate::model::phonology::SlotKind;

/// Errors raised by the language generator.
///
/// Most user mistakes in the game are not errors at all (unknown menu codes,
/// unknown rule names, removing an absent grapheme). This enum only covers
/// states the generator cannot work with.
#[derive(Debug, Error)]
pub enum Error {
	/// A syllable slot was drawn from an empty grapheme set.
	#[error("cannot generate: the {0} set is empty")]
	EmptyInventory(SlotKind),

	/// The inventory has no syllable shape to choose from.
	#[error("cannot generate: no syllable shapes defined")]
	NoSyllableShapes,

	/// Removing this grapheme would leave its set empty.
	#[error("cannot remove '{grapheme}': it is the last {kind}")]
	LastGrapheme { kind: SlotKind, grapheme: String },

	/// A syllable shape pattern contained something other than `C` or `V`.
	#[error("invalid syllable shape letter '{0}', expected 'C' or 'V'")]
	InvalidShape(char),

	#[error("unknown affix kind '{0}', expected 'prefix' or 'suffix'")]
	UnknownAffixKind(String),

	#[error("unknown word order '{0}', expected one of VOS, SVO, SOV, VSO")]
	UnknownWordOrder(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
