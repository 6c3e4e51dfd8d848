use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use log::{debug, warn};
use rand::Rng;
use rand::seq::{IndexedRandom, IteratorRandom};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default consonant graphemes.
pub const DEFAULT_CONSONANTS: [&str; 11] = ["p", "t", "k", "b", "g", "m", "n", "s", "h", "l", "r"];

/// Default vowel graphemes.
pub const DEFAULT_VOWELS: [&str; 5] = ["i", "u", "e", "o", "a"];

/// Default syllable shapes, in pattern notation.
pub const DEFAULT_SHAPES: [&str; 4] = ["CV", "CVC", "V", "CVV"];

/// Number of syllables drawn for a word when no count is given.
const WORD_SYLLABLES: RangeInclusive<usize> = 1..=3;

/// Kind of a syllable slot, and of the grapheme set that fills it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
	Consonant,
	Vowel,
}

impl fmt::Display for SlotKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SlotKind::Consonant => f.write_str("consonant"),
			SlotKind::Vowel => f.write_str("vowel"),
		}
	}
}

/// An ordered sequence of slots, written as a pattern such as `"CVC"`.
///
/// `"CVV"` is one consonant followed by two independently drawn vowels.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SyllableShape {
	slots: Vec<SlotKind>,
}

impl SyllableShape {
	pub fn new(slots: Vec<SlotKind>) -> Self {
		Self { slots }
	}

	pub fn slots(&self) -> &[SlotKind] {
		&self.slots
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}
}

impl FromStr for SyllableShape {
	type Err = Error;

	/// Parses a pattern of `C` / `V` letters (case-insensitive).
	fn from_str(pattern: &str) -> Result<Self> {
		let slots = pattern
			.chars()
			.map(|c| match c.to_ascii_uppercase() {
				'C' => Ok(SlotKind::Consonant),
				'V' => Ok(SlotKind::Vowel),
				other => Err(Error::InvalidShape(other)),
			})
			.collect::<Result<Vec<_>>>()?;
		Ok(Self { slots })
	}
}

impl fmt::Display for SyllableShape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for slot in &self.slots {
			f.write_str(match slot {
				SlotKind::Consonant => "C",
				SlotKind::Vowel => "V",
			})?;
		}
		Ok(())
	}
}

/// The sound inventory of the language being built.
///
/// Holds a consonant set, a vowel set and the syllable shapes used to
/// assemble random syllables and words.
///
/// ## Invariants
/// - Graphemes are never empty strings
/// - Once a set holds a grapheme it cannot be emptied through `remove_*`;
///   removing the last member is refused with [`Error::LastGrapheme`]
///
/// Sets are ordered so that listings are sorted and a seeded RNG always
/// yields the same words.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PhoneInventory {
	consonants: BTreeSet<String>,
	vowels: BTreeSet<String>,
	syllable_shapes: Vec<SyllableShape>,
}

impl Default for PhoneInventory {
	fn default() -> Self {
		use SlotKind::{Consonant as C, Vowel as V};
		Self::new(
			DEFAULT_CONSONANTS,
			DEFAULT_VOWELS,
			vec![
				SyllableShape::new(vec![C, V]),
				SyllableShape::new(vec![C, V, C]),
				SyllableShape::new(vec![V]),
				SyllableShape::new(vec![C, V, V]),
			],
		)
	}
}

impl PhoneInventory {
	/// Builds an inventory from arbitrary sets. Empty graphemes are dropped.
	///
	/// Nothing here forces the sets to be non-empty: generation from such an
	/// inventory reports [`Error::EmptyInventory`].
	pub fn new<C, V>(consonants: C, vowels: V, syllable_shapes: Vec<SyllableShape>) -> Self
	where
		C: IntoIterator,
		C::Item: Into<String>,
		V: IntoIterator,
		V::Item: Into<String>,
	{
		let clean = |graphemes: Vec<String>| -> BTreeSet<String> {
			graphemes.into_iter().filter(|g| !g.is_empty()).collect()
		};
		Self {
			consonants: clean(consonants.into_iter().map(Into::into).collect()),
			vowels: clean(vowels.into_iter().map(Into::into).collect()),
			syllable_shapes,
		}
	}

	/// Consonants in sorted order.
	pub fn consonants(&self) -> impl Iterator<Item = &str> {
		self.consonants.iter().map(String::as_str)
	}

	/// Vowels in sorted order.
	pub fn vowels(&self) -> impl Iterator<Item = &str> {
		self.vowels.iter().map(String::as_str)
	}

	pub fn syllable_shapes(&self) -> &[SyllableShape] {
		&self.syllable_shapes
	}

	/// Returns `true` if `grapheme` belongs to the set of the given kind.
	pub fn contains(&self, kind: SlotKind, grapheme: &str) -> bool {
		self.set(kind).contains(grapheme)
	}

	pub fn add_consonant(&mut self, grapheme: &str) -> bool {
		self.add(SlotKind::Consonant, grapheme)
	}

	pub fn remove_consonant(&mut self, grapheme: &str) -> Result<bool> {
		self.remove(SlotKind::Consonant, grapheme)
	}

	pub fn add_vowel(&mut self, grapheme: &str) -> bool {
		self.add(SlotKind::Vowel, grapheme)
	}

	pub fn remove_vowel(&mut self, grapheme: &str) -> Result<bool> {
		self.remove(SlotKind::Vowel, grapheme)
	}

	/// Adds a grapheme to the set of the given kind.
	///
	/// Returns `false` (no change) for an empty grapheme or one already present.
	pub fn add(&mut self, kind: SlotKind, grapheme: &str) -> bool {
		if grapheme.is_empty() {
			return false;
		}
		let inserted = self.set_mut(kind).insert(grapheme.to_owned());
		if inserted {
			debug!("added {kind} '{grapheme}'");
		}
		inserted
	}

	/// Removes a grapheme from the set of the given kind.
	///
	/// - Returns `Ok(false)` if the grapheme is not in the set (no-op)
	/// - Returns `Ok(true)` once removed
	///
	/// # Errors
	/// Returns [`Error::LastGrapheme`] if the grapheme is the only member left.
	pub fn remove(&mut self, kind: SlotKind, grapheme: &str) -> Result<bool> {
		let set = self.set_mut(kind);
		if !set.contains(grapheme) {
			return Ok(false);
		}
		if set.len() == 1 {
			warn!("refused to remove the last {kind} '{grapheme}'");
			return Err(Error::LastGrapheme { kind, grapheme: grapheme.to_owned() });
		}
		set.remove(grapheme);
		debug!("removed {kind} '{grapheme}'");
		Ok(true)
	}

	/// Picks a shape and fills each of its slots.
	///
	/// Returns the chosen shape together with the grapheme drawn for each slot,
	/// in slot order.
	///
	/// # Errors
	/// - [`Error::NoSyllableShapes`] if there is no shape to choose from
	/// - [`Error::EmptyInventory`] if a slot's grapheme set is empty
	pub fn draw_syllable<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(&SyllableShape, Vec<&str>)> {
		let shape = self.syllable_shapes.choose(rng).ok_or(Error::NoSyllableShapes)?;
		let graphemes = shape
			.slots()
			.iter()
			.map(|&kind| {
				self.set(kind)
					.iter()
					.choose(rng)
					.map(String::as_str)
					.ok_or(Error::EmptyInventory(kind))
			})
			.collect::<Result<Vec<_>>>()?;
		Ok((shape, graphemes))
	}

	/// Generates one random syllable.
	pub fn generate_syllable<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		let (_, graphemes) = self.draw_syllable(rng)?;
		Ok(graphemes.concat())
	}

	/// Generates a word of `syllable_count` syllables, or of 1 to 3 syllables
	/// when no count is given. Each syllable picks its own shape.
	pub fn generate_word<R: Rng + ?Sized>(&self, syllable_count: Option<usize>, rng: &mut R) -> Result<String> {
		let count = syllable_count.unwrap_or_else(|| rng.random_range(WORD_SYLLABLES));
		(0..count).map(|_| self.generate_syllable(rng)).collect()
	}

	fn set(&self, kind: SlotKind) -> &BTreeSet<String> {
		match kind {
			SlotKind::Consonant => &self.consonants,
			SlotKind::Vowel => &self.vowels,
		}
	}

	fn set_mut(&mut self, kind: SlotKind) -> &mut BTreeSet<String> {
		match kind {
			SlotKind::Consonant => &mut self.consonants,
			SlotKind::Vowel => &mut self.vowels,
		}
	}
}
