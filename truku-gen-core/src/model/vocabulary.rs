use std::fmt;

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Vocabulary bucket a word lives in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	Unclassified,
	Verb,
	Noun,
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Category::Unclassified => "unclassified",
			Category::Verb => "verb",
			Category::Noun => "noun",
		})
	}
}

/// Generated words sorted into buckets, each keeping insertion order.
///
/// Words enter as `Unclassified`, are reclassified once into `Verb` or
/// `Noun`, and are then only read.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
	unclassified: Vec<String>,
	verbs: Vec<String>,
	nouns: Vec<String>,
}

impl Vocabulary {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn words(&self, category: Category) -> &[String] {
		match category {
			Category::Unclassified => &self.unclassified,
			Category::Verb => &self.verbs,
			Category::Noun => &self.nouns,
		}
	}

	pub fn push(&mut self, category: Category, word: String) {
		self.bucket_mut(category).push(word);
	}

	/// Moves every unclassified word into `Verb` or `Noun` with a fair coin
	/// flip per word, then empties the unclassified bucket.
	pub fn reclassify<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		for word in std::mem::take(&mut self.unclassified) {
			let category = if rng.random_bool(0.5) { Category::Verb } else { Category::Noun };
			debug!("'{word}' classified as {category}");
			self.bucket_mut(category).push(word);
		}
	}

	/// A uniformly chosen word of the given category, if the bucket is not empty.
	pub fn sample<R: Rng + ?Sized>(&self, category: Category, rng: &mut R) -> Option<&str> {
		self.words(category).choose(rng).map(String::as_str)
	}

	fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
		match category {
			Category::Unclassified => &mut self.unclassified,
			Category::Verb => &mut self.verbs,
			Category::Noun => &mut self.nouns,
		}
	}
}
