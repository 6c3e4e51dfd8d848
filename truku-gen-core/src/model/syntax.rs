use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default question marker.
pub const DEFAULT_QUESTION_MARKER: &str = "ka";

/// Basic clause word order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordOrder {
	/// Verb, object, subject. Truku leans this way.
	#[default]
	Vos,
	Svo,
	Sov,
	Vso,
}

impl WordOrder {
	pub const ALL: [WordOrder; 4] = [WordOrder::Vos, WordOrder::Svo, WordOrder::Sov, WordOrder::Vso];

	/// Places the three slots in this order.
	fn arrange<'a>(&self, subject: &'a str, verb: &'a str, object: &'a str) -> [&'a str; 3] {
		match self {
			WordOrder::Vos => [verb, object, subject],
			WordOrder::Svo => [subject, verb, object],
			WordOrder::Sov => [subject, object, verb],
			WordOrder::Vso => [verb, subject, object],
		}
	}
}

impl FromStr for WordOrder {
	type Err = Error;

	/// Accepts exactly `VOS`, `SVO`, `SOV` or `VSO`.
	fn from_str(s: &str) -> Result<Self> {
		match s {
			"VOS" => Ok(WordOrder::Vos),
			"SVO" => Ok(WordOrder::Svo),
			"SOV" => Ok(WordOrder::Sov),
			"VSO" => Ok(WordOrder::Vso),
			_ => Err(Error::UnknownWordOrder(s.to_owned())),
		}
	}
}

impl fmt::Display for WordOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			WordOrder::Vos => "VOS",
			WordOrder::Svo => "SVO",
			WordOrder::Sov => "SOV",
			WordOrder::Vso => "VSO",
		})
	}
}

/// Word order and question marker used to assemble sentences.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SyntaxTemplate {
	word_order: WordOrder,
	question_marker: String,
}

impl Default for SyntaxTemplate {
	fn default() -> Self {
		Self {
			word_order: WordOrder::default(),
			question_marker: DEFAULT_QUESTION_MARKER.to_owned(),
		}
	}
}

impl SyntaxTemplate {
	pub fn word_order(&self) -> WordOrder {
		self.word_order
	}

	pub fn question_marker(&self) -> &str {
		&self.question_marker
	}

	/// Sets the word order from a token. Anything but the four known orders is
	/// ignored and the current order kept.
	///
	/// Returns `true` if the token was accepted.
	pub fn set_word_order(&mut self, token: &str) -> bool {
		match token.parse::<WordOrder>() {
			Ok(order) => {
				debug!("word order {} -> {}", self.word_order, order);
				self.word_order = order;
				true
			}
			Err(_) => false,
		}
	}

	/// Sets the question marker. An empty marker keeps the current one.
	pub fn set_question_marker(&mut self, marker: &str) -> bool {
		if marker.is_empty() {
			return false;
		}
		debug!("question marker '{}' -> '{}'", self.question_marker, marker);
		self.question_marker = marker.to_owned();
		true
	}

	/// Arranges subject, verb and object according to the word order.
	///
	/// Empty slots are skipped and the remaining words joined by single
	/// spaces, so an empty object never leaves a double or trailing space.
	pub fn generate_sentence(&self, subject: &str, verb: &str, object: &str) -> String {
		self.word_order
			.arrange(subject.trim(), verb.trim(), object.trim())
			.into_iter()
			.filter(|word| !word.is_empty())
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Appends the question marker as a trailing word to a declarative sentence.
	pub fn question_form(&self, sentence: &str) -> String {
		format!("{} {}", sentence, self.question_marker)
	}
}
