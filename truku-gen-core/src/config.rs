use std::env;

use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Environment variable holding an optional RNG seed.
pub const SEED_VAR: &str = "TRUKU_SEED";

/// Session settings.
///
/// # Fields
/// - `seed`: fixes the random generator so a session can be replayed
/// - `sample_words`: words generated at the end of the phonology stage
/// - `sample_sentences`: sentences generated at the end of the syntax stage
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
	pub seed: Option<u64>,
	pub sample_words: usize,
	pub sample_sentences: usize,
}

impl Default for GameConfig {
	fn default() -> Self {
		Self {
			seed: None,
			sample_words: 5,
			sample_sentences: 3,
		}
	}
}

impl GameConfig {
	/// Default settings, with the seed taken from `TRUKU_SEED` when set.
	pub fn from_env() -> Self {
		Self::default().with_seed_var(env::var(SEED_VAR).ok().as_deref())
	}

	/// Applies a raw seed value. An unparsable value is logged and ignored.
	fn with_seed_var(mut self, value: Option<&str>) -> Self {
		if let Some(raw) = value {
			match raw.trim().parse::<u64>() {
				Ok(seed) => self.seed = Some(seed),
				Err(_) => warn!("ignoring {SEED_VAR}={raw:?}: not an unsigned integer"),
			}
		}
		self
	}

	/// Random generator for a session: seeded if a seed is set, from the OS otherwise.
	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::Rng;

	#[test]
	fn defaults() {
		let config = GameConfig::default();
		assert_eq!(config.seed, None);
		assert_eq!(config.sample_words, 5);
		assert_eq!(config.sample_sentences, 3);
	}

	#[test]
	fn seed_variable_parsing() {
		assert_eq!(GameConfig::default().with_seed_var(Some(" 42 ")).seed, Some(42));
		assert_eq!(GameConfig::default().with_seed_var(Some("forty-two")).seed, None);
		assert_eq!(GameConfig::default().with_seed_var(None).seed, None);
	}

	#[test]
	fn seeded_rng_is_reproducible() {
		let config = GameConfig { seed: Some(9), ..GameConfig::default() };
		let a: u64 = config.rng().random();
		let b: u64 = config.rng().random();
		assert_eq!(a, b);
	}
}
