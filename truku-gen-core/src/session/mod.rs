//! Interactive session driving the three construction stages.
//!
//! A session is a strictly linear state machine:
//! `Welcome -> Phonology -> Morphology -> Syntax -> Showcase -> Terminated`.
//! All mutable language state lives in one [`SessionContext`] handed to each
//! stage in turn.

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::Result;
use crate::io::Console;
use crate::model::morphology::AffixRuleTable;
use crate::model::phonology::PhoneInventory;
use crate::model::syntax::SyntaxTemplate;
use crate::model::vocabulary::Vocabulary;

/// Menu codes and their dispatch tables.
pub mod command;

/// Stage bodies.
pub mod stage;

/// Fixed showcase sentences.
pub mod showcase;

pub use stage::{AffixDemo, MorphologyReport, SampleSentence};

/// The language under construction.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionContext {
	pub inventory: PhoneInventory,
	pub rules: AffixRuleTable,
	pub template: SyntaxTemplate,
	pub vocabulary: Vocabulary,
}

/// Session states, in the only order they can be visited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
	Welcome,
	Phonology,
	Morphology,
	Syntax,
	Showcase,
	Terminated,
}

impl Stage {
	/// The following state. `Terminated` stays terminated.
	pub fn next(self) -> Stage {
		match self {
			Stage::Welcome => Stage::Phonology,
			Stage::Phonology => Stage::Morphology,
			Stage::Morphology => Stage::Syntax,
			Stage::Syntax => Stage::Showcase,
			Stage::Showcase | Stage::Terminated => Stage::Terminated,
		}
	}
}

/// Everything a finished session generated.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
	/// Words generated in the phonology stage, in order.
	pub words: Vec<String>,
	pub morphology: MorphologyReport,
	pub sentences: Vec<SampleSentence>,
	/// The showcase sentences as printed.
	pub showcase: Vec<String>,
}

/// One single-player run of the game.
///
/// # Responsibilities
/// - Own the language context, console and random generator
/// - Visit every stage exactly once, in order
/// - Collect what each stage generated into a [`SessionReport`]
pub struct Session<C, R> {
	context: SessionContext,
	config: GameConfig,
	console: C,
	rng: R,
	stage: Stage,
}

impl<C: Console, R: Rng> Session<C, R> {
	/// A session starting from the default language.
	pub fn new(config: GameConfig, console: C, rng: R) -> Self {
		Self::with_context(SessionContext::default(), config, console, rng)
	}

	/// A session starting from a prepared language.
	pub fn with_context(context: SessionContext, config: GameConfig, console: C, rng: R) -> Self {
		Self { context, config, console, rng, stage: Stage::Welcome }
	}

	pub fn context(&self) -> &SessionContext {
		&self.context
	}

	pub fn console(&self) -> &C {
		&self.console
	}

	pub fn stage(&self) -> Stage {
		self.stage
	}

	/// Runs every remaining stage until `Terminated`.
	///
	/// # Errors
	/// Fails on console I/O errors, or if generation hits an empty inventory.
	pub fn run(&mut self) -> Result<SessionReport> {
		let mut report = SessionReport::default();
		while self.stage != Stage::Terminated {
			info!("entering stage {:?}", self.stage);
			match self.stage {
				Stage::Welcome => stage::welcome(&mut self.console)?,
				Stage::Phonology => {
					report.words = stage::phonology(&mut self.context, &mut self.console, &mut self.rng, &self.config)?;
				}
				Stage::Morphology => {
					report.morphology = stage::morphology(&mut self.context, &mut self.console, &mut self.rng)?;
				}
				Stage::Syntax => {
					report.sentences = stage::syntax(&mut self.context, &mut self.console, &mut self.rng, &self.config)?;
				}
				Stage::Showcase => report.showcase = stage::showcase(&mut self.console)?,
				Stage::Terminated => (),
			}
			self.stage = self.stage.next();
		}
		info!("session finished");
		Ok(report)
	}

	/// Splits the session back into its parts.
	pub fn into_parts(self) -> (SessionContext, C, R) {
		(self.context, self.console, self.rng)
	}
}
