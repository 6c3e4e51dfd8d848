//! The five interactive stages of a session.
//!
//! Each stage reads and mutates the shared [`SessionContext`], talks to the
//! player through a [`Console`] and returns what it generated.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::io::Console;
use crate::model::morphology::{AffixKind, AffixRuleTable};
use crate::model::phonology::SlotKind;
use crate::model::vocabulary::Category;
use super::SessionContext;
use super::command::{MenuCommand, MorphologyCommand, PhonologyCommand};
use super::showcase::SHOWCASE_SENTENCES;

/// Rule applied to the sampled verb in the morphology demonstration.
pub const VERB_DEMO_RULE: &str = "past";

/// Rule applied to the sampled noun in the morphology demonstration.
pub const NOUN_DEMO_RULE: &str = "nominal";

/// A rule applied to a sampled word.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AffixDemo {
	pub base: String,
	pub rule: String,
	pub result: String,
}

/// Demonstrations printed at the end of the morphology stage.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MorphologyReport {
	pub verb: Option<AffixDemo>,
	pub noun: Option<AffixDemo>,
}

/// A generated sentence with its question form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SampleSentence {
	pub declarative: String,
	pub question: String,
}

pub fn welcome<C: Console>(console: &mut C) -> Result<()> {
	console.write_line(&"=".repeat(60))?;
	console.write_line("Truku Language Creator")?;
	console.write_line(&"=".repeat(60))?;
	console.write_line("Build a toy language modeled on Truku, one layer at a time:")?;
	console.write_line("1. Phonology -> 2. Morphology -> 3. Syntax -> Final showcase")?;
	console.pause("\nPress Enter to start...")?;
	Ok(())
}

/// Lets the player edit the sound inventory, then generates sample words
/// into the unclassified bucket.
pub fn phonology<C, R>(context: &mut SessionContext, console: &mut C, rng: &mut R, config: &GameConfig) -> Result<Vec<String>>
where
	C: Console,
	R: Rng + ?Sized,
{
	console.write_line("\n[Stage 1] Phonology")?;
	console.write_line(&"-".repeat(40))?;
	console.write_line(&format!("Consonants: {}", context.inventory.consonants().collect::<Vec<_>>().join(", ")))?;
	console.write_line(&format!("Vowels: {}", context.inventory.vowels().collect::<Vec<_>>().join(", ")))?;

	loop {
		console.write_line("\nOptions:")?;
		console.write_line(&PhonologyCommand::menu_line())?;
		let Some(command) = PhonologyCommand::parse(&console.ask("Choose an action: ")?) else {
			break;
		};
		match command {
			PhonologyCommand::Add(kind) => {
				let grapheme = console.ask(&format!("{} to add: ", capitalized(kind)))?;
				if context.inventory.add(kind, &grapheme) {
					console.write_line(&format!("Added {kind} {grapheme}"))?;
				}
			}
			PhonologyCommand::Remove(kind) => {
				let grapheme = console.ask(&format!("{} to remove: ", capitalized(kind)))?;
				match context.inventory.remove(kind, &grapheme) {
					Ok(true) => console.write_line(&format!("Removed {kind} {grapheme}"))?,
					Ok(false) => (),
					Err(e @ Error::LastGrapheme { .. }) => console.write_line(&e.to_string())?,
					Err(e) => return Err(e),
				}
			}
		}
	}

	console.write_line("\nWords generated from your sound system:")?;
	let mut words = Vec::with_capacity(config.sample_words);
	for i in 0..config.sample_words {
		let word = context.inventory.generate_word(None, rng)?;
		console.write_line(&format!("{}. {}", i + 1, word))?;
		context.vocabulary.push(Category::Unclassified, word.clone());
		words.push(word);
	}
	console.pause("\nPress Enter for stage 2...")?;
	Ok(words)
}

/// Lets the player add affix rules, sorts the generated words into verbs and
/// nouns, and demonstrates one rule on each.
///
/// The default rules are added only if the player leaves the table empty.
pub fn morphology<C, R>(context: &mut SessionContext, console: &mut C, rng: &mut R) -> Result<MorphologyReport>
where
	C: Console,
	R: Rng + ?Sized,
{
	console.write_line("\n[Stage 2] Morphology")?;
	console.write_line(&"-".repeat(40))?;
	let defaults = AffixRuleTable::default_rules()
		.iter()
		.map(|rule| format!("{} ({})", rule.marker, rule.gloss))
		.collect::<Vec<_>>()
		.join(", ");
	console.write_line(&format!("Default rules: {defaults}"))?;

	loop {
		console.write_line("\nOptions:")?;
		console.write_line(&MorphologyCommand::menu_line())?;
		let Some(command) = MorphologyCommand::parse(&console.ask("Choose an action: ")?) else {
			break;
		};
		match command {
			MorphologyCommand::AddRule => {
				let name = console.ask("Rule name: ")?;
				let kind = console.ask("Kind (prefix/suffix): ")?;
				let marker = console.ask("Marker: ")?;
				let gloss = console.ask("Meaning: ")?;
				match kind.parse::<AffixKind>() {
					Ok(kind) => {
						context.rules.add_rule(&name, kind, &marker, &gloss);
						console.write_line(&format!("Added {kind} {marker} ({gloss})"))?;
					}
					Err(e) => console.write_line(&format!("{e}; rule not added"))?,
				}
			}
			MorphologyCommand::ListRules => {
				if context.rules.is_empty() {
					console.write_line("No rules yet.")?;
				} else {
					console.write_line("Current rules:")?;
					for rule in context.rules.rules() {
						console.write_line(&format!(" - {rule}"))?;
					}
				}
			}
		}
	}

	if context.rules.seed_defaults() {
		debug!("no rules defined, using the defaults");
	}

	context.vocabulary.reclassify(rng);

	console.write_line("\nMorphology demo:")?;
	let report = MorphologyReport {
		verb: demonstrate(context, Category::Verb, VERB_DEMO_RULE, rng),
		noun: demonstrate(context, Category::Noun, NOUN_DEMO_RULE, rng),
	};
	if let Some(demo) = &report.verb {
		console.write_line(&format!("Verb, perfective: {} -> {}", demo.base, demo.result))?;
	}
	if let Some(demo) = &report.noun {
		console.write_line(&format!("Noun, nominalized: {} -> {}", demo.base, demo.result))?;
	}
	console.pause("\nPress Enter for stage 3...")?;
	Ok(report)
}

/// Lets the player change word order and question marker, then builds sample
/// sentences from the classified vocabulary.
///
/// Subjects and objects come from the nouns, verbs from the verbs; an empty
/// bucket is replaced by a freshly generated word.
pub fn syntax<C, R>(context: &mut SessionContext, console: &mut C, rng: &mut R, config: &GameConfig) -> Result<Vec<SampleSentence>>
where
	C: Console,
	R: Rng + ?Sized,
{
	console.write_line("\n[Stage 3] Syntax")?;
	console.write_line(&"-".repeat(40))?;
	console.write_line(&format!("Current word order: {} (Truku leans VOS)", context.template.word_order()))?;
	console.write_line(&format!("Question marker: {}", context.template.question_marker()))?;

	let order = console.ask("Change word order? (VOS/SVO/SOV/VSO, Enter keeps it): ")?;
	context.template.set_word_order(&order);
	let marker = console.ask("Change question marker? (e.g. ka, ma, ?; Enter keeps it): ")?;
	context.template.set_question_marker(&marker);

	console.write_line("\nSample sentences:")?;
	let mut sentences = Vec::with_capacity(config.sample_sentences);
	for i in 0..config.sample_sentences {
		let subject = pick_word(context, Category::Noun, rng)?;
		let verb = pick_word(context, Category::Verb, rng)?;
		let object = pick_word(context, Category::Noun, rng)?;

		let declarative = context.template.generate_sentence(&subject, &verb, &object);
		let question = context.template.question_form(&declarative);
		console.write_line(&format!("{}. {}", i + 1, declarative))?;
		console.write_line(&format!("   Question: {question}"))?;
		sentences.push(SampleSentence { declarative, question });
	}
	console.pause("\nPress Enter for the final showcase...")?;
	Ok(sentences)
}

/// Prints the fixed showcase sentences.
pub fn showcase<C: Console>(console: &mut C) -> Result<Vec<String>> {
	console.write_line("\nFinal showcase")?;
	console.write_line(&"=".repeat(50))?;
	console.write_line("Truku-style sentences:")?;
	for (i, sentence) in SHOWCASE_SENTENCES.iter().enumerate() {
		console.write_line(&format!("{}. {}", i + 1, sentence))?;
	}
	Ok(SHOWCASE_SENTENCES.iter().map(|s| (*s).to_owned()).collect())
}

fn demonstrate<R: Rng + ?Sized>(context: &SessionContext, category: Category, rule: &str, rng: &mut R) -> Option<AffixDemo> {
	let base = context.vocabulary.sample(category, rng)?;
	Some(AffixDemo {
		base: base.to_owned(),
		rule: rule.to_owned(),
		result: context.rules.apply_rule(base, rule),
	})
}

fn pick_word<R: Rng + ?Sized>(context: &SessionContext, category: Category, rng: &mut R) -> Result<String> {
	match context.vocabulary.sample(category, rng) {
		Some(word) => Ok(word.to_owned()),
		None => context.inventory.generate_word(None, rng),
	}
}

fn capitalized(kind: SlotKind) -> &'static str {
	match kind {
		SlotKind::Consonant => "Consonant",
		SlotKind::Vowel => "Vowel",
	}
}
