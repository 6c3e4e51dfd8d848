//! End-to-end sessions driven through a scripted console.

use rand::SeedableRng;
use rand::rngs::StdRng;

use truku_gen_core::io::ScriptedConsole;
use truku_gen_core::model::morphology::AffixRuleTable;
use truku_gen_core::model::phonology::{PhoneInventory, SlotKind};
use truku_gen_core::model::syntax::WordOrder;
use truku_gen_core::model::vocabulary::Category;
use truku_gen_core::session::Stage;
use truku_gen_core::session::showcase::SHOWCASE_SENTENCES;
use truku_gen_core::{GameConfig, Session, SessionContext, SessionReport};

fn run(script: &[&str], seed: u64) -> (SessionReport, SessionContext, ScriptedConsole) {
	run_with(SessionContext::default(), GameConfig::default(), script, seed)
}

fn run_with(context: SessionContext, config: GameConfig, script: &[&str], seed: u64) -> (SessionReport, SessionContext, ScriptedConsole) {
	let console = ScriptedConsole::new(script.iter().copied());
	let mut session = Session::with_context(context, config, console, StdRng::seed_from_u64(seed));
	let report = session.run().unwrap();
	assert_eq!(session.stage(), Stage::Terminated);
	let (context, console, _) = session.into_parts();
	(report, context, console)
}

fn sorted(mut words: Vec<String>) -> Vec<String> {
	words.sort();
	words
}

// =============================================================================
// Default walkthrough
// =============================================================================

#[test]
fn default_session_without_edits() {
	let (report, context, console) = run(&[], 2024);

	assert_eq!(report.words.len(), 5);
	assert_eq!(report.sentences.len(), 3);
	for sentence in &report.sentences {
		assert_eq!(sentence.question, format!("{} ka", sentence.declarative));
	}
	assert_eq!(report.showcase, SHOWCASE_SENTENCES);

	// Default rules were seeded
	assert_eq!(context.rules.rules(), &AffixRuleTable::default_rules());

	// Every word ends up in exactly one of verb / noun
	assert!(context.vocabulary.words(Category::Unclassified).is_empty());
	let mut classified = context.vocabulary.words(Category::Verb).to_vec();
	classified.extend_from_slice(context.vocabulary.words(Category::Noun));
	assert_eq!(sorted(classified), sorted(report.words.clone()));

	// The transcript ends with the numbered showcase
	let output = console.output();
	let tail: Vec<String> = output[output.len() - 6..].to_vec();
	let expected: Vec<String> = SHOWCASE_SENTENCES
		.iter()
		.enumerate()
		.map(|(i, s)| format!("{}. {}", i + 1, s))
		.collect();
	assert_eq!(tail, expected);
	assert_eq!(console.remaining_input(), 0);
}

#[test]
fn default_session_sentences_follow_vos() {
	let (report, context, _) = run(&[], 77);
	let verbs = context.vocabulary.words(Category::Verb);
	let nouns = context.vocabulary.words(Category::Noun);

	for sentence in &report.sentences {
		let tokens: Vec<&str> = sentence.declarative.split_whitespace().collect();
		assert_eq!(tokens.len(), 3, "{}", sentence.declarative);
		if !verbs.is_empty() {
			assert!(verbs.iter().any(|v| v == tokens[0]));
		}
		if !nouns.is_empty() {
			assert!(nouns.iter().any(|n| n == tokens[1]));
			assert!(nouns.iter().any(|n| n == tokens[2]));
		}
	}
}

#[test]
fn morphology_demo_uses_past_and_nominal() {
	let (report, _, _) = run(&[], 5);
	if let Some(demo) = &report.morphology.verb {
		assert_eq!(demo.rule, "past");
		assert_eq!(demo.result, format!("{}-in", demo.base));
	}
	if let Some(demo) = &report.morphology.noun {
		assert_eq!(demo.rule, "nominal");
		assert_eq!(demo.result, format!("{}-an", demo.base));
	}
	assert!(report.morphology.verb.is_some() || report.morphology.noun.is_some());
}

#[test]
fn same_seed_same_session() {
	let (first, _, _) = run(&[], 31337);
	let (second, _, _) = run(&[], 31337);
	assert_eq!(first, second);
}

// =============================================================================
// Phonology stage
// =============================================================================

#[test]
fn phonology_edits_shape_the_words() {
	let script = [
		"",           // welcome
		"1", "q",     // add consonant q
		"4", "a",     // remove vowel a
		"2", "zz",    // remove absent consonant: no-op
		"3", "",      // add empty vowel: no-op
		"",           // done
	];
	let (report, context, console) = run(&script, 11);

	assert!(context.inventory.contains(SlotKind::Consonant, "q"));
	assert!(!context.inventory.contains(SlotKind::Vowel, "a"));
	assert_eq!(context.inventory.vowels().collect::<Vec<_>>(), vec!["e", "i", "o", "u"]);
	assert!(console.printed("Added consonant q"));
	assert!(console.printed("Removed vowel a"));
	assert!(!console.printed("zz"));

	let allowed: Vec<&str> = context.inventory.consonants().chain(context.inventory.vowels()).collect();
	for word in &report.words {
		assert!(!word.is_empty());
		for c in word.chars() {
			assert!(allowed.contains(&c.to_string().as_str()), "'{c}' in {word}");
		}
	}
}

#[test]
fn last_vowel_cannot_be_removed() {
	let context = SessionContext {
		inventory: PhoneInventory::new(["t", "k"], ["a"], vec!["CV".parse().unwrap()]),
		..SessionContext::default()
	};
	let (report, context, console) = run_with(context, GameConfig::default(), &["", "4", "a"], 3);

	assert!(console.printed("cannot remove 'a': it is the last vowel"));
	assert_eq!(context.inventory.vowels().collect::<Vec<_>>(), vec!["a"]);
	for word in &report.words {
		assert_eq!(word.len() % 2, 0);
		assert!((2..=6).contains(&word.len()), "{word}");
		assert!(word.chars().skip(1).step_by(2).all(|c| c == 'a'), "{word}");
		assert!(word.chars().step_by(2).all(|c| c == 't' || c == 'k'), "{word}");
	}
}

#[test]
fn inventory_is_listed_sorted() {
	let (_, _, console) = run(&[], 1);
	assert!(console.printed("Consonants: b, g, h, k, l, m, n, p, r, s, t"));
	assert!(console.printed("Vowels: a, e, i, o, u"));
	assert!(console.printed("(1) add consonant  (2) remove consonant  (3) add vowel  (4) remove vowel  (Enter) continue"));
}

// =============================================================================
// Morphology stage
// =============================================================================

#[test]
fn player_rule_prevents_default_seeding() {
	let script = [
		"", "", "", // welcome, phonology menu, pause
		"1", "plural", "prefix", "r-", "plural",
		"2",
	];
	let (report, context, console) = run(&script, 8);

	assert_eq!(context.rules.len(), 1);
	assert!(console.printed("Added prefix r- (plural)"));
	assert!(console.printed(" - plural: prefix 'r-' (plural)"));
	if let Some(demo) = &report.morphology.verb {
		assert_eq!(demo.result, demo.base);
	}
	if let Some(demo) = &report.morphology.noun {
		assert_eq!(demo.result, demo.base);
	}
}

#[test]
fn rule_with_unknown_kind_is_not_added() {
	let script = ["", "", "", "1", "x", "infix", "m", "g"];
	let (_, context, console) = run(&script, 9);

	assert!(console.printed("unknown affix kind 'infix'"));
	// Nothing was added, so the defaults were seeded
	assert_eq!(context.rules.rules(), &AffixRuleTable::default_rules());
}

#[test]
fn listing_an_empty_table() {
	let (_, context, console) = run(&["", "", "", "2"], 10);
	assert!(console.printed("No rules yet."));
	assert_eq!(context.rules.len(), 3);
}

// =============================================================================
// Syntax stage
// =============================================================================

#[test]
fn word_order_and_marker_can_be_changed() {
	let script = ["", "", "", "", "", "SOV", "?"];
	let (report, context, console) = run(&script, 12);

	assert_eq!(context.template.word_order(), WordOrder::Sov);
	assert_eq!(context.template.question_marker(), "?");
	assert!(console.printed("Current word order: VOS"));

	let verbs = context.vocabulary.words(Category::Verb);
	for sentence in &report.sentences {
		assert!(sentence.question.ends_with(" ?"));
		let tokens: Vec<&str> = sentence.declarative.split_whitespace().collect();
		if !verbs.is_empty() {
			assert!(verbs.iter().any(|v| v == tokens[2]));
		}
	}
}

#[test]
fn invalid_word_order_keeps_default() {
	let script = ["", "", "", "", "", "xyz", ""];
	let (report, context, _) = run(&script, 13);
	assert_eq!(context.template.word_order(), WordOrder::Vos);
	assert_eq!(context.template.question_marker(), "ka");
	assert!(report.sentences.iter().all(|s| s.question.ends_with(" ka")));
}

#[test]
fn empty_buckets_fall_back_to_fresh_words() {
	let config = GameConfig { sample_words: 0, ..GameConfig::default() };
	let (report, context, _) = run_with(SessionContext::default(), config, &[], 14);

	assert!(report.words.is_empty());
	assert!(context.vocabulary.words(Category::Verb).is_empty());
	assert!(context.vocabulary.words(Category::Noun).is_empty());
	assert_eq!(report.morphology.verb, None);
	assert_eq!(report.morphology.noun, None);
	assert_eq!(report.sentences.len(), 3);
	for sentence in &report.sentences {
		assert_eq!(sentence.declarative.split_whitespace().count(), 3);
	}
}

#[test]
fn sample_counts_follow_config() {
	let config = GameConfig { sample_words: 2, sample_sentences: 1, seed: None };
	let (report, _, _) = run_with(SessionContext::default(), config, &[], 15);
	assert_eq!(report.words.len(), 2);
	assert_eq!(report.sentences.len(), 1);
}
