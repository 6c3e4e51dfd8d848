use crate::model::phonology::SlotKind;

/// A menu of single-code commands.
///
/// `MENU` is the dispatch table: input code, command, label. Any code not in
/// the table means "continue to the next stage".
pub trait MenuCommand: Copy + 'static {
	const MENU: &'static [(&'static str, Self, &'static str)];

	fn parse(code: &str) -> Option<Self> {
		Self::MENU
			.iter()
			.find(|(menu_code, _, _)| *menu_code == code.trim())
			.map(|&(_, command, _)| command)
	}

	/// One-line rendering of the menu, e.g. `(1) add consonant  (2) ...`.
	fn menu_line() -> String {
		Self::MENU
			.iter()
			.map(|(code, _, label)| format!("({code}) {label}"))
			.chain(std::iter::once("(Enter) continue".to_owned()))
			.collect::<Vec<_>>()
			.join("  ")
	}
}

/// Phonology stage actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhonologyCommand {
	Add(SlotKind),
	Remove(SlotKind),
}

impl MenuCommand for PhonologyCommand {
	const MENU: &'static [(&'static str, Self, &'static str)] = &[
		("1", PhonologyCommand::Add(SlotKind::Consonant), "add consonant"),
		("2", PhonologyCommand::Remove(SlotKind::Consonant), "remove consonant"),
		("3", PhonologyCommand::Add(SlotKind::Vowel), "add vowel"),
		("4", PhonologyCommand::Remove(SlotKind::Vowel), "remove vowel"),
	];
}

/// Morphology stage actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphologyCommand {
	AddRule,
	ListRules,
}

impl MenuCommand for MorphologyCommand {
	const MENU: &'static [(&'static str, Self, &'static str)] = &[
		("1", MorphologyCommand::AddRule, "add rule"),
		("2", MorphologyCommand::ListRules, "list rules"),
	];
}
