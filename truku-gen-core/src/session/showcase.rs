/// Hand-written Truku-style sentences shown at the end of every session.
///
/// They are fixed and never generated from the session's language.
pub const SHOWCASE_SENTENCES: [&str; 6] = [
	"mita laqi bubu",
	"miying Tama",
	"ma-lukus laqi",
	"pita qhuni idaw",
	"s-malu tama laqi",
	"miyax bubu qhuni",
];
