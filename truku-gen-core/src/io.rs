use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Line-oriented console the game talks to.
///
/// Implemented over the real terminal by [`StdConsole`] and over a fixed
/// script by [`ScriptedConsole`].
pub trait Console {
	/// Prints `prompt` and reads one line, without its line terminator.
	///
	/// Returns `Ok(None)` at end of input.
	fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

	/// Prints one full line.
	fn write_line(&mut self, line: &str) -> io::Result<()>;

	/// Reads a line and trims it. End of input reads as an empty line.
	fn ask(&mut self, prompt: &str) -> io::Result<String> {
		Ok(self.read_line(prompt)?.map(|line| line.trim().to_owned()).unwrap_or_default())
	}

	/// Waits for the player to press Enter.
	fn pause(&mut self, prompt: &str) -> io::Result<()> {
		self.read_line(prompt).map(|_| ())
	}
}

/// Console over the process stdin/stdout.
pub struct StdConsole {
	stdin: io::StdinLock<'static>,
	stdout: io::Stdout,
}

impl StdConsole {
	pub fn new() -> Self {
		Self {
			stdin: io::stdin().lock(),
			stdout: io::stdout(),
		}
	}
}

impl Default for StdConsole {
	fn default() -> Self {
		Self::new()
	}
}

impl Console for StdConsole {
	fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
		write!(self.stdout, "{prompt}")?;
		self.stdout.flush()?;

		let mut line = String::new();
		if self.stdin.read_line(&mut line)? == 0 {
			// Keep the transcript on its own line once input is closed
			writeln!(self.stdout)?;
			return Ok(None);
		}
		Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
	}

	fn write_line(&mut self, line: &str) -> io::Result<()> {
		writeln!(self.stdout, "{line}")
	}
}

/// Console replaying a fixed list of input lines and recording output.
///
/// Once the script runs out every read returns end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
	input: VecDeque<String>,
	prompts: Vec<String>,
	output: Vec<String>,
}

impl ScriptedConsole {
	pub fn new<I>(input: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		Self {
			input: input.into_iter().map(Into::into).collect(),
			prompts: Vec::new(),
			output: Vec::new(),
		}
	}

	/// Every line written so far.
	pub fn output(&self) -> &[String] {
		&self.output
	}

	/// Every prompt shown so far.
	pub fn prompts(&self) -> &[String] {
		&self.prompts
	}

	/// Input lines not consumed yet.
	pub fn remaining_input(&self) -> usize {
		self.input.len()
	}

	/// `true` if some written line contains `needle`.
	pub fn printed(&self, needle: &str) -> bool {
		self.output.iter().any(|line| line.contains(needle))
	}
}

impl Console for ScriptedConsole {
	fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
		self.prompts.push(prompt.to_owned());
		Ok(self.input.pop_front())
	}

	fn write_line(&mut self, line: &str) -> io::Result<()> {
		self.output.push(line.to_owned());
		Ok(())
	}
}
