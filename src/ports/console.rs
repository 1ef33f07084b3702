// src/ports/console.rs
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use tracing::trace;

/// Where prompt replies come from.
///
/// Any [`BufRead`] works, which is what tests script with; the interactive terminal uses
/// [`crate::ports::TerminalInput`].
pub trait LineSource {
    /// Show `prompt` and read one line. `Ok(None)` once input is closed.
    fn read_line<W: Write>(&mut self, prompt: &str, output: &mut W) -> Result<Option<String>>;
}

impl<T: BufRead> LineSource for T {
    fn read_line<W: Write>(&mut self, prompt: &str, output: &mut W) -> Result<Option<String>> {
        write!(output, "{prompt}").context("Failed to write to output")?;
        output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = BufRead::read_line(self, &mut line).context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }
}

/// Line-oriented prompt/response over any line source and writer.
///
/// Retry loops live here, at the boundary; the parsing they retry is done by the pure
/// `parse_*` functions below so it can be tested on its own.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: LineSource, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` followed by a newline
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref()).context("Failed to write to output")
    }

    /// Show `prompt` and return the trimmed reply.
    ///
    /// A closed input is an error, so no prompt loop can spin forever.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        let Some(line) = self.input.read_line(prompt, &mut self.output)? else {
            bail!("Input closed while waiting for: {}", prompt.trim());
        };
        trace!(reply = %line.trim(), "Read input");
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the reply, printing its message after each rejection
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T> {
        loop {
            let reply = self.ask(prompt)?;
            match parse(&reply) {
                Ok(value) => return Ok(value),
                Err(message) => self.say(message)?,
            }
        }
    }

    /// Yes/no question; anything but "y" or "yes" counts as no
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(is_affirmative(&self.ask(prompt)?))
    }

    /// Wait for Enter
    pub fn pause(&mut self, prompt: &str) -> Result<()> {
        self.ask(prompt).map(|_| ())
    }

    /// Let the user pick one of `count` numbered entries; returns a zero-based index
    pub fn choose(&mut self, prompt: &str, count: usize) -> Result<usize> {
        self.ask_until(prompt, |reply| parse_menu_choice(reply, count))
    }
}

/// Parse a 1-based selection out of `count` entries into a zero-based index
pub fn parse_menu_choice(input: &str, count: usize) -> Result<usize, String> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("Please enter a number between 1 and {count}."))?;
    if choice == 0 || choice > count {
        return Err(format!("Please enter a number between 1 and {count}."));
    }
    Ok(choice - 1)
}

/// Parse a count within `min..=max`
pub fn parse_count(input: &str, min: usize, max: usize) -> Result<usize, String> {
    let count: usize = input
        .trim()
        .parse()
        .map_err(|_| "Please enter a valid number.".to_string())?;
    if count < min || count > max {
        return Err(format!("Please enter a number between {min} and {max}."));
    }
    Ok(count)
}

/// Parse free text that must not be blank
pub fn parse_non_empty(input: &str, what: &str) -> Result<String, String> {
    let text = input.trim();
    if text.is_empty() {
        return Err(format!("{what} cannot be empty!"));
    }
    Ok(text.to_string())
}

pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn given_valid_numbers_when_parsing_menu_choice_then_returns_zero_based_index() {
        assert_eq!(parse_menu_choice("1", 4), Ok(0));
        assert_eq!(parse_menu_choice(" 4 ", 4), Ok(3));
    }

    #[test]
    fn given_out_of_range_or_text_when_parsing_menu_choice_then_rejects() {
        assert!(parse_menu_choice("0", 4).is_err());
        assert!(parse_menu_choice("5", 4).is_err());
        assert!(parse_menu_choice("two", 4).is_err());
        assert!(parse_menu_choice("", 4).is_err());
        assert!(parse_menu_choice("-1", 4).is_err());
    }

    #[test]
    fn given_bounds_when_parsing_count_then_checks_inclusive_range() {
        assert_eq!(parse_count("1", 1, 20), Ok(1));
        assert_eq!(parse_count("20", 1, 20), Ok(20));
        assert!(parse_count("21", 1, 20).is_err());
        assert!(parse_count("ten", 1, 20).is_err());
    }

    #[test]
    fn given_answers_when_checking_affirmative_then_accepts_y_and_yes_only() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yeah"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn given_blank_text_when_parsing_non_empty_then_names_the_field() {
        assert_eq!(parse_non_empty("  x ", "Note"), Ok("x".to_string()));
        assert_eq!(
            parse_non_empty("   ", "Note"),
            Err("Note cannot be empty!".to_string())
        );
    }

    #[test]
    fn given_invalid_then_valid_reply_when_choosing_then_reprompts_once() {
        // Arrange
        let mut console = console("9\nabc\n2\n");

        // Act
        let choice = console.choose("Pick (1-3): ", 3).unwrap();

        // Assert
        assert_eq!(choice, 1);
        let printed = output(console);
        assert_eq!(printed.matches("Pick (1-3): ").count(), 3);
        assert_eq!(
            printed.matches("Please enter a number between 1 and 3.").count(),
            2
        );
    }

    #[test]
    fn given_closed_input_when_asking_then_returns_error() {
        let mut console = console("");

        let result = console.ask("Anything? ");

        assert!(result.is_err());
    }

    #[test]
    fn given_only_invalid_replies_when_choosing_then_stops_at_end_of_input() {
        let mut console = console("x\ny\n");

        let result = console.choose("Pick: ", 2);

        assert!(result.is_err());
    }

    /// Replays fixed replies without writing the prompt, the way a line editor does
    struct ScriptedSource(std::vec::IntoIter<&'static str>);

    impl LineSource for ScriptedSource {
        fn read_line<W: Write>(&mut self, _prompt: &str, _output: &mut W) -> Result<Option<String>> {
            Ok(self.0.next().map(String::from))
        }
    }

    #[test]
    fn given_editor_style_source_when_asking_then_trims_reply_and_errors_once_closed() {
        // Arrange
        let mut console = Console::new(ScriptedSource(vec!["  2  "].into_iter()), Vec::new());

        // Act
        let first = console.choose("Pick: ", 3).unwrap();
        let second = console.ask("Again? ");

        // Assert
        assert_eq!(first, 1);
        let message = second.unwrap_err().to_string();
        assert_eq!(message, "Input closed while waiting for: Again?");
        assert!(console.into_output().is_empty());
    }
}
