//! The interactive menu: pick a query, pick a letter, read the answer, repeat.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::index::{Letter, LetterIndex};
use crate::query::{self, Choice};

const MENU: &str = "\
Choose an option:
1. Retrieve all words starting with a given letter in sorted order along with their frequencies.
2. Find the most frequent word in a group.
3. Find the least frequent word in a group.
4. Exit.";

/// Runs the menu loop against `index`, reading selections from `input` and writing prompts and
/// answers to `output`. Returns when the user picks "Exit" or `input` runs out.
///
/// Bad selections and bad letters print a message and show the menu again.
///
/// # Examples
///
/// ```
/// use wordbst::{session, LetterIndex};
///
/// let index: LetterIndex = ["cat", "cat", "cow"].iter().collect();
/// let mut output = Vec::new();
///
/// session::run(&index, "2\nc\n4\n".as_bytes(), &mut output).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("Most frequent word starting with 'c':\ncat: 2\n"));
/// assert!(output.ends_with("Exiting the program.\n"));
/// ```
pub fn run(index: &LetterIndex, mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    loop {
        write!(output, "\n{}\n", MENU)?;
        let Some(selection) = prompt(&mut input, &mut output, "Enter your choice (1-4): ")? else {
            break;
        };

        let query = match selection.parse::<Choice>() {
            Ok(Choice::Ask(query)) => query,
            Ok(Choice::Exit) => {
                writeln!(output, "Exiting the program.")?;
                break;
            }
            Err(err) => {
                debug!(%err, "rejected menu choice");
                writeln!(output, "Invalid choice. Please select a valid option.")?;
                continue;
            }
        };

        let Some(letter) = prompt(&mut input, &mut output, "Enter the starting letter: ")? else {
            break;
        };
        match letter.parse::<Letter>() {
            Ok(letter) => {
                debug!(?query, %letter, "running query");
                writeln!(output, "{}", query::run(index, query, letter))?;
            }
            Err(err) => {
                debug!(%err, "rejected query letter");
                writeln!(output, "Please enter a single valid alphabet letter.")?;
            }
        }
    }

    output.flush()
}

/// Writes `message` and reads one line. `None` means the input is exhausted.
fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
