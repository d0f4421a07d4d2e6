//! Interactive selection over a line-based input stream.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::github::Repository;
use crate::remove::Selection;
use crate::remove::check::{Action, Answer, CheckWalk};

/// List every candidate and ask once. Only `y` selects the whole set.
pub fn confirm_all<R: BufRead, W: Write>(
    candidates: &[Repository],
    mut input: R,
    mut output: W,
) -> Result<Selection> {
    writeln!(output, "The following repos will be deleted:")?;
    for repo in candidates {
        writeln!(output, "{}", repo)?;
    }

    write!(
        output,
        "Are you sure you want to delete the following repos? y/n/q: "
    )?;
    output.flush()?;

    match read_line(&mut input)? {
        Some(line) if line.trim() == "y" => Ok(Selection::Delete(candidates.to_vec())),
        _ => Ok(Selection::Cancelled),
    }
}

/// Ask about each candidate in turn. End of input reads as an empty answer.
pub fn check_each<R: BufRead, W: Write>(
    candidates: &[Repository],
    mut input: R,
    mut output: W,
) -> Result<Selection> {
    let mut walk = CheckWalk::new(candidates);

    while let Some(repo) = walk.current() {
        write!(
            output,
            "Delete repository '{} - {}'? (y/n/q/s): ",
            repo.full_name, repo.description
        )?;
        output.flush()?;

        let answer = match read_line(&mut input)? {
            Some(line) => Answer::parse(&line),
            None => {
                writeln!(output)?;
                Answer::Other
            }
        };

        match walk.answer(answer) {
            Action::Mark(_) => writeln!(
                output,
                "Added repository for deletion. It will happen after you check ALL of them"
            )?,
            Action::Skip(_) => writeln!(output, "Skipping...")?,
            Action::Stop => writeln!(output, "Skipping all next repositories...")?,
            Action::Ignore(_) | Action::Abort | Action::Idle => {}
        }
    }

    Ok(walk.finish())
}

/// `None` at end of input. Bytes that are not UTF-8 are replaced, so they
/// classify as an unrecognized answer.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).into_owned()))
}
