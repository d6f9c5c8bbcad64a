//! Validated question/answer prompt.
//!
//! An answer is accepted either as a 1-based option number or as the option
//! text itself (case-insensitive, surrounding whitespace ignored). An invalid
//! answer gets exactly one follow-up line: `1` re-asks the question, `0`
//! aborts, anything else gives up. Aborting is reported to the caller as
//! [`PromptOutcome::Aborted`]; ending the process is left to the outermost
//! layer.

use super::console::Console;
use crate::presentation::views::{GiveUpView, InvalidAnswerView, QuestionView, RetryPromptView};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The user typed `0` after an invalid answer.
    Requested,
    /// The user typed neither `0` nor `1` after an invalid answer.
    GaveUp,
    /// Standard input ended while waiting for an answer.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    Selected(T),
    Aborted(AbortReason),
}

/// Unwrap a `Selected` value or return the abort from the enclosing function.
macro_rules! selected {
    ($outcome:expr) => {
        match $outcome {
            $crate::ui::PromptOutcome::Selected(value) => value,
            $crate::ui::PromptOutcome::Aborted(reason) => {
                return Ok($crate::ui::PromptOutcome::Aborted(reason));
            }
        }
    };
}
pub(crate) use selected;

/// Index of the option `input` selects, if any.
pub fn match_answer(input: &str, options: &[&str]) -> Option<usize> {
    let input = input.trim();

    if let Ok(number) = input.parse::<i64>() {
        return usize::try_from(number)
            .ok()
            .filter(|n| (1..=options.len()).contains(n))
            .map(|n| n - 1);
    }

    let folded = input.to_lowercase();
    options.iter().position(|option| *option == folded)
}

/// Ask `question` until a valid option is chosen or the user aborts.
///
/// Returns the option exactly as it appears in `options`.
pub fn ask<'a, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
    options: &'a [&'a str],
) -> io::Result<PromptOutcome<&'a str>> {
    debug_assert!(!options.is_empty());
    let style = console.style();

    loop {
        console.print(QuestionView {
            question,
            options,
            style,
        })?;
        let Some(answer) = console.read_line()? else {
            return Ok(PromptOutcome::Aborted(AbortReason::InputClosed));
        };

        if let Some(idx) = match_answer(&answer, options) {
            tracing::debug!(question, answer = options[idx], "answer accepted");
            return Ok(PromptOutcome::Selected(options[idx]));
        }

        tracing::debug!(question, answer = %answer, "answer rejected");
        console.print(InvalidAnswerView { style })?;
        console.print(RetryPromptView)?;
        let Some(retry) = console.read_line()? else {
            return Ok(PromptOutcome::Aborted(AbortReason::InputClosed));
        };
        console.print("\n")?;

        match retry.as_str() {
            "1" => continue,
            "0" => return Ok(PromptOutcome::Aborted(AbortReason::Requested)),
            _ => {
                console.print(GiveUpView { style })?;
                return Ok(PromptOutcome::Aborted(AbortReason::GaveUp));
            }
        }
    }
}
