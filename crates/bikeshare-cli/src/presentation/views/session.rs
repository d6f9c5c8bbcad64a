use super::RULE;
use crate::handlers::session::SessionEnd;
use crate::ui::AbortReason;
use bikeshare_types::FilterSelection;
use std::fmt;

pub struct GreetingView;

impl fmt::Display for GreetingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hello! Let's explore some US bikeshare data!")
    }
}

pub struct SelectionView<'a> {
    pub selection: &'a FilterSelection,
}

impl fmt::Display for SelectionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "your selection: {}", self.selection)
    }
}

pub struct RestartQuestionView;

impl fmt::Display for RestartQuestionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nWould you like to restart? Enter yes or no.")
    }
}

pub struct FarewellView {
    pub end: SessionEnd,
}

impl fmt::Display for FarewellView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            SessionEnd::Finished => Ok(()),
            SessionEnd::Aborted(AbortReason::Requested) => writeln!(f, "Aborted. Bye!"),
            // The give-up notice has already been printed.
            SessionEnd::Aborted(AbortReason::GaveUp) => Ok(()),
            SessionEnd::Aborted(AbortReason::InputClosed) => {
                writeln!(f, "\nNo more input. Bye!")
            }
        }
    }
}
