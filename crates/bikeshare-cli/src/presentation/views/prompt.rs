use crate::presentation::Style;
use std::fmt;

pub struct QuestionView<'a> {
    pub question: &'a str,
    pub options: &'a [&'a str],
    pub style: Style,
}

impl fmt::Display for QuestionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--> {}", self.style.heading(self.question))?;
        writeln!(
            f,
            "{}",
            self.style
                .muted("  [your options is (either numeric or string) ..]")
        )?;
        for (idx, option) in self.options.iter().enumerate() {
            writeln!(f, "   {:2}. '{}'", idx + 1, self.style.value(option))?;
        }
        write!(f, "  your choice = ")
    }
}

pub struct InvalidAnswerView {
    pub style: Style,
}

impl fmt::Display for InvalidAnswerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\n--> {}",
            self.style
                .warning("INVALID ANSWER. Type '0' to abort or '1' to try again.")
        )
    }
}

pub struct RetryPromptView;

impl fmt::Display for RetryPromptView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  your choice = ")
    }
}

pub struct GiveUpView {
    pub style: Style,
}

impl fmt::Display for GiveUpView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.style.warning("WELL... I GUESS YOU ARE GIVING UP!"))
    }
}
