mod prompt;
mod raw;
mod report;
mod session;

pub use prompt::{GiveUpView, InvalidAnswerView, QuestionView, RetryPromptView};
pub use raw::{EndOfDataView, RawChunkView};
pub use report::{
    DurationStatsView, ElapsedView, ReportTitleView, StationStatsView, TimeStatsView,
    UserStatsView,
};
pub use session::{FarewellView, GreetingView, RestartQuestionView, SelectionView};

/// Separator printed after each report and the filter summary.
pub const RULE: &str = "----------------------------------------";
