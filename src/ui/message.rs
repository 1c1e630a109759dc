use crate::model::ResultCount;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Quit,

    // Focus
    FocusNext,
    FocusPrevious,

    // Search field
    InsertChar(char),
    Paste(String),
    DeleteChar,
    ClearQuery,

    // Count selector
    CountUp,
    CountDown,
    SetCount(ResultCount),

    // Results
    ScrollUp,
    ScrollDown,
}
