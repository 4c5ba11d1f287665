//! Command implementations

pub mod check;
pub mod play;
pub mod round;
pub mod setup;
pub mod survey;

pub use check::{CheckResult, check_word};
pub use play::{COMMAND_PREFIX, PlayCommand, PlayError, parse_command, run_play};
pub use round::{RoundReport, generate_round};
pub use setup::{
    SessionOptions, SettingsOverrides, build_session, load_catalog, resolve_settings,
};
pub use survey::{SurveyResult, run_survey, summarize};
