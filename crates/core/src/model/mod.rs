pub mod app_settings;
pub mod ids;
pub mod language;
pub mod question;
pub mod session;
pub mod solution;
pub mod verdict;

pub use app_settings::{AppSettings, AppSettingsDraft, AppSettingsError};
pub use ids::{QuestionId, SessionId};
pub use language::{Language, LanguageMap, ParseLanguageError};
pub use question::{Difficulty, Example, ParseDifficultyError, Question};
pub use session::{Session, apply_append};
pub use solution::{Approach, Solution};
pub use verdict::{ExampleRun, RunReport, RunStatus};
