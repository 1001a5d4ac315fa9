mod build;
mod guidance;
mod home;
mod import;
mod practice;
mod results;
mod settings;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use guidance::{ExpertView, LearningView};
pub use home::HomeView;
pub use import::ImportView;
pub use practice::PracticeView;
pub use results::ResultsView;
pub use settings::SettingsView;
pub use state::{ViewState, view_state_from_resource};
