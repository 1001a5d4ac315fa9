use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(String),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(resource: &Resource<Result<T, String>>) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(message)) => ViewState::Error(message.clone()),
            None => ViewState::Error("Something went wrong. Please try again.".to_string()),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
