use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::Navigator;
use prep_core::model::apply_append;
use services::{SessionBuilder, SessionPlan};

use crate::context::SharedState;
use crate::routes::Route;

/// Kick off an incremental session build.
///
/// The first question is awaited before navigating to practice; the rest
/// stream in on a detached task so the fill survives view unmounts. Appends
/// are guarded by the session id captured at creation, which drops stragglers
/// after the user tears the session down or starts a new build.
pub(crate) fn launch_build(
    builder: Arc<SessionBuilder>,
    plan: SessionPlan,
    shared: SharedState,
    nav: Navigator,
) {
    let mut building = shared.building;
    building.set(true);
    spawn_forever(async move {
        match builder.first(&plan).await {
            Ok(first) => {
                let build_id = first.id();
                let mut session_signal = shared.session;
                session_signal.set(Some(first));
                building.set(false);
                let _ = nav.push(Route::Practice {});

                builder
                    .fill_remaining(&plan, move |question| {
                        let mut slot = session_signal.write();
                        if slot.as_ref().is_some_and(|session| session.id() == build_id) {
                            *slot = apply_append(slot.take(), question);
                        }
                    })
                    .await;
            }
            Err(error) => {
                building.set(false);
                shared.report_error(error.to_string());
            }
        }
    });
}
