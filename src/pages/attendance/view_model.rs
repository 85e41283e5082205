use leptos::*;

use crate::api::types::AttendanceRecord;
use crate::api::{ApiClient, ApiError};
use crate::components::feedback::MessageState;
use crate::state::auth::use_api;

pub const LOAD_ERROR_FALLBACK: &str = "Failed to load attendance";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockDirection {
    In,
    Out,
}

impl ClockDirection {
    pub fn success_message(self) -> &'static str {
        match self {
            ClockDirection::In => "Checked in successfully",
            ClockDirection::Out => "Checked out successfully",
        }
    }

    pub fn failure_fallback(self) -> &'static str {
        match self {
            ClockDirection::In => "Check-in failed",
            ClockDirection::Out => "Check-out failed",
        }
    }
}

type ClockOutcome = Result<ClockDirection, (ClockDirection, ApiError)>;

/// Signals and actions behind the attendance panel. The record list reloads
/// whenever the token bumps, which happens after every successful clock event.
pub struct AttendanceModel {
    pub records: Resource<u32, Result<Vec<AttendanceRecord>, ApiError>>,
    pub clock: Action<ClockDirection, ClockOutcome>,
    pub notice: RwSignal<MessageState>,
}

pub fn use_attendance_model() -> AttendanceModel {
    let api = use_api();
    let reload = create_rw_signal(0u32);
    let notice = create_rw_signal(MessageState::default());

    let records = create_resource(move || reload.get(), {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            async move { api.list_attendance().await }
        }
    });

    let clock = create_action(move |direction: &ClockDirection| {
        let api = api.clone();
        let direction = *direction;
        async move {
            clock_request(&api, direction)
                .await
                .map(|_| direction)
                .map_err(|err| (direction, err))
        }
    });

    create_effect(move |_| match clock.value().get() {
        Some(Ok(direction)) => {
            notice.update(|n| n.set_success(direction.success_message()));
            reload.update(|token| *token = token.wrapping_add(1));
        }
        Some(Err((direction, err))) => {
            notice.update(|n| n.set_api_error(&err, direction.failure_fallback()));
        }
        None => {}
    });

    AttendanceModel {
        records,
        clock,
        notice,
    }
}

async fn clock_request(api: &ApiClient, direction: ClockDirection) -> Result<(), ApiError> {
    match direction {
        ClockDirection::In => api.check_in().await,
        ClockDirection::Out => api.check_out().await,
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::session::Session;
    use httpmock::prelude::*;
    use serde_json::json;

    fn authed(server: &MockServer) -> ApiClient {
        let session = Session::ephemeral();
        session.store("t-1");
        ApiClient::new_with_base_url(server.url("/api"), session)
    }

    #[tokio::test]
    async fn clock_request_posts_to_the_matching_endpoint() {
        let server = MockServer::start_async().await;
        let check_in = server.mock(|when, then| {
            when.method(POST).path("/api/attendance/check-in");
            then.status(200).json_body(json!({ "message": "ok" }));
        });
        let check_out = server.mock(|when, then| {
            when.method(POST).path("/api/attendance/check-out");
            then.status(200).json_body(json!({ "message": "ok" }));
        });

        let api = authed(&server);
        clock_request(&api, ClockDirection::In).await.unwrap();
        clock_request(&api, ClockDirection::Out).await.unwrap();

        assert_eq!(check_in.hits_async().await, 1);
        assert_eq!(check_out.hits_async().await, 1);
    }
}
