use super::client::ApiClient;
use super::error::ApiError;
use super::types::{AttendanceRecord, ListEnvelope};

impl ApiClient {
    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        let headers = self.auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .get(format!("{}/attendance", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        if response.status().is_success() {
            let envelope: ListEnvelope<AttendanceRecord> =
                response.json().await.map_err(ApiError::from_transport)?;
            Ok(envelope.into_items())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    pub async fn check_in(&self) -> Result<(), ApiError> {
        self.post_attendance_event("check-in").await
    }

    pub async fn check_out(&self) -> Result<(), ApiError> {
        self.post_attendance_event("check-out").await
    }

    // Clock events carry no body; the server keys on the bearer token.
    async fn post_attendance_event(&self, event: &str) -> Result<(), ApiError> {
        let headers = self.auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .post(format!("{}/attendance/{}", base_url, event))
            .headers(headers)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }
}
