use super::client::ApiClient;
use super::error::ApiError;
use super::types::{ListEnvelope, NewTask, Task, TaskPatch};

impl ApiClient {
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let headers = self.auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .get(format!("{}/tasks", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        if response.status().is_success() {
            let envelope: ListEnvelope<Task> =
                response.json().await.map_err(ApiError::from_transport)?;
            Ok(envelope.into_items())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<(), ApiError> {
        let headers = self.auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .post(format!("{}/tasks", base_url))
            .headers(headers)
            .json(task)
            .send()
            .await
            .map_err(|_| ApiError::Unreachable)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<(), ApiError> {
        let headers = self.auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http()
            .patch(format!("{}/tasks/{}", base_url, id))
            .headers(headers)
            .json(patch)
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
