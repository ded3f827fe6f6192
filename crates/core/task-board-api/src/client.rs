//! `reqwest`-backed implementation of [`TaskApi`]

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::TaskApi;
use crate::error::{ApiError, ApiResult};
use crate::types::{NewTask, Task, TaskList};

/// Path of the task collection endpoint on the backend
pub const DEFAULT_API_PATH: &str = "/api/data/";

/// HTTP client for the task collection endpoint
///
/// No timeout, retry or caching: each call is exactly one round trip.
#[derive(Debug, Clone)]
pub struct TaskClient {
    http_client: Client,
    endpoint: Url,
}

impl TaskClient {
    /// Create a client for an absolute endpoint URL
    pub fn new(endpoint: Url) -> Self {
        Self {
            http_client: Client::new(),
            endpoint,
        }
    }

    /// Create a client from a page origin (`https://host:port`) and an API path
    pub fn from_origin(origin: &str, api_path: &str) -> ApiResult<Self> {
        let endpoint = Url::parse(origin)?.join(api_path)?;
        Ok(Self::new(endpoint))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Check the status, then decode the body as JSON
    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Task endpoint returned an error status");
            return Err(ApiError::status(status.as_u16(), body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl TaskApi for TaskClient {
    async fn create_task(&self, task: &NewTask) -> ApiResult<Task> {
        debug!(endpoint = %self.endpoint, title = task.title(), "Creating task");

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(task)
            .send()
            .await?;
        let created: Task = Self::decode(response).await?;

        info!(id = %created.id, "Task created");
        Ok(created)
    }

    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        debug!(endpoint = %self.endpoint, "Listing tasks");

        let response = self.http_client.get(self.endpoint.clone()).send().await?;
        let list: TaskList = Self::decode(response).await?;

        debug!(count = list.tasks.len(), "Tasks loaded");
        Ok(list.tasks)
    }
}
