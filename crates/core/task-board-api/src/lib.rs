//! Wire types and HTTP client for the task board data endpoint
//!
//! The backend exposes a single collection endpoint (`/api/data/` by default):
//!
//! - `GET` returns `{"tasks": [...]}`
//! - `POST` with `{"title", "description"}` creates a task and echoes it back
//!
//! [`TaskClient`] talks to it over `reqwest`, which uses the browser's fetch
//! API on `wasm32` and a native connection pool elsewhere. Callers that need
//! to swap the transport (tests, alternative backends) program against the
//! [`TaskApi`] trait instead.
//!
//! # Examples
//!
//! ```rust,no_run
//! use task_board_api::{NewTask, TaskApi, TaskClient};
//!
//! # async fn run() -> task_board_api::ApiResult<()> {
//! let client = TaskClient::from_origin("http://localhost:8000", "/api/data/")?;
//! let created = client.create_task(&NewTask::from_input("Buy milk", "")?).await?;
//! let all = client.list_tasks().await?;
//! assert!(all.iter().any(|task| task.id == created.id));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_API_PATH, TaskClient};
pub use error::{ApiError, ApiResult};
pub use types::{NewTask, Task, TaskId, TaskList};

/// Operations the page needs from the task backend
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// the single UI thread.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Create a task and return the record as stored by the backend
    async fn create_task(&self, task: &NewTask) -> ApiResult<Task>;

    /// Fetch the full task collection
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;
}
