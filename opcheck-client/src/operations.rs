//! Operation-related API endpoints

use crate::error::Result;
use crate::{ApiResponse, OperationsClient};
use opcheck_core::domain::operation::OperationStatus;
use opcheck_core::dto::operation::{CreateOperation, CreateOperationResponse};

/// Paths of the operation service endpoints
pub mod routes {
    /// Accepts a create request and queues the operation
    pub const VALIDATE_DATA: &str = "/api/data";
    /// Status lookup, suffixed with `/{task_id}`
    pub const GET_RESULT: &str = "/api/result";
}

impl OperationsClient {
    // =============================================================================
    // Raw Endpoints
    // =============================================================================

    /// Submit a create request and return the response unchecked
    pub async fn create_operation_api(&self, req: &CreateOperation) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, routes::VALIDATE_DATA);
        let response = self.send(self.client.post(&url).json(req)).await?;

        Self::into_api_response(response).await
    }

    /// Look up an operation and return the response unchecked
    pub async fn get_operation_api(&self, task_id: &str) -> Result<ApiResponse> {
        let url = format!("{}{}/{}", self.base_url, routes::GET_RESULT, task_id);
        let response = self.send(self.client.get(&url)).await?;

        Self::into_api_response(response).await
    }

    // =============================================================================
    // Typed Endpoints
    // =============================================================================

    /// Create a new operation
    ///
    /// # Arguments
    /// * `req` - The operation creation request
    ///
    /// # Returns
    /// The service's acknowledgement with the new task id
    ///
    /// # Example
    /// ```no_run
    /// # use opcheck_client::OperationsClient;
    /// # use opcheck_core::fake::Fake;
    /// # use opcheck_core::domain::state::State;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = OperationsClient::new("http://localhost:8000");
    /// let request = Fake::seeded(1).operation_request(State::Florida)?;
    /// let created = client.create_operation(&request).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_operation(&self, req: &CreateOperation) -> Result<CreateOperationResponse> {
        let url = format!("{}{}", self.base_url, routes::VALIDATE_DATA);
        let response = self.send(self.client.post(&url).json(req)).await?;

        self.handle_response(response).await
    }

    /// Get the current status of an operation
    ///
    /// # Arguments
    /// * `task_id` - The task id returned by `create_operation`
    pub async fn get_operation(&self, task_id: &str) -> Result<OperationStatus> {
        let url = format!("{}{}/{}", self.base_url, routes::GET_RESULT, task_id);
        let response = self.send(self.client.get(&url)).await?;

        self.handle_response(response).await
    }
}
