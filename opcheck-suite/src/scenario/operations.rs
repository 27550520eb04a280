//! Operation scenarios

use opcheck_client::OperationPoller;
use opcheck_core::domain::operation::{OperationStatus, TaskStatus};
use opcheck_core::domain::state::State;
use opcheck_core::dto::operation::CreateOperationResponse;
use reqwest::StatusCode;
use tracing::info;

use super::{ScenarioError, SuiteContext};
use crate::assertions::{
    assert_create_operation, assert_operation, assert_settled, assert_status_code,
};
use crate::schema::{schema_for, validate_json_schema};

/// Create an operation with default payload and return its task id
async fn create_fixture(ctx: &mut SuiteContext) -> Result<String, ScenarioError> {
    let request = ctx.fake.operation_request(State::default())?;
    let created = ctx.client.create_operation(&request).await?;
    assert_create_operation(&created)?;

    Ok(created.task_id)
}

pub(super) async fn get_operation(ctx: &mut SuiteContext) -> Result<(), ScenarioError> {
    let task_id = create_fixture(ctx).await?;

    let response = ctx.client.get_operation_api(&task_id).await?;
    assert_status_code(response.status, StatusCode::OK)?;

    let operation: OperationStatus = response.json()?;
    assert_operation(&operation, &TaskStatus::Pending)?;

    validate_json_schema(&response.value()?, &schema_for::<OperationStatus>())?;
    Ok(())
}

pub(super) async fn create_operation(
    ctx: &mut SuiteContext,
    state: State,
) -> Result<(), ScenarioError> {
    let request = ctx.fake.operation_request(state)?;

    let response = ctx.client.create_operation_api(&request).await?;
    assert_status_code(response.status, StatusCode::OK)?;

    let created: CreateOperationResponse = response.json()?;
    assert_create_operation(&created)?;

    info!(
        "Created operation {} for state {} ({})",
        created.task_id,
        state.name(),
        state.code()
    );

    validate_json_schema(&response.value()?, &schema_for::<CreateOperationResponse>())?;
    Ok(())
}

pub(super) async fn poll_operation(ctx: &mut SuiteContext) -> Result<(), ScenarioError> {
    let task_id = create_fixture(ctx).await?;

    let poller = OperationPoller::new(&ctx.client, ctx.poll);
    let settled = poller.poll(&task_id, &TaskStatus::Pending).await?;
    assert_settled(&settled)?;

    if settled.status == TaskStatus::Failed {
        return Err(ScenarioError::OperationFailed {
            task_id,
            message: settled.error.unwrap_or_default(),
        });
    }

    info!("Operation {} settled as {}", task_id, settled.status);
    Ok(())
}
