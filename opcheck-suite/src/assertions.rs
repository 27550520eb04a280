//! Response assertions
//!
//! Each check returns `Err(AssertionError)` instead of panicking so the
//! runner can record the failure and move on to the next scenario.

use std::fmt::Debug;

use opcheck_core::domain::operation::{OperationStatus, TaskStatus};
use opcheck_core::dto::operation::CreateOperationResponse;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::info;

/// A failed expectation about a response
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssertionError {
    #[error("incorrect value of '{field}': expected {expected}, got {actual}")]
    Mismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("'{field}' must be present: {reason}")]
    Missing { field: String, reason: String },
}

/// Check that `actual` equals `expected`, naming `field` on failure
pub fn assert_equal<T>(actual: &T, expected: &T, field: &str) -> Result<(), AssertionError>
where
    T: PartialEq + Debug + ?Sized,
{
    if actual == expected {
        Ok(())
    } else {
        Err(AssertionError::Mismatch {
            field: field.to_string(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        })
    }
}

pub fn assert_status_code(actual: StatusCode, expected: StatusCode) -> Result<(), AssertionError> {
    assert_equal(&actual, &expected, "status_code")
}

/// Check a create response: `success` is true and a task id was issued
pub fn assert_create_operation(response: &CreateOperationResponse) -> Result<(), AssertionError> {
    info!("Check create operation response");

    assert_equal(&response.success, &true, "success")?;

    if response.task_id.trim().is_empty() {
        return Err(AssertionError::Missing {
            field: "task_id".to_string(),
            reason: format!("expected a non-empty task id, got {:?}", response.task_id),
        });
    }

    info!("Task ID: {}", response.task_id);
    Ok(())
}

/// Check a status response against the status the caller expects
///
/// A `COMPLETED` expectation also requires `result`, a `FAILED` one
/// requires `error`.
pub fn assert_operation(
    response: &OperationStatus,
    expected_status: &TaskStatus,
) -> Result<(), AssertionError> {
    info!("Check operation status: {}", expected_status);

    assert_equal(response.status.as_str(), expected_status.as_str(), "status")?;

    if let Some(task_id) = &response.task_id {
        info!("Task ID: {}", task_id);
    }

    assert_terminal_payload(response)
}

/// Check a snapshot returned by the poller
///
/// Any status other than the initial one is acceptable here; only the
/// payload that status promises is checked.
pub fn assert_settled(response: &OperationStatus) -> Result<(), AssertionError> {
    info!("Check settled operation: {}", response.status);
    assert_terminal_payload(response)
}

fn assert_terminal_payload(response: &OperationStatus) -> Result<(), AssertionError> {
    match response.status {
        TaskStatus::Completed => match &response.result {
            Some(result) => {
                info!("Operation result: {}", serde_json::Value::Object(result.clone()));
                Ok(())
            }
            None => Err(AssertionError::Missing {
                field: "result".to_string(),
                reason: "a COMPLETED operation must carry a result".to_string(),
            }),
        },
        TaskStatus::Failed => match response.error.as_deref() {
            Some(error) if !error.is_empty() => {
                info!("Operation error: {}", error);
                Ok(())
            }
            _ => Err(AssertionError::Missing {
                field: "error".to_string(),
                reason: "a FAILED operation must carry an error message".to_string(),
            }),
        },
        _ => Ok(()),
    }
}
