//! Scenarios
//!
//! A scenario is one named end-to-end check against the operation service.
//! The catalog is fixed; `Scenario::all` lists it in run order, including one
//! create scenario per supported jurisdiction.

mod operations;

use std::fmt;

use opcheck_client::{ClientError, OperationsClient, PollConfig, PollError};
use opcheck_core::domain::state::State;
use opcheck_core::fake::Fake;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::assertions::AssertionError;
use crate::schema::SchemaError;

/// Everything a scenario needs to talk to the service
pub struct SuiteContext {
    pub client: OperationsClient,
    pub fake: Fake<StdRng>,
    pub poll: PollConfig,
}

impl SuiteContext {
    pub fn new(client: OperationsClient, fake: Fake<StdRng>, poll: PollConfig) -> Self {
        Self { client, fake, poll }
    }
}

/// Reasons a scenario can fail
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to build request payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Client(#[from] ClientError),

    #[error("assertion failed: {0}")]
    Assertion(#[from] AssertionError),

    #[error("schema check failed: {0}")]
    Schema(#[from] SchemaError),

    #[error("operation did not settle: {0}")]
    NotSettled(PollError),

    #[error("poll could not start: {0}")]
    InvalidPoll(PollError),

    #[error("operation {task_id} failed on the service side: {message}")]
    OperationFailed { task_id: String, message: String },
}

impl From<PollError> for ScenarioError {
    fn from(err: PollError) -> Self {
        match err {
            PollError::Client(e) => ScenarioError::Client(e),
            invalid @ PollError::InvalidInput(_) => ScenarioError::InvalidPoll(invalid),
            timeout @ PollError::Timeout { .. } => ScenarioError::NotSettled(timeout),
        }
    }
}

/// Grouping labels used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Operations,
    Regression,
    Polling,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Operations => "operations",
            Tag::Regression => "regression",
            Tag::Polling => "polling",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Freshly created operation reads back as PENDING
    GetOperation,
    /// Create an operation in Florida
    CreateOperation,
    /// Create an operation in the given jurisdiction
    CreateOperationForState(State),
    /// Create an operation and poll until it leaves PENDING
    PollOperation,
}

impl Scenario {
    /// The full catalog in run order
    pub fn all() -> Vec<Scenario> {
        let mut scenarios = vec![Scenario::GetOperation, Scenario::CreateOperation];
        scenarios.extend(State::ALL.iter().copied().map(Scenario::CreateOperationForState));
        scenarios.push(Scenario::PollOperation);
        scenarios
    }

    /// Scenarios whose name contains `filter` or that carry a tag equal to it
    pub fn matching(filter: Option<&str>) -> Vec<Scenario> {
        Self::all()
            .into_iter()
            .filter(|scenario| filter.is_none_or(|f| scenario.matches(f)))
            .collect()
    }

    pub fn name(&self) -> String {
        match self {
            Scenario::GetOperation => "get_operation".to_string(),
            Scenario::CreateOperation => "create_operation".to_string(),
            Scenario::CreateOperationForState(state) => format!("create_operation[{}]", state),
            Scenario::PollOperation => "poll_operation".to_string(),
        }
    }

    /// Human-readable title for reports
    pub fn title(&self) -> String {
        match self {
            Scenario::GetOperation => "Get operation with status PENDING".to_string(),
            Scenario::CreateOperation => "Create operation".to_string(),
            Scenario::CreateOperationForState(state) => {
                format!("Create operation with different states: {}", state.name())
            }
            Scenario::PollOperation => "Poll operation until it settles".to_string(),
        }
    }

    pub fn tags(&self) -> &'static [Tag] {
        match self {
            Scenario::PollOperation => &[Tag::Operations, Tag::Polling],
            _ => &[Tag::Operations, Tag::Regression],
        }
    }

    pub fn matches(&self, filter: &str) -> bool {
        self.name().contains(filter) || self.tags().iter().any(|tag| tag.as_str() == filter)
    }

    /// Run the scenario against the service
    pub async fn run(&self, ctx: &mut SuiteContext) -> Result<(), ScenarioError> {
        match self {
            Scenario::GetOperation => operations::get_operation(ctx).await,
            Scenario::CreateOperation => operations::create_operation(ctx, State::Florida).await,
            Scenario::CreateOperationForState(state) => {
                operations::create_operation(ctx, *state).await
            }
            Scenario::PollOperation => operations::poll_operation(ctx).await,
        }
    }
}
