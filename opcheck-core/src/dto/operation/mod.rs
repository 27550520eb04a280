//! Operation DTOs for the create and status endpoints

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::state::State;

/// Login details the service uses on the jurisdiction's filing site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Request to create a new operation
///
/// Built once per scenario and sent as-is. `data` is forwarded to the
/// service without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOperation {
    pub state: State,
    pub credentials: Option<Credentials>,
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl CreateOperation {
    pub fn new(
        state: State,
        credentials: Option<Credentials>,
        data: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            state,
            credentials,
            data,
        }
    }
}

/// Response to a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CreateOperationResponse {
    pub success: bool,
    pub task_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_operation_wire_format() {
        let mut data = serde_json::Map::new();
        data.insert("entityType".to_string(), json!("LLC"));

        let req = CreateOperation::new(
            State::Kentucky,
            Some(Credentials {
                username: "jdoe".to_string(),
                password: "hunter2hunter".to_string(),
            }),
            data,
        );

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["state"], json!("KY"));
        assert_eq!(value["credentials"]["username"], json!("jdoe"));
        assert_eq!(value["data"]["entityType"], json!("LLC"));
    }

    #[test]
    fn test_missing_credentials_serialize_as_null() {
        let req = CreateOperation::new(State::Iowa, None, serde_json::Map::new());
        let value = serde_json::to_value(&req).unwrap();
        assert!(value["credentials"].is_null());
    }

    #[test]
    fn test_create_response_requires_task_id() {
        let parsed = serde_json::from_str::<CreateOperationResponse>(r#"{"success":true}"#);
        assert!(parsed.is_err());
    }
}
