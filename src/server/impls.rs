// Current module imports
use super::constants::{API_VERSION, PAYLOAD_KIND, REASON_INTERNAL_ERROR, STATUS_FAILURE};
use super::types::{ApiResource, ApiResourceList, ChallengeResponse, ChallengeStatus};

impl ChallengeResponse {
    pub fn succeeded(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            success: true,
            status: None,
        }
    }

    /// A failed challenge, reported to cert-manager as an internal error.
    pub fn failed(uid: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            success: false,
            status: Some(ChallengeStatus {
                status: STATUS_FAILURE.to_string(),
                message: message.into(),
                reason: REASON_INTERNAL_ERROR.to_string(),
                code: 500,
            }),
        }
    }
}

impl ApiResourceList {
    /// Discovery document advertising a single solver resource.
    pub fn for_solver(group_name: &str, solver_name: &str) -> Self {
        Self {
            kind: "APIResourceList".to_string(),
            api_version: "v1".to_string(),
            group_version: format!("{}/{}", group_name, API_VERSION),
            resources: vec![ApiResource {
                name: solver_name.to_string(),
                singular_name: solver_name.to_string(),
                namespaced: false,
                kind: PAYLOAD_KIND.to_string(),
                verbs: vec!["create".to_string()],
            }],
        }
    }
}
