//! Response envelope shared by all contact tools.

use crate::error::ContactError;
use rmcp::model::{CallToolResult, Content, ErrorCode};
use rmcp::ErrorData as McpError;
use serde::Serialize;
use std::borrow::Cow;

pub const STATUS_ACCEPTED: &str = "accepted";
pub const STATUS_REJECTED: &str = "rejected";

/// `{status, code, message?, data?}` as returned to the caller.
///
/// `code` carries the HTTP status an equivalent REST endpoint would use.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiResponse {
    pub status: &'static str,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn accepted(code: u16, data: impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self {
                status: STATUS_ACCEPTED,
                code,
                message: None,
                data: Some(data),
            },
            Err(e) => Self::rejected(500, format!("Failed to encode response: {}", e)),
        }
    }

    pub fn rejected(code: u16, message: impl Into<String>) -> Self {
        Self {
            status: STATUS_REJECTED,
            code,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn not_found() -> Self {
        Self::rejected(404, "Not found")
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_accepted(&self) -> bool {
        self.status == STATUS_ACCEPTED
    }

    /// Wrap as an MCP tool result; rejections are flagged as tool errors.
    pub fn into_tool_result(self) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(&self).map_err(|e| McpError {
            code: ErrorCode::INTERNAL_ERROR,
            message: Cow::from(e.to_string()),
            data: None,
        })?;

        if self.is_accepted() {
            Ok(CallToolResult::success(vec![Content::text(text)]))
        } else {
            Ok(CallToolResult::error(vec![Content::text(text)]))
        }
    }
}

impl From<&ContactError> for ApiResponse {
    fn from(err: &ContactError) -> Self {
        Self::rejected(err.status_code(), err.to_string())
    }
}
