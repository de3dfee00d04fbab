//! MCP tool handlers for the contacts server.
//!
//! This module implements the contact tools using the rmcp SDK's tool_router pattern.
//! Each tool answers with an [`ApiResponse`] envelope whose `code` follows the
//! REST contract: 200/201 on success, 404 for unknown ids, 400 for missing
//! fields, 409 for schema violations and 500 when the store cannot be written.

use super::response::ApiResponse;
use crate::models::ContactFields;
use crate::services::ContactService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

/// The MCP server that exposes the contact book as tools.
#[derive(Clone)]
pub struct ContactsMcpServer {
    contact_service: Arc<dyn ContactService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contacts-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Contact book server. Each contact has a name, an email and a phone number."
                    .into(),
            ),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ContactIdParams {
    contact_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactToolParams {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateContactToolParams {
    contact_id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

// Tool router implementation
#[tool_router]
impl ContactsMcpServer {
    /// Create a new contacts MCP server on top of a contact service.
    pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
        Self {
            contact_service,
            tool_router: Self::tool_router(),
        }
    }

    /// List every contact.
    #[tool(description = "List all contacts in the order they were added")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        self.list().await.into_tool_result()
    }

    /// Retrieve one contact by ID.
    #[tool(description = "Retrieve a contact by ID. Answers 404 when no contact has that ID.")]
    async fn get_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        self.get(&params.0.contact_id).await.into_tool_result()
    }

    /// Create a contact.
    #[tool(
        description = "Create a contact. name (3-35 characters), email (domain ending in an allowed TLD such as com, net or ua) and phone (e.g. +1 (555) 123-4567) are all required."
    )]
    async fn add_contact(
        &self,
        params: Parameters<AddContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: add_contact called");
        let fields = ContactFields {
            name: params.name,
            email: params.email,
            phone: params.phone,
        };

        self.create(fields).await.into_tool_result()
    }

    /// Update fields of an existing contact.
    #[tool(
        description = "Update an existing contact. Only the fields provided are replaced; at least one of name, email or phone is required."
    )]
    async fn update_contact(
        &self,
        params: Parameters<UpdateContactToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: update_contact called");
        tracing::debug!("Parameters: contact_id={}", params.contact_id);
        let fields = ContactFields {
            name: params.name,
            email: params.email,
            phone: params.phone,
        };

        self.update(&params.contact_id, fields)
            .await
            .into_tool_result()
    }

    /// Delete a contact.
    #[tool(description = "Delete a contact by ID. Answers 404 when no contact has that ID.")]
    async fn remove_contact(
        &self,
        params: Parameters<ContactIdParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: remove_contact called");
        self.delete(&params.0.contact_id).await.into_tool_result()
    }
}

// Transport-independent request handling, shared by the tools above.
impl ContactsMcpServer {
    pub async fn list(&self) -> ApiResponse {
        let contacts = self.contact_service.list_contacts().await;
        ApiResponse::accepted(200, contacts)
    }

    pub async fn get(&self, contact_id: &str) -> ApiResponse {
        match self.contact_service.get_contact_by_id(contact_id).await {
            Some(contact) => ApiResponse::accepted(200, contact),
            None => ApiResponse::not_found(),
        }
    }

    pub async fn create(&self, fields: ContactFields) -> ApiResponse {
        match self.contact_service.add_contact(fields).await {
            Ok(contact) => {
                tracing::info!("Contact created successfully: id={}", contact.id);
                ApiResponse::accepted(201, contact)
            }
            Err(e) => ApiResponse::from(&e),
        }
    }

    pub async fn update(&self, contact_id: &str, fields: ContactFields) -> ApiResponse {
        match self.contact_service.update_contact(contact_id, fields).await {
            Ok(Some(contact)) => ApiResponse::accepted(200, contact),
            Ok(None) => ApiResponse::not_found(),
            Err(e) => ApiResponse::from(&e),
        }
    }

    pub async fn delete(&self, contact_id: &str) -> ApiResponse {
        match self.contact_service.remove_contact(contact_id).await {
            Ok(Some(contact)) => ApiResponse::accepted(200, contact).with_message("contact deleted"),
            Ok(None) => ApiResponse::not_found(),
            Err(e) => ApiResponse::from(&e),
        }
    }
}
