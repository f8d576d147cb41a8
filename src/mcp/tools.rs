//! Tool handlers
//!
//! Each handler validates its arguments, makes exactly one backend call and
//! shapes the answer into a `ToolResult`. A missing user is a normal outcome
//! and comes back as a successful result with explanatory text.

use super::{catalog::find_tool, client::BackendClient, helpers::*, models::*};
use crate::error::{BackendError, Operation, ToolError};
use crate::users::models::NewUser;
use serde_json::Value;
use tracing::info;

/// Routes a `tools/call` to its handler by exact name. Only names listed
/// in the catalog are dispatched.
pub async fn handle_tool_call(
    client: &BackendClient,
    name: &str,
    args: &Value,
) -> Result<ToolResult, ToolError> {
    let tool = find_tool(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

    match tool.name {
        GET_USER_TOOL => get_user(client, args).await,
        GET_ALL_USERS_TOOL => get_all_users(client).await,
        CREATE_USER_TOOL | CREATE_USER_FINISHED_TOOL => create_user(client, args).await,
        DELETE_USER_TOOL => delete_user(client, args).await,
        _ => Err(ToolError::UnknownTool(name.to_string())),
    }
}

fn to_json_text<T: serde::Serialize>(value: &T) -> Result<String, BackendError> {
    Ok(serde_json::to_string(value)?)
}

fn not_found_text(id: &str) -> String {
    format!("User with ID {} not found", id)
}

pub async fn get_user(client: &BackendClient, args: &Value) -> Result<ToolResult, ToolError> {
    let id = id_arg(args, "id").ok_or(ToolError::MissingUserId)?;

    let user = client
        .get_user(&id)
        .await
        .map_err(|e| ToolError::backend(Operation::GetUser, e))?;

    match user {
        Some(user) => Ok(ToolResult::text(
            to_json_text(&user).map_err(|e| ToolError::backend(Operation::GetUser, e))?,
        )),
        None => Ok(ToolResult::text(not_found_text(&id))),
    }
}

pub async fn get_all_users(client: &BackendClient) -> Result<ToolResult, ToolError> {
    let users = client
        .list_users()
        .await
        .map_err(|e| ToolError::backend(Operation::GetAllUsers, e))?;

    let text = to_json_text(&users).map_err(|e| ToolError::backend(Operation::GetAllUsers, e))?;
    Ok(ToolResult::text(text))
}

/// Shared by `create_user` and `create_user_finished`.
pub async fn create_user(client: &BackendClient, args: &Value) -> Result<ToolResult, ToolError> {
    let (Some(name), Some(email)) = (str_arg(args, "name"), str_arg(args, "email")) else {
        return Err(ToolError::MissingNameOrEmail);
    };

    let new_user = NewUser {
        name: name.to_string(),
        email: email.to_string(),
    };
    let user = client
        .create_user(&new_user)
        .await
        .map_err(|e| ToolError::backend(Operation::CreateUser, e))?;

    let id = user.get("id").cloned().unwrap_or_default();
    info!(%id, "User created through gateway");
    let text = to_json_text(&user).map_err(|e| ToolError::backend(Operation::CreateUser, e))?;
    Ok(ToolResult::text(text))
}

pub async fn delete_user(client: &BackendClient, args: &Value) -> Result<ToolResult, ToolError> {
    let id = id_arg(args, "id").ok_or(ToolError::MissingUserId)?;

    let deleted = client
        .delete_user(&id)
        .await
        .map_err(|e| ToolError::backend(Operation::DeleteUser, e))?;

    if deleted {
        Ok(ToolResult::text(format!("User with ID {} deleted successfully", id)))
    } else {
        Ok(ToolResult::text(not_found_text(&id)))
    }
}
