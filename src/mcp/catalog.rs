//! Static tool catalog served by `tools/list`

use super::models::*;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

static CATALOG: Lazy<Vec<ToolDescriptor>> = Lazy::new(|| {
    vec![
        ToolDescriptor {
            name: GET_USER_TOOL,
            description: "Get a user by ID from the backend",
            input_schema: id_schema("The ID of the user to retrieve"),
        },
        ToolDescriptor {
            name: GET_ALL_USERS_TOOL,
            description: "Get all users from the backend",
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        ToolDescriptor {
            name: CREATE_USER_TOOL,
            description: "Create a new user in the backend",
            input_schema: new_user_schema(),
        },
        ToolDescriptor {
            name: CREATE_USER_FINISHED_TOOL,
            description: "Create a new user in the backend (solution implementation)",
            input_schema: new_user_schema(),
        },
        ToolDescriptor {
            name: DELETE_USER_TOOL,
            description: "Delete a user by ID from the backend",
            input_schema: id_schema("The ID of the user to delete"),
        },
    ]
});

fn id_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "string", "description": description }
        },
        "required": ["id"]
    })
}

fn new_user_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "description": "The name of the user" },
            "email": { "type": "string", "description": "The email address of the user" }
        },
        "required": ["name", "email"]
    })
}

/// The ordered list of tools this gateway exposes.
pub fn tool_catalog() -> &'static [ToolDescriptor] {
    &CATALOG
}

pub fn find_tool(name: &str) -> Option<&'static ToolDescriptor> {
    CATALOG.iter().find(|tool| tool.name == name)
}
