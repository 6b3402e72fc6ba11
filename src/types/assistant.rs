//! Assistant types.

use serde::Deserialize;

/// An AI assistant.
#[derive(Debug, Clone, Deserialize)]
pub struct Assistant {
    pub id: String,
    pub object: String,
    pub created_at: i64,
    pub name: String,
    pub instructions: String,
    #[serde(default)]
    pub tools_config: Option<String>,
}

/// Parameters for creating or updating an assistant.
#[derive(Debug, Clone)]
pub struct AssistantParams {
    pub name: String,
    pub instructions: String,
    pub tools_config: Option<String>,
}

impl AssistantParams {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            tools_config: None,
        }
    }
}
