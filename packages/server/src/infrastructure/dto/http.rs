//! HTTP API request/response DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Project member with assigned task and deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDto {
    pub name: String,
    pub task: String,
    pub deadline: NaiveDate,
}

/// Request body for creating a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
    pub owner: String,
    #[serde(default)]
    pub members: Vec<MemberDto>,
}

/// Request body for updating a project (full-document overwrite)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    /// Username of the requester; must match the project owner
    pub username: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub members: Vec<MemberDto>,
}

/// Project representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub members: Vec<MemberDto>,
    pub owner: String,
    pub version: u64,
}

/// Request body for creating a chat room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChatRoomRequest {
    pub project_name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Chat room representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRoomDto {
    pub id: String,
    pub project_name: String,
    pub members: Vec<String>,
    pub version: u64,
}

/// A task assignment derived from a project membership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDto {
    pub project_id: String,
    pub project_name: String,
    pub task: String,
    pub deadline: NaiveDate,
}

/// A deadline notification derived from a project membership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationDto {
    pub project_id: String,
    pub project_name: String,
    pub task: String,
    pub deadline: NaiveDate,
    /// ceil((deadline - now) / 1 day); negative when the deadline has passed
    pub days_remaining: i64,
}

/// Chat message representation returned by the history API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub id: String,
    pub room_id: String,
    pub sender: String,
    pub content: String,
    pub attachment: Option<String>,
    pub timestamp: i64,
}
