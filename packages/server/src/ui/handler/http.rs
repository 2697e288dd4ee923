//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{Member, ProjectId, RepositoryError, RoomId, Username},
    infrastructure::dto::http::{
        ChatMessageDto, ChatRoomDto, CreateChatRoomRequest, CreateProjectRequest, MemberDto,
        NotificationDto, ProjectDto, TaskDto, UpdateProjectRequest,
    },
    ui::state::AppState,
    usecase::UpdateProjectError,
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Create a new project
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectDto>), StatusCode> {
    let owner = parse_username(request.owner)?;
    let members = parse_members(request.members)?;

    match state
        .create_project_usecase
        .execute(request.name, request.description, owner, members)
        .await
    {
        Ok(project) => Ok((StatusCode::CREATED, Json(project.into()))),
        Err(err) => {
            tracing::error!("Failed to create project: {}", err);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Get project detail by ID
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectDto>, StatusCode> {
    let project_id = ProjectId::try_from(project_id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match state.get_project_usecase.execute(&project_id).await {
        Ok(project) => Ok(Json(project.into())),
        Err(RepositoryError::NotFound) => Err(StatusCode::NOT_FOUND),
        Err(err) => {
            tracing::error!("Failed to get project: {}", err);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Update a project (full-document overwrite) and merge its member names
/// into the associated chat room
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectDto>, StatusCode> {
    let project_id = ProjectId::try_from(project_id).map_err(|_| StatusCode::BAD_REQUEST)?;
    let requester = parse_username(request.username)?;
    let members = parse_members(request.members)?;

    match state
        .update_project_usecase
        .execute(
            project_id,
            requester,
            request.name,
            request.description,
            members,
        )
        .await
    {
        Ok(project) => Ok(Json(project.into())),
        Err(UpdateProjectError::ProjectNotFound) => Err(StatusCode::NOT_FOUND),
        Err(UpdateProjectError::ChatRoomNotFound) => Err(StatusCode::NOT_FOUND),
        Err(UpdateProjectError::NotOwner(requester)) => {
            tracing::warn!("Rejected project update from non-owner '{}'", requester);
            Err(StatusCode::FORBIDDEN)
        }
        Err(err) => {
            tracing::error!("Failed to update project: {}", err);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// List the projects a user is a member of
pub async fn list_user_projects(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<ProjectDto>>, StatusCode> {
    let username = parse_username(username)?;
    match state.list_projects_usecase.execute(&username).await {
        Ok(projects) => Ok(Json(projects.into_iter().map(Into::into).collect())),
        Err(err) => {
            tracing::error!("Failed to list projects: {}", err);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Create a new chat room
pub async fn create_chat_room(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateChatRoomRequest>,
) -> Result<(StatusCode, Json<ChatRoomDto>), StatusCode> {
    let members = request
        .members
        .into_iter()
        .map(parse_username)
        .collect::<Result<Vec<_>, _>>()?;

    match state
        .create_chat_room_usecase
        .execute(request.project_name, members)
        .await
    {
        Ok(room) => Ok((StatusCode::CREATED, Json(room.into()))),
        Err(err) => {
            tracing::error!("Failed to create chat room: {}", err);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// List the chat rooms a user is a member of
pub async fn list_user_rooms(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<ChatRoomDto>>, StatusCode> {
    let username = parse_username(username)?;
    match state.list_chat_rooms_usecase.execute(&username).await {
        Ok(rooms) => Ok(Json(rooms.into_iter().map(Into::into).collect())),
        Err(err) => {
            tracing::error!("Failed to list chat rooms: {}", err);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// List the tasks assigned to a user across their projects
pub async fn list_user_tasks(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<TaskDto>>, StatusCode> {
    let username = parse_username(username)?;
    match state.list_tasks_usecase.execute(&username).await {
        Ok(tasks) => {
            let dtos = tasks
                .into_iter()
                .map(|task| TaskDto {
                    project_id: task.project_id.into_string(),
                    project_name: task.project_name,
                    task: task.task,
                    deadline: task.deadline,
                })
                .collect();
            Ok(Json(dtos))
        }
        Err(err) => {
            tracing::error!("Failed to list tasks: {}", err);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// List deadline notifications for a user (days remaining per membership)
pub async fn list_user_notifications(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<NotificationDto>>, StatusCode> {
    let username = parse_username(username)?;
    match state.list_notifications_usecase.execute(&username).await {
        Ok(notifications) => {
            let dtos = notifications
                .into_iter()
                .map(|notification| NotificationDto {
                    project_id: notification.project_id.into_string(),
                    project_name: notification.project_name,
                    task: notification.task,
                    deadline: notification.deadline,
                    days_remaining: notification.days_remaining,
                })
                .collect();
            Ok(Json(dtos))
        }
        Err(err) => {
            tracing::error!("Failed to list notifications: {}", err);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Get the full message history of a room (empty array if none)
pub async fn get_room_messages(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<ChatMessageDto>>, StatusCode> {
    let room_id = RoomId::try_from(room_id).map_err(|_| StatusCode::BAD_REQUEST)?;
    let history = state.get_room_history_usecase.execute(&room_id).await;
    Ok(Json(history.into_iter().map(Into::into).collect()))
}

fn parse_username(value: String) -> Result<Username, StatusCode> {
    Username::try_from(value).map_err(|err| {
        tracing::warn!("Invalid username in request: {}", err);
        StatusCode::BAD_REQUEST
    })
}

fn parse_members(dtos: Vec<MemberDto>) -> Result<Vec<Member>, StatusCode> {
    dtos.into_iter()
        .map(|dto| {
            Member::try_from(dto).map_err(|err| {
                tracing::warn!("Invalid member in request: {}", err);
                StatusCode::BAD_REQUEST
            })
        })
        .collect()
}
