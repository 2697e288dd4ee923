//! Server state shared across request handlers.

use std::sync::Arc;

use crate::usecase::{
    CreateChatRoomUseCase, CreateProjectUseCase, DisconnectSubscriberUseCase, GetProjectUseCase,
    GetRoomHistoryUseCase, JoinRoomUseCase, ListChatRoomsUseCase, ListNotificationsUseCase,
    ListProjectsUseCase, ListTasksUseCase, SendMessageUseCase, UpdateProjectUseCase,
};

/// Shared application state
///
/// 1 プロセスにつき 1 回だけ構築し、全ハンドラへ参照で渡す。
pub struct AppState {
    /// CreateProjectUseCase（プロジェクト作成のユースケース）
    pub create_project_usecase: Arc<CreateProjectUseCase>,
    /// GetProjectUseCase（プロジェクト取得のユースケース）
    pub get_project_usecase: Arc<GetProjectUseCase>,
    /// ListProjectsUseCase(プロジェクト一覧取得のユースケース)
    pub list_projects_usecase: Arc<ListProjectsUseCase>,
    /// UpdateProjectUseCase（プロジェクト更新とメンバーマージのユースケース）
    pub update_project_usecase: Arc<UpdateProjectUseCase>,
    /// CreateChatRoomUseCase（チャットルーム作成のユースケース）
    pub create_chat_room_usecase: Arc<CreateChatRoomUseCase>,
    /// ListChatRoomsUseCase（チャットルーム一覧取得のユースケース）
    pub list_chat_rooms_usecase: Arc<ListChatRoomsUseCase>,
    /// ListTasksUseCase（タスク一覧取得のユースケース）
    pub list_tasks_usecase: Arc<ListTasksUseCase>,
    /// ListNotificationsUseCase（締め切り通知一覧取得のユースケース）
    pub list_notifications_usecase: Arc<ListNotificationsUseCase>,
    /// JoinRoomUseCase（ルーム参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// SendMessageUseCase（メッセージ送信のユースケース）
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// DisconnectSubscriberUseCase（購読者切断のユースケース）
    pub disconnect_subscriber_usecase: Arc<DisconnectSubscriberUseCase>,
    /// GetRoomHistoryUseCase（ルーム履歴取得のユースケース）
    pub get_room_history_usecase: Arc<GetRoomHistoryUseCase>,
}
