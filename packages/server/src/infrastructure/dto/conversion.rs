//! Conversion logic between DTOs and domain entities.

use crate::domain::{DomainError, Username, entity};
use crate::infrastructure::dto::http as http_dto;
use crate::infrastructure::dto::websocket as ws_dto;

// ========================================
// DTO → Domain Entity
// ========================================

impl TryFrom<http_dto::MemberDto> for entity::Member {
    type Error = DomainError;

    fn try_from(dto: http_dto::MemberDto) -> Result<Self, Self::Error> {
        let name = Username::new(dto.name)?;
        Ok(entity::Member::new(name, dto.task, dto.deadline))
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<entity::Member> for http_dto::MemberDto {
    fn from(model: entity::Member) -> Self {
        Self {
            name: model.name.into_string(),
            task: model.task,
            deadline: model.deadline,
        }
    }
}

impl From<entity::Project> for http_dto::ProjectDto {
    fn from(model: entity::Project) -> Self {
        Self {
            id: model.id.into_string(),
            name: model.name,
            description: model.description,
            members: model.members.into_iter().map(Into::into).collect(),
            owner: model.owner.into_string(),
            version: model.version,
        }
    }
}

impl From<entity::ChatRoom> for http_dto::ChatRoomDto {
    fn from(model: entity::ChatRoom) -> Self {
        Self {
            id: model.id.into_string(),
            project_name: model.project_name,
            members: model
                .members
                .into_iter()
                .map(Username::into_string)
                .collect(),
            version: model.version,
        }
    }
}

impl From<entity::ChatMessage> for http_dto::ChatMessageDto {
    fn from(model: entity::ChatMessage) -> Self {
        Self {
            id: model.id.into_string(),
            room_id: model.room_id.into_string(),
            sender: model.sender.into_string(),
            content: model.content.into_string(),
            attachment: model.attachment,
            timestamp: model.timestamp.value(),
        }
    }
}

impl From<entity::ChatMessage> for ws_dto::ChatBroadcastEvent {
    fn from(model: entity::ChatMessage) -> Self {
        Self {
            r#type: ws_dto::EventType::Chat,
            id: model.id.into_string(),
            room_id: model.room_id.into_string(),
            sender: model.sender.into_string(),
            content: model.content.into_string(),
            attachment: model.attachment,
            timestamp: model.timestamp.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageContent, MessageId, ProjectId, RoomId, Timestamp};
    use chrono::NaiveDate;

    fn username(value: &str) -> Username {
        Username::new(value.to_string()).unwrap()
    }

    #[test]
    fn test_member_dto_to_domain() {
        // テスト項目: MemberDto がドメインエンティティに変換される
        // given (前提条件):
        let dto = http_dto::MemberDto {
            name: "alice".to_string(),
            task: "api".to_string(),
            deadline: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        };

        // when (操作):
        let member: entity::Member = dto.try_into().unwrap();

        // then (期待する結果):
        assert_eq!(member.name, username("alice"));
        assert_eq!(member.task, "api");
    }

    #[test]
    fn test_member_dto_with_invalid_name_is_rejected() {
        // テスト項目: 不正なユーザー名を持つ MemberDto は変換に失敗する
        // given (前提条件):
        let dto = http_dto::MemberDto {
            name: "".to_string(),
            task: "api".to_string(),
            deadline: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        };

        // when (操作):
        let result: Result<entity::Member, _> = dto.try_into();

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_domain_project_to_dto() {
        // テスト項目: ドメインエンティティの Project が DTO に変換される
        // given (前提条件):
        let project = entity::Project::new(
            ProjectId::generate(),
            "proj-42".to_string(),
            "tracker".to_string(),
            vec![entity::Member::new(
                username("alice"),
                "api".to_string(),
                NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            )],
            username("alice"),
        );
        let id = project.id.as_str().to_string();

        // when (操作):
        let dto: http_dto::ProjectDto = project.into();

        // then (期待する結果):
        assert_eq!(dto.id, id);
        assert_eq!(dto.owner, "alice");
        assert_eq!(dto.members.len(), 1);
        assert_eq!(dto.version, 0);
    }

    #[test]
    fn test_domain_chat_message_to_broadcast_event() {
        // テスト項目: ドメインエンティティの ChatMessage がブロードキャストイベントに変換される
        // given (前提条件):
        let room_id = RoomId::generate();
        let message = entity::ChatMessage::new(
            MessageId::generate(),
            room_id.clone(),
            username("alice"),
            MessageContent::new("hello".to_string()).unwrap(),
            Some("files/design.png".to_string()),
            Timestamp::new(2000),
        );

        // when (操作):
        let event: ws_dto::ChatBroadcastEvent = message.into();

        // then (期待する結果):
        assert_eq!(event.r#type, ws_dto::EventType::Chat);
        assert_eq!(event.room_id, room_id.as_str());
        assert_eq!(event.sender, "alice");
        assert_eq!(event.attachment, Some("files/design.png".to_string()));
        assert_eq!(event.timestamp, 2000);
    }
}
