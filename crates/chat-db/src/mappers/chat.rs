//! Chat summary model -> entity mapper

use chat_core::entities::{Chat, ChatSummary, LastMessage, MemberPreferences};
use chat_core::value_objects::EntityId;

use crate::models::ChatSummaryModel;

impl From<ChatSummaryModel> for ChatSummary {
    fn from(model: ChatSummaryModel) -> Self {
        // A chat has a last message only if it has a timestamp; text may be NULL
        let last_message = model.last_message_time.map(|sent_at| LastMessage {
            text: model.last_message.unwrap_or_default(),
            sent_at,
        });

        ChatSummary {
            chat: Chat {
                id: EntityId::new(model.id),
                name: model.name,
                avatar: model.avatar,
                is_group: model.is_group,
            },
            last_message,
            unread_count: model.unread_count,
            preferences: MemberPreferences {
                pinned: model.pinned,
                muted: model.muted,
            },
            peer_online: model.online,
        }
    }
}
