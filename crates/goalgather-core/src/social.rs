//! In-memory list mutations: chat send, matchday likes and posts, unblocking.
//!
//! Nothing here is persisted or sent anywhere. Each list lives as long as the
//! screen that owns it.

use chrono::{Local, NaiveTime};

use crate::models::{BlockedUser, CURRENT_USER_ID, ChatMessage, MatchdayPost};

/// Avatar initials for content authored locally.
const CURRENT_USER_AVATAR: &str = "YU";

fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// ============================================================================
// Group chat
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    display_name: String,
}

impl ChatLog {
    pub fn new(messages: Vec<ChatMessage>, display_name: impl Into<String>) -> Self {
        Self {
            messages,
            display_name: display_name.into(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Sends a message stamped with the local wall-clock time.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        self.send_at(text, Local::now().time())
    }

    /// Appends a message from the current user, stamped `HH:MM` from `at`.
    ///
    /// Whitespace-only input is ignored and returns `None`.
    pub fn send_at(&mut self, text: &str, at: NaiveTime) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            id: fresh_id(),
            sender_id: CURRENT_USER_ID.to_string(),
            sender_name: self.display_name.clone(),
            sender_avatar: CURRENT_USER_AVATAR.to_string(),
            text: text.to_string(),
            timestamp: at.format("%H:%M").to_string(),
            is_icebreaker: false,
        });
        self.messages.last()
    }
}

// ============================================================================
// Matchday feed
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    posts: Vec<MatchdayPost>,
    display_name: String,
}

impl Feed {
    pub fn new(posts: Vec<MatchdayPost>, display_name: impl Into<String>) -> Self {
        Self {
            posts,
            display_name: display_name.into(),
        }
    }

    pub fn posts(&self) -> &[MatchdayPost] {
        &self.posts
    }

    pub fn get(&self, post_id: &str) -> Option<&MatchdayPost> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Flips the like flag and moves the counter by one in the same direction.
    ///
    /// Returns the new `is_liked` value, or `None` if no post has that id.
    /// The counter is not clamped, so two toggles always restore the post.
    pub fn toggle_like(&mut self, post_id: &str) -> Option<bool> {
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        post.is_liked = !post.is_liked;
        post.likes += if post.is_liked { 1 } else { -1 };
        Some(post.is_liked)
    }

    /// Prepends a new post by the current user.
    ///
    /// Whitespace-only content is ignored and returns `None`.
    pub fn create_post(&mut self, content: &str) -> Option<&MatchdayPost> {
        if content.trim().is_empty() {
            return None;
        }
        self.posts.insert(
            0,
            MatchdayPost {
                id: fresh_id(),
                user_id: CURRENT_USER_ID.to_string(),
                user_name: self.display_name.clone(),
                user_avatar: CURRENT_USER_AVATAR.to_string(),
                content: content.to_string(),
                image_url: None,
                timestamp: "Just now".to_string(),
                likes: 0,
                comments: 0,
                is_liked: false,
            },
        );
        self.posts.first()
    }
}

// ============================================================================
// Block list
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockList {
    users: Vec<BlockedUser>,
}

impl BlockList {
    pub fn new(users: Vec<BlockedUser>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[BlockedUser] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Removes the user with `id`. No confirmation, no undo.
    pub fn unblock(&mut self, id: &str) -> Option<BlockedUser> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }
}
