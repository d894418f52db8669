//! Backend route conventions.
//!
//! Pure string functions. These define every path the client calls,
//! relative to the configured base URL.

pub const AUTH_REGISTER: &str = "/api/Auth/register";
pub const AUTH_LOGIN: &str = "/api/Auth/login";

pub const ASSESSMENT_SUBMIT: &str = "/api/Assessment/submit";

pub fn assessment_scores(user_id: &str) -> String {
    format!("/api/Assessment/user/{user_id}/scores")
}

pub const CHAT_SESSION: &str = "/api/Chat/session";
pub const CHAT_MESSAGE: &str = "/api/Chat/message";
pub const CHAT_SESSIONS: &str = "/api/Chat/sessions";

pub fn chat_session(session_id: &str) -> String {
    format!("/api/Chat/session/{session_id}")
}

pub fn chat_session_for_user(session_id: &str, user_id: &str) -> String {
    format!("/api/Chat/session/{session_id}/{user_id}")
}

pub const FORUM_THREAD: &str = "/api/Forum/thread";
pub const FORUM_THREADS: &str = "/api/Forum/threads";
pub const FORUM_COMMENT: &str = "/api/Forum/comment";

pub fn forum_thread(thread_id: &str) -> String {
    format!("/api/Forum/thread/{thread_id}")
}

pub fn forum_thread_comments(thread_id: &str) -> String {
    format!("/api/Forum/thread/{thread_id}/comments")
}

pub fn forum_comment(comment_id: &str) -> String {
    format!("/api/Forum/comment/{comment_id}")
}

pub const MOOD: &str = "/api/mood";

pub fn mood_latest(user_id: &str) -> String {
    format!("/api/mood/user/{user_id}/latest")
}

pub const USER_PROFILE: &str = "/api/User";

pub fn user(user_id: &str) -> String {
    format!("/api/User/{user_id}")
}
