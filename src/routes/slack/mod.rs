//! Slack Web API routes
//!
//! Endpoints:
//!   GET  /slack/auth/test                – auth.test
//!   POST /slack/messages                 – chat.postMessage
//!   POST /slack/messages/update          – chat.update
//!   POST /slack/messages/delete          – chat.delete
//!   POST /slack/reactions/add            – reactions.add
//!   POST /slack/reactions/remove         – reactions.remove
//!   POST /slack/conversations/create     – conversations.create
//!   GET  /slack/conversations/list       – conversations.list
//!   GET  /slack/conversations/info       – conversations.info
//!   GET  /slack/conversations/history    – conversations.history
//!   GET  /slack/users/list               – users.list
//!   GET  /slack/users/info               – users.info
//!   GET  /slack/users/profile            – users.profile.get
//!   GET  /slack/files/list               – files.list
//!   GET  /slack/files/info               – files.info
//!   POST /slack/files/upload             – files.upload

pub mod auth;
pub mod conversations;
pub mod files;
pub mod messages;
pub mod reactions;
pub mod users;

use axum::Router;

use crate::{models::Endpoint, routes::common::endpoint_route, AppState};

/// Every Slack endpoint served by the gateway.
pub static ENDPOINTS: &[&Endpoint] = &[
    &auth::TEST_AUTH,
    &messages::POST_MESSAGE,
    &messages::UPDATE_MESSAGE,
    &messages::DELETE_MESSAGE,
    &reactions::ADD_REACTION,
    &reactions::REMOVE_REACTION,
    &conversations::CREATE_CONVERSATION,
    &conversations::LIST_CONVERSATIONS,
    &conversations::CONVERSATION_INFO,
    &conversations::CONVERSATION_HISTORY,
    &users::LIST_USERS,
    &users::USER_INFO,
    &users::USER_PROFILE,
    &files::LIST_FILES,
    &files::FILE_INFO,
    &files::UPLOAD_FILE,
];

pub fn router() -> Router<AppState> {
    ENDPOINTS.iter().fold(Router::new(), |router, endpoint| {
        router.route(endpoint.path, endpoint_route(*endpoint))
    })
}
