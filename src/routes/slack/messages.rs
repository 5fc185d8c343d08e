//! Posting, editing and deleting messages (`chat.*`).

use crate::models::{AlternativeGroup, Endpoint, Field, ParamSource, Projection};

const TEXT_OR_BLOCKS: AlternativeGroup = AlternativeGroup {
    fields: &["text", "blocks"],
    message: "Either text or blocks must be provided",
};

/// POST /slack/messages
pub static POST_MESSAGE: Endpoint = Endpoint {
    path: "/slack/messages",
    source: ParamSource::Body,
    slack_method: "chat.postMessage",
    summary: "Post a message to a channel",
    tag: "messages",
    fields: &[
        Field::required("channel", "Channel ID or name, e.g. C1234567890 or #general"),
        Field::optional("text", "Message text"),
        Field::optional("blocks", "Block Kit blocks").with_schema_type("array"),
        Field::optional("thread_ts", "Parent message timestamp to reply in a thread"),
        Field::flag("as_user", "Post as the authenticated user"),
    ],
    missing_message: "Missing required field: channel",
    alternatives: Some(TEXT_OR_BLOCKS),
    projection: Projection::Fields(&["ts", "channel", "message"]),
};

/// POST /slack/messages/update
pub static UPDATE_MESSAGE: Endpoint = Endpoint {
    path: "/slack/messages/update",
    source: ParamSource::Body,
    slack_method: "chat.update",
    summary: "Update an existing message",
    tag: "messages",
    fields: &[
        Field::required("channel", "Channel ID where the message exists"),
        Field::required("ts", "Timestamp of the message to update"),
        Field::optional("text", "New message text"),
        Field::optional("blocks", "New Block Kit blocks").with_schema_type("array"),
        Field::flag("as_user", "Update as the authenticated user"),
    ],
    missing_message: "Missing required fields: channel and ts",
    alternatives: Some(TEXT_OR_BLOCKS),
    projection: Projection::Fields(&["ts", "channel", "message"]),
};

/// POST /slack/messages/delete
pub static DELETE_MESSAGE: Endpoint = Endpoint {
    path: "/slack/messages/delete",
    source: ParamSource::Body,
    slack_method: "chat.delete",
    summary: "Delete a message",
    tag: "messages",
    fields: &[
        Field::required("channel", "Channel ID where the message exists"),
        Field::required("ts", "Timestamp of the message to delete"),
        Field::flag("as_user", "Delete as the authenticated user"),
    ],
    missing_message: "Missing required fields: channel and ts",
    alternatives: None,
    projection: Projection::Fields(&["channel", "ts"]),
};
