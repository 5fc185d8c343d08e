//! Channels and their history (`conversations.*`).

use crate::models::{Endpoint, Field, ParamSource, Projection};

/// POST /slack/conversations/create
pub static CREATE_CONVERSATION: Endpoint = Endpoint {
    path: "/slack/conversations/create",
    source: ParamSource::Body,
    slack_method: "conversations.create",
    summary: "Create a channel",
    tag: "conversations",
    fields: &[
        Field::required("name", "Name of the channel to create"),
        Field::flag("is_private", "Create a private channel"),
        Field::optional("team_id", "Team ID (Enterprise Grid)"),
    ],
    missing_message: "Missing required field: name",
    alternatives: None,
    projection: Projection::Fields(&["channel"]),
};

/// GET /slack/conversations/list
pub static LIST_CONVERSATIONS: Endpoint = Endpoint {
    path: "/slack/conversations/list",
    source: ParamSource::Query,
    slack_method: "conversations.list",
    summary: "List channels in the workspace",
    tag: "conversations",
    fields: &[
        Field::optional("types", "Comma-separated channel types: public_channel, private_channel, mpim, im"),
        Field::flag("exclude_archived", "Exclude archived channels"),
        Field::integer("limit", "Maximum number of channels to return"),
        Field::optional("cursor", "Pagination cursor"),
    ],
    missing_message: "",
    alternatives: None,
    projection: Projection::Fields(&["channels", "response_metadata"]),
};

/// GET /slack/conversations/info
pub static CONVERSATION_INFO: Endpoint = Endpoint {
    path: "/slack/conversations/info",
    source: ParamSource::Query,
    slack_method: "conversations.info",
    summary: "Get information about a channel",
    tag: "conversations",
    fields: &[
        Field::required("channel", "Channel ID"),
        Field::flag("include_locale", "Include locale information"),
        Field::flag("include_num_members", "Include member count"),
    ],
    missing_message: "Missing required parameter: channel",
    alternatives: None,
    projection: Projection::Fields(&["channel"]),
};

/// GET /slack/conversations/history
pub static CONVERSATION_HISTORY: Endpoint = Endpoint {
    path: "/slack/conversations/history",
    source: ParamSource::Query,
    slack_method: "conversations.history",
    summary: "Fetch messages from a channel",
    tag: "conversations",
    fields: &[
        Field::required("channel", "Channel ID"),
        Field::integer("limit", "Number of messages to return"),
        Field::optional("cursor", "Pagination cursor"),
        Field::optional("latest", "End of time range (timestamp)"),
        Field::optional("oldest", "Start of time range (timestamp)"),
        Field::flag("inclusive", "Include messages at the latest/oldest timestamps"),
    ],
    missing_message: "Missing required parameter: channel",
    alternatives: None,
    projection: Projection::Fields(&["messages", "has_more", "response_metadata"]),
};
