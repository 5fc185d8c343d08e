//! Emoji reactions on messages.

use crate::models::{Endpoint, Field, ParamSource, Projection};

const REACTION_FIELDS: &[Field] = &[
    Field::required("channel", "Channel ID where the message exists"),
    Field::required("timestamp", "Timestamp of the message"),
    Field::required("name", "Reaction emoji name without colons"),
];

const MISSING_REACTION_FIELDS: &str = "Missing required fields: channel, timestamp, and name";

/// POST /slack/reactions/add
pub static ADD_REACTION: Endpoint = Endpoint {
    path: "/slack/reactions/add",
    source: ParamSource::Body,
    slack_method: "reactions.add",
    summary: "Add a reaction to a message",
    tag: "reactions",
    fields: REACTION_FIELDS,
    missing_message: MISSING_REACTION_FIELDS,
    alternatives: None,
    projection: Projection::Confirmation("Reaction added successfully"),
};

/// POST /slack/reactions/remove
pub static REMOVE_REACTION: Endpoint = Endpoint {
    path: "/slack/reactions/remove",
    source: ParamSource::Body,
    slack_method: "reactions.remove",
    summary: "Remove a reaction from a message",
    tag: "reactions",
    fields: REACTION_FIELDS,
    missing_message: MISSING_REACTION_FIELDS,
    alternatives: None,
    projection: Projection::Confirmation("Reaction removed successfully"),
};
