//! Workspace members and profiles.

use crate::models::{Endpoint, Field, ParamSource, Projection};

/// GET /slack/users/list
pub static LIST_USERS: Endpoint = Endpoint {
    path: "/slack/users/list",
    source: ParamSource::Query,
    slack_method: "users.list",
    summary: "List users in the workspace",
    tag: "users",
    fields: &[
        Field::integer("limit", "Maximum number of users to return"),
        Field::optional("cursor", "Pagination cursor"),
        Field::flag("include_locale", "Include locale information"),
        Field::optional("team_id", "Team ID (Enterprise Grid)"),
    ],
    missing_message: "",
    alternatives: None,
    projection: Projection::Fields(&["members", "cache_ts", "response_metadata"]),
};

/// GET /slack/users/info
pub static USER_INFO: Endpoint = Endpoint {
    path: "/slack/users/info",
    source: ParamSource::Query,
    slack_method: "users.info",
    summary: "Get information about a user",
    tag: "users",
    fields: &[
        Field::required("user", "User ID"),
        Field::flag("include_locale", "Include locale information"),
    ],
    missing_message: "Missing required parameter: user",
    alternatives: None,
    projection: Projection::Fields(&["user"]),
};

/// GET /slack/users/profile
///
/// Without `user`, Slack returns the authenticated user's profile.
pub static USER_PROFILE: Endpoint = Endpoint {
    path: "/slack/users/profile",
    source: ParamSource::Query,
    slack_method: "users.profile.get",
    summary: "Get a user's profile",
    tag: "users",
    fields: &[
        Field::optional("user", "User ID"),
        Field::flag("include_labels", "Include label information"),
    ],
    missing_message: "",
    alternatives: None,
    projection: Projection::Fields(&["profile"]),
};
