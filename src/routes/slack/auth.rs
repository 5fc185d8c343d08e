//! Credential check.

use crate::models::{Endpoint, ParamSource, Projection};

/// GET /slack/auth/test
pub static TEST_AUTH: Endpoint = Endpoint {
    path: "/slack/auth/test",
    source: ParamSource::Query,
    slack_method: "auth.test",
    summary: "Test authentication and get workspace/bot info",
    tag: "auth",
    fields: &[],
    missing_message: "",
    alternatives: None,
    projection: Projection::Fields(&[
        "url",
        "team",
        "user",
        "team_id",
        "user_id",
        "bot_id",
        "is_enterprise_install",
    ]),
};
