//! File listing, lookup and upload.

use crate::models::{AlternativeGroup, Endpoint, Field, ParamSource, Projection};

/// GET /slack/files/list
pub static LIST_FILES: Endpoint = Endpoint {
    path: "/slack/files/list",
    source: ParamSource::Query,
    slack_method: "files.list",
    summary: "List files",
    tag: "files",
    fields: &[
        Field::optional("channel", "Filter by channel ID"),
        Field::optional("user", "Filter by user ID"),
        Field::integer("count", "Number of items to return"),
        Field::integer("page", "Page number of results"),
        Field::optional("ts_from", "Files created after this timestamp"),
        Field::optional("ts_to", "Files created before this timestamp"),
        Field::optional("types", "File types: all, spaces, snippets, images, ..."),
    ],
    missing_message: "",
    alternatives: None,
    projection: Projection::Fields(&["files", "paging"]),
};

/// GET /slack/files/info
pub static FILE_INFO: Endpoint = Endpoint {
    path: "/slack/files/info",
    source: ParamSource::Query,
    slack_method: "files.info",
    summary: "Get information about a file",
    tag: "files",
    fields: &[
        Field::required("file", "File ID"),
        Field::integer("count", "Number of comments per page"),
        Field::integer("page", "Page number of comments"),
    ],
    missing_message: "Missing required parameter: file",
    alternatives: None,
    projection: Projection::Fields(&["file", "comments", "paging"]),
};

/// POST /slack/files/upload
///
/// `file` carries base64 data and is sent as a multipart file part.
pub static UPLOAD_FILE: Endpoint = Endpoint {
    path: "/slack/files/upload",
    source: ParamSource::Body,
    slack_method: "files.upload",
    summary: "Upload or create a file",
    tag: "files",
    fields: &[
        Field::optional("channels", "Comma-separated channel IDs to share the file in"),
        Field::optional("content", "File content for text files"),
        Field::binary("file", "Base64-encoded file data"),
        Field::optional("filename", "Filename"),
        Field::optional("filetype", "File type identifier"),
        Field::optional("initial_comment", "Initial comment"),
        Field::optional("title", "Title of the file"),
        Field::optional("thread_ts", "Thread timestamp to share the file in"),
    ],
    missing_message: "",
    alternatives: Some(AlternativeGroup {
        fields: &["content", "file"],
        message: "Either content or file must be provided",
    }),
    projection: Projection::Fields(&["file"]),
};
