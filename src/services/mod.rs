pub mod dispatch_service;
pub mod slack_client;
pub mod slack_service;

pub use dispatch_service::{build_request, execute, project};
pub use slack_client::{encode_params, SlackApi, SlackClient};
pub use slack_service::SlackService;
