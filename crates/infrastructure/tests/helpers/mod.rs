#![allow(dead_code)]

mod raw_http_server;
mod resolve_server_mock;

pub use raw_http_server::{full_response, truncated_response, RawHttpServer};
pub use resolve_server_mock::MockResolveServer;
