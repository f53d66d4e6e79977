//! MCP (Model Context Protocol) server
//!
//! The container tools exposed through `rmcp` over stdio.

pub mod server;

pub use server::{DockerServer, LIST_CONTAINERS};
