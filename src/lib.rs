//! MCP server for a static product catalog.
//!
//! Exposes the category resources, the `search_products` tool, and the
//! `product_recommendation_prompt` prompt over JSON-RPC 2.0 stdio transport.
//! The catalog engine itself ([`catalog`], [`render`], [`prompt`]) is pure and
//! usable without the server.

pub mod catalog;
pub mod config;
pub mod handlers;
pub mod logging;
pub mod prompt;
pub mod protocol;
pub mod render;
pub mod server;

pub mod schema;
