//! Transports carrying MCP JSON-RPC messages

pub mod stdio;
