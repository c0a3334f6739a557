//! Application Layer - Use Cases

pub mod resolve_session;
