// Content API: parses agent output and keeps the resulting items per user.
// Parsing itself lives in `crate::parser`; nothing here touches markdown.

pub mod handlers;
pub mod models;
pub mod store;
