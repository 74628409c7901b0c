pub mod chat;
pub mod notice;
