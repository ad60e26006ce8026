//! Request handlers.

pub mod auth;
pub mod chat;
pub mod estimates;
pub mod health;
pub mod jobtread;
pub mod scheduler;
