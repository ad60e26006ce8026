//! Domain models.

pub mod auth;
pub mod jobtread;
