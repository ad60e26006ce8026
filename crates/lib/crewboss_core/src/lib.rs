//! # crewboss_core
//!
//! Core domain logic for Crewboss.

pub mod anthropic;
pub mod auth;
pub mod jobtread;
pub mod models;
pub mod prompts;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
