//! Bindings for the repository tag endpoints of the GitHub REST API.
//!
//! [`github::TagsHandler`] maps list/get/create onto requests sent through any
//! [`github::Transport`]; [`github::GitHubClient`] is the octocrab-backed one.

pub mod config;
pub mod github;
