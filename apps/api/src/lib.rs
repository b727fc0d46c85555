//! Trivia API Library
//!
//! HTTP API over a relational store of trivia questions and categories:
//! listing, pagination, search, creation, deletion and quiz question picking.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
