//! # parklog-core
//!
//! Core types, validators, and pagination rules for parklog.
//!
//! This crate provides the foundational types shared across all parklog crates:
//! - Entity structs for parks, visits, and users
//! - Field validators and the tagged date parser
//! - The pagination calculator and page-resolution policy
//! - The explicit request context that replaces a global session
//! - Cross-cutting error types

pub mod context;
pub mod entities;
pub mod errors;
pub mod pagination;
pub mod validation;
