//! The resolved project description.
//!
//! This module contains [`ProjectSpec`], the single record built from the
//! user's answers and consumed read-only by the content generators and the
//! materializer.

pub mod project_spec;

pub use project_spec::ProjectSpec;
