//! todos_core - Functional core for the todos project.
//!
//! Pure types and functions shared by the server and the client. Nothing in
//! this crate performs I/O; the repository and blob-store traits are
//! implemented by the `todos` crate.

pub mod auth;
pub mod storage;
pub mod todo;
