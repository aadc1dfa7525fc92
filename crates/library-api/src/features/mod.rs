//! Feature modules implementing the library API
//!
//! Each feature is a vertical slice with its own commands, queries and
//! routes. The only feature today is the book catalog.
//!
//! # Architecture
//!
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list)
//! - `routes.rs` - Error mapping and service registration shared by the
//!   endpoints of a feature

pub mod books;
pub mod shared;
