//! In-memory storage for blog posts.
//!
//! This crate holds the only stateful part of the blog service: a keyed
//! record cache with a fixed capacity, a serial identifier counter and
//! partial-update semantics. Networking, routing and the wire envelope live
//! in `blog-server`; this crate only deals in plain Rust values.
//!
//! # Record Types
//!
//! - [`BlogPost`] -- a stored record, always handed out as an owned copy
//! - [`NewBlogPost`] -- the fields supplied on creation
//! - [`BlogPostPatch`] -- the fields supplied on update ("non-empty wins")
//!
//! # Storage Backends
//!
//! All backends implement the [`BlogRepository`] trait:
//!
//! - [`BlogStore`] -- `HashMap` behind a single readers-writer lock
//!
//! # Design Rules
//!
//! 1. Identifiers start at 1 and are never reused, even after deletion.
//! 2. The number of records never exceeds the capacity given at construction.
//! 3. Mutations take the write lock for their whole duration; reads share it.
//! 4. Nothing is done under the lock except in-memory map work.
//! 5. The store never logs, retries or recovers; failures go to the caller.

pub mod error;
pub mod memory;
pub mod post;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::BlogStore;
pub use post::{BlogPost, BlogPostPatch, NewBlogPost, PostId};
pub use traits::BlogRepository;
