//! HTTP server for the blog post store.
//!
//! Maps five REST endpoints under `/api/blog-post` onto the
//! [`BlogRepository`](blog_store::BlogRepository) operations, wraps every
//! result in a `{status, message, error?, data?}` envelope and shuts down
//! gracefully on SIGINT/SIGTERM.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | POST | `/api/blog-post` | 201 `{id}` |
//! | GET | `/api/blog-post` | 200 `[post]` |
//! | GET | `/api/blog-post/:id` | 200 `post` |
//! | DELETE | `/api/blog-post/:id` | 200 `{id}` |
//! | PATCH | `/api/blog-post/:id` | 200 `{id}` |

pub mod config;
pub mod error;
pub mod handler;
pub mod response;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use response::{ApiResponse, HealthResponse, PostIdBody};
pub use router::build_router;
pub use server::{shutdown_signal, BlogServer};
