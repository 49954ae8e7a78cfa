use crate::error::StoreResult;
use crate::post::{BlogPost, BlogPostPatch, NewBlogPost, PostId};

/// Keyed, capacity-bounded blog post storage.
///
/// All implementations must satisfy these invariants:
/// - Ids are assigned strictly increasingly starting at 1 and never reused.
/// - The number of stored posts never exceeds the capacity.
/// - `updated_at >= created_at` for every stored post.
/// - Every operation either fully applies or fully fails.
pub trait BlogRepository: Send + Sync {
    /// Store a new post and return its id.
    ///
    /// Returns `Err(CapacityExceeded)` if the store is full.
    fn create(&self, post: NewBlogPost) -> StoreResult<PostId>;

    /// Read a post by id. Returns `Err(NotFound)` if absent.
    fn get(&self, id: PostId) -> StoreResult<BlogPost>;

    /// Snapshot of every stored post, in no particular order.
    fn list(&self) -> Vec<BlogPost>;

    /// Remove a post and return its id. Returns `Err(NotFound)` if absent.
    fn delete(&self, id: PostId) -> StoreResult<PostId>;

    /// Apply a partial update and return the id.
    ///
    /// Refreshes `updated_at` even when no field changes.
    /// Returns `Err(NotFound)` if absent.
    fn update(&self, id: PostId, patch: BlogPostPatch) -> StoreResult<PostId>;
}
