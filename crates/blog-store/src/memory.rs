use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::post::{BlogPost, BlogPostPatch, NewBlogPost, PostId};
use crate::traits::BlogRepository;

/// In-memory, capacity-bounded blog post store.
///
/// One readers-writer lock guards both the record map and the serial
/// counter, so id assignment and the capacity check happen atomically with
/// the insert. Posts are cloned on the way out.
pub struct BlogStore {
    inner: RwLock<Inner>,
    capacity: usize,
}

struct Inner {
    posts: HashMap<PostId, BlogPost>,
    /// Last id handed out. Only ever incremented.
    serial: PostId,
}

impl Inner {
    fn next_id(&mut self) -> PostId {
        self.serial += 1;
        self.serial
    }
}

impl BlogStore {
    /// Create an empty store that holds at most `capacity` posts.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Inner {
                posts: HashMap::with_capacity(capacity),
                serial: 0,
            }),
            capacity,
        }
    }

    /// Maximum number of posts held at once.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of posts currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().posts.len()
    }

    /// Returns `true` if the store holds no posts.
    pub fn is_empty(&self) -> bool {
        self.inner.read().posts.is_empty()
    }
}

/// Wall-clock now, but never at or before `previous`.
fn refreshed(previous: DateTime<Utc>) -> DateTime<Utc> {
    let floor = previous
        .checked_add_signed(Duration::nanoseconds(1))
        .unwrap_or(previous);
    Utc::now().max(floor)
}

impl BlogRepository for BlogStore {
    fn create(&self, post: NewBlogPost) -> StoreResult<PostId> {
        let mut inner = self.inner.write();
        if inner.posts.len() >= self.capacity {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let id = inner.next_id();
        inner.posts.insert(id, post.into_post(id, Utc::now()));
        Ok(id)
    }

    fn get(&self, id: PostId) -> StoreResult<BlogPost> {
        self.inner
            .read()
            .posts
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Vec<BlogPost> {
        self.inner.read().posts.values().cloned().collect()
    }

    fn delete(&self, id: PostId) -> StoreResult<PostId> {
        let mut inner = self.inner.write();
        match inner.posts.remove(&id) {
            Some(_) => Ok(id),
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn update(&self, id: PostId, patch: BlogPostPatch) -> StoreResult<PostId> {
        let mut inner = self.inner.write();
        let post = inner.posts.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        patch.apply_to(post);
        post.updated_at = refreshed(post.updated_at);
        Ok(id)
    }
}

impl std::fmt::Debug for BlogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("BlogStore")
            .field("post_count", &inner.posts.len())
            .field("capacity", &self.capacity)
            .field("serial", &inner.serial)
            .finish()
    }
}
