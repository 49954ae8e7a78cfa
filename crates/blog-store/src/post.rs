use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a post by the store. Always `> 0`.
pub type PostId = u64;

/// A stored blog post.
///
/// Values handed out by a store are owned copies; mutating one never
/// affects the stored record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub description: String,
    pub body: String,
}

impl NewBlogPost {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            body: body.into(),
        }
    }

    /// Build the stored record for `id`, stamping both timestamps with `now`.
    pub(crate) fn into_post(self, id: PostId, now: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            description: self.description,
            body: self.body,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields supplied when updating a post.
///
/// A field replaces the stored value only when it is present and
/// non-empty. An empty string is indistinguishable from an omitted field,
/// so an update cannot clear a field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl BlogPostPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Returns `true` if applying this patch would change no text field.
    pub fn is_noop(&self) -> bool {
        [&self.title, &self.description, &self.body]
            .iter()
            .all(|field| field.as_deref().map_or(true, str::is_empty))
    }

    /// Copy every non-empty field onto `post`. Timestamps are left alone.
    pub(crate) fn apply_to(self, post: &mut BlogPost) {
        replace_if_non_empty(&mut post.title, self.title);
        replace_if_non_empty(&mut post.description, self.description);
        replace_if_non_empty(&mut post.body, self.body);
    }
}

fn replace_if_non_empty(slot: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> BlogPost {
        NewBlogPost::new("T", "D", "B").into_post(1, Utc::now())
    }

    #[test]
    fn into_post_sets_both_timestamps() {
        let post = sample_post();
        assert_eq!(post.id, 1);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn patch_replaces_non_empty_fields_only() {
        let mut post = sample_post();
        BlogPostPatch::new()
            .title("")
            .description("D2")
            .apply_to(&mut post);
        assert_eq!(post.title, "T");
        assert_eq!(post.description, "D2");
        assert_eq!(post.body, "B");
    }

    #[test]
    fn empty_patch_is_noop() {
        assert!(BlogPostPatch::new().is_noop());
        assert!(BlogPostPatch::new().title("").body("").is_noop());
        assert!(!BlogPostPatch::new().body("x").is_noop());
    }

    #[test]
    fn patch_deserializes_missing_fields_as_none() {
        let patch: BlogPostPatch = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("New"));
        assert!(patch.description.is_none());
        assert!(patch.body.is_none());
    }

    #[test]
    fn post_serializes_snake_case_fields() {
        let json = serde_json::to_value(sample_post()).unwrap();
        for key in ["id", "title", "description", "body", "created_at", "updated_at"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
