use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Reflection,
    Testimony,
    Prayer,
    Devotional,
    Story,
}

impl Category {
    /// Browse order
    pub const ALL: [Category; 5] = [
        Category::Reflection,
        Category::Testimony,
        Category::Prayer,
        Category::Devotional,
        Category::Story,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Reflection => "Reflection",
            Category::Testimony => "Testimony",
            Category::Prayer => "Prayer",
            Category::Devotional => "Devotional",
            Category::Story => "Story",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: Category,
    /// Inline data URL
    #[serde(default)]
    pub image: Option<String>,
    /// Formatted by the client at creation
    pub date: String,
}

/// Compose-form state a post is built from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub image: Option<String>,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category,
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() || self.content.trim().is_empty()
    }

    pub fn into_post(self, id: i64, date: String) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            category: self.category,
            image: self.image,
            date,
        }
    }
}

/// On-disk document and `GET /api/posts` payload
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PostsDocument {
    pub posts: Vec<Post>,
}

#[derive(Serialize, Deserialize)]
pub struct PostEnvelope {
    pub post: Post,
}
