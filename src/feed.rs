use std::path::Path;

use anyhow::Context;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

use crate::models::{Author, AuthorRole, Post, PostKind};

/// Community feed state. All mutations go through the store.
#[derive(Debug, Clone, Default)]
pub struct FeedStore {
    posts: Vec<Post>,
}

impl FeedStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn add_post(&mut self, author: Author, content: String) -> &Post {
        let post = Post {
            id: Uuid::new_v4().to_string(),
            author,
            content,
            kind: PostKind::Discussion,
            posted_at: Utc::now(),
            likes: 0,
            comments: 0,
            shares: 0,
            is_liked: false,
            tags: Vec::new(),
            company: None,
            event_date: None,
            location: None,
        };
        self.posts.insert(0, post);
        &self.posts[0]
    }

    /// Returns false when no post carries the id.
    pub fn toggle_like(&mut self, post_id: &str) -> bool {
        match self.posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => {
                if post.is_liked {
                    post.likes = post.likes.saturating_sub(1);
                } else {
                    post.likes += 1;
                }
                post.is_liked = !post.is_liked;
                true
            }
            None => false,
        }
    }

    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read feed {}", path.display()))?;
        let posts = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse feed {}", path.display()))?;
        Ok(Self { posts })
    }

    pub async fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.posts)?;
        tokio::fs::write(path, raw)
            .await
            .with_context(|| format!("failed to write feed {}", path.display()))
    }
}

pub fn seed_posts() -> anyhow::Result<Vec<Post>> {
    let posted = |y: i32, m: u32, d: u32, h: u32| {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
            .single()
            .context("invalid seed timestamp")
    };

    Ok(vec![
        Post {
            id: "1".to_string(),
            author: Author {
                name: "Sarah Johnson".to_string(),
                department: "Computer Science".to_string(),
                year: "4th Year".to_string(),
                role: AuthorRole::Student,
            },
            content: "Just got placed at Google as a Software Engineer! Thank you to all \
                      the professors and the T&P cell for the amazing support. The mock \
                      interviews really helped!"
                .to_string(),
            kind: PostKind::Placement,
            posted_at: posted(2026, 1, 18, 14)?,
            likes: 45,
            comments: 12,
            shares: 8,
            is_liked: false,
            tags: vec![
                "Placement".to_string(),
                "Software Engineer".to_string(),
                "Google".to_string(),
            ],
            company: Some("Google".to_string()),
            event_date: None,
            location: None,
        },
        Post {
            id: "2".to_string(),
            author: Author {
                name: "Dr. Priya Sharma".to_string(),
                department: "Computer Science".to_string(),
                year: "Faculty".to_string(),
                role: AuthorRole::Faculty,
            },
            content: "Congratulations to all our students who participated in the Algorithm \
                      Mastery Challenge! Special mention to Mike Chen for securing first place."
                .to_string(),
            kind: PostKind::Announcement,
            posted_at: posted(2026, 1, 18, 12)?,
            likes: 89,
            comments: 23,
            shares: 15,
            is_liked: false,
            tags: vec![
                "Congratulations".to_string(),
                "Algorithm Challenge".to_string(),
            ],
            company: None,
            event_date: None,
            location: None,
        },
        Post {
            id: "3".to_string(),
            author: Author {
                name: "Training & Placement Cell".to_string(),
                department: "T&P Administration".to_string(),
                year: "Official".to_string(),
                role: AuthorRole::Department,
            },
            content: "Upcoming Tech Talk: 'Future of AI in Industry' by Dr. Rajesh Kumar, \
                      Senior AI Researcher at Microsoft. Registration is open."
                .to_string(),
            kind: PostKind::Event,
            posted_at: posted(2026, 1, 17, 9)?,
            likes: 156,
            comments: 34,
            shares: 67,
            is_liked: false,
            tags: vec!["Tech Talk".to_string(), "AI".to_string()],
            company: None,
            event_date: Some("January 20, 2026".to_string()),
            location: Some("Main Auditorium".to_string()),
        },
    ])
}
