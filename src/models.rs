use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlacementStatus {
    Placed,
    #[serde(rename = "In Process")]
    InProcess,
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
}

impl PlacementStatus {
    pub fn label(self) -> &'static str {
        match self {
            PlacementStatus::Placed => "Placed",
            PlacementStatus::InProcess => "In Process",
            PlacementStatus::NotStarted => "Not Started",
        }
    }
}

// Snapshot rows keep the dashboard's camelCase wire shape on disk.
// Missing fields deserialize to defaults so a sparse record still
// filters and ranks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub tech_stack: String,
    #[serde(default)]
    pub jri_score: f64,
    #[serde(default)]
    pub placement_status: PlacementStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// `None` leaves a dimension unconstrained.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub year: Option<String>,
    pub department: Option<String>,
    pub tech_stack: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub years: Vec<String>,
    pub departments: Vec<String>,
    pub tech_stacks: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Leaderboard {
    pub top: Vec<StudentRecord>,
    pub rest: Vec<RankedStudent>,
}

#[derive(Debug, Clone)]
pub struct RankedStudent {
    pub rank: usize,
    pub student: StudentRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    High,
    Mid,
    Low,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Mid => "mid",
            Tier::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditReport {
    pub overview: String,
    pub key_strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub breakdown: Vec<MetricScore>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricScore {
    pub metric: String,
    pub score: i32,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorRole {
    Student,
    Faculty,
    Department,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub year: String,
    pub role: AuthorRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Achievement,
    Placement,
    Event,
    Discussion,
    Announcement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: Author,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub posted_at: DateTime<Utc>,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub is_liked: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
