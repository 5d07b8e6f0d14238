//! Built-in sample posts
//!
//! First-run fallback: when the slot is absent or unreadable, the store
//! starts from these three posts and persists them. The records are kept
//! exactly as shipped; their `readTime` values are the shipped ones, since
//! load never re-derives (only create and update do).

use super::post::Post;

const SEED_JSON: &str = r#"[
  {
    "id": 1,
    "title": "Getting Started with Modern Web Development",
    "content": "Web development has evolved significantly over the years. Today's developers have access to powerful frameworks, tools, and best practices that make building applications faster and more enjoyable.",
    "category": "Technology",
    "imageUrl": "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&h=400&fit=crop",
    "dateCreated": "2024-01-15T10:30:00.000Z",
    "readTime": 5
  },
  {
    "id": 2,
    "title": "10 Tips for a Productive Morning Routine",
    "content": "Starting your day right can significantly impact your productivity and overall well-being. Here are ten practical tips to create a morning routine that sets you up for success.",
    "category": "Lifestyle",
    "imageUrl": "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=400&fit=crop",
    "dateCreated": "2024-01-12T08:15:00.000Z",
    "readTime": 8
  },
  {
    "id": 3,
    "title": "Exploring the Hidden Gems of Tokyo",
    "content": "Tokyo is a city of contrasts, where ancient traditions meet cutting-edge technology. Beyond the well-known tourist spots, there are countless hidden gems waiting to be discovered.",
    "category": "Travel",
    "imageUrl": "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=800&h=400&fit=crop",
    "dateCreated": "2024-01-10T14:22:00.000Z",
    "readTime": 12
  }
]"#;

/// The three shipped sample posts, newest first
pub fn seed_posts() -> Vec<Post> {
    serde_json::from_str(SEED_JSON).expect("seed posts are well-formed")
}
