//! Sidebar statistics
//!
//! Derived read-only summaries: the totals panel, the per-category counts
//! behind the filter pills, and the five most recent posts. Categories
//! outside the fixed set (possible after an import) count toward the
//! distinct-category total but get no pill row of their own.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::category::Category;
use super::post::Post;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_posts: usize,
    /// Distinct category strings in use
    pub categories_used: usize,
    /// Sum of every post's reading time, in minutes
    pub total_reading_time: u64,
    /// `All` first, then the fixed set in display order
    pub category_counts: Vec<CategoryCount>,
    /// Up to five posts, newest first
    pub recent_posts: Vec<RecentPost>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPost {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub date_created: DateTime<Utc>,
}

/// Compute every summary in one pass over the list
pub fn compute(posts: &[Post]) -> Statistics {
    let mut distinct: Vec<&str> = posts.iter().map(|p| p.category.as_str()).collect();
    distinct.sort_unstable();
    distinct.dedup();

    let mut category_counts = vec![CategoryCount {
        category: "All".to_string(),
        count: posts.len(),
    }];
    for category in Category::ALL {
        category_counts.push(CategoryCount {
            category: category.as_str().to_string(),
            count: posts
                .iter()
                .filter(|p| p.category == category.as_str())
                .count(),
        });
    }

    let mut by_recency: Vec<&Post> = posts.iter().collect();
    by_recency.sort_by(|a, b| b.date_created.cmp(&a.date_created).then(a.id.cmp(&b.id)));
    let recent_posts = by_recency
        .into_iter()
        .take(5)
        .map(|p| RecentPost {
            id: p.id,
            title: p.title.clone(),
            category: p.category.clone(),
            date_created: p.date_created,
        })
        .collect();

    Statistics {
        total_posts: posts.len(),
        categories_used: distinct.len(),
        total_reading_time: posts.iter().map(|p| u64::from(p.read_time)).sum(),
        category_counts,
        recent_posts,
    }
}
