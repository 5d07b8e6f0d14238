//! Listing projection
//!
//! Pure derived computation over the post list: filter, then search, then
//! sort, recomputed in full on every call. The store itself is never
//! mutated and never reordered.
//!
//! Ordering is total: every sort key breaks ties by ascending `id`, so
//! equal keys still produce one deterministic listing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::post::Post;

/// Category filter stage. `All` is the sentinel that keeps everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Named(String),
}

impl CategoryFilter {
    /// `"all"` (any case) is the sentinel; anything else filters by exact
    /// category string
    pub fn parse(value: &str) -> CategoryFilter {
        if value.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    fn keeps(&self, post: &Post) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => post.category == *name,
        }
    }
}

/// Sort order for the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// By creation date, newest first (the default)
    Newest,
    /// By creation date, oldest first
    Oldest,
    /// By title, case-insensitive ascending
    Title,
    /// By reading time, shortest first
    #[serde(alias = "readTime")]
    ReadTime,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Title => "title",
            SortKey::ReadTime => "read-time",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<SortKey, String> {
        match value {
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "title" => Ok(SortKey::Title),
            "read-time" | "readTime" => Ok(SortKey::ReadTime),
            other => Err(format!(
                "unknown sort key '{}' (expected newest, oldest, title, read-time)",
                other
            )),
        }
    }
}

/// Parameters of one listing call
#[derive(Debug, Clone)]
pub struct Query {
    pub filter: CategoryFilter,
    search: String,
    pub sort: SortKey,
}

impl Query {
    /// The search term is normalized once: trimmed and lowercased. An
    /// empty term disables the search stage.
    pub fn new(filter: CategoryFilter, search: &str, sort: SortKey) -> Query {
        Query {
            filter,
            search: search.trim().to_lowercase(),
            sort,
        }
    }

    pub fn search_active(&self) -> bool {
        !self.search.is_empty()
    }
}

impl Default for Query {
    fn default() -> Query {
        Query::new(CategoryFilter::All, "", SortKey::Newest)
    }
}

/// One computed listing: the posts that survived both stages, sorted,
/// plus the heading the journal displays above them
#[derive(Debug)]
pub struct Listing<'a> {
    pub heading: String,
    pub posts: Vec<&'a Post>,
}

/// Run the three stages over `posts`
pub fn project<'a>(posts: &'a [Post], query: &Query) -> Listing<'a> {
    let mut kept: Vec<&Post> = posts
        .iter()
        .filter(|post| query.filter.keeps(post))
        .filter(|post| !query.search_active() || matches_term(post, &query.search))
        .collect();

    sort_posts(&mut kept, query.sort);

    Listing {
        heading: heading_for(query, kept.len()),
        posts: kept,
    }
}

/// Case-insensitive substring match over title, content, and category.
/// `term` is already lowercased.
fn matches_term(post: &Post, term: &str) -> bool {
    post.title.to_lowercase().contains(term)
        || post.content.to_lowercase().contains(term)
        || post.category.to_lowercase().contains(term)
}

fn sort_posts(posts: &mut [&Post], key: SortKey) {
    match key {
        SortKey::Newest => posts.sort_by(|a, b| {
            b.date_created.cmp(&a.date_created).then(a.id.cmp(&b.id))
        }),
        SortKey::Oldest => posts.sort_by(|a, b| {
            a.date_created.cmp(&b.date_created).then(a.id.cmp(&b.id))
        }),
        SortKey::Title => posts.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then(a.id.cmp(&b.id))
        }),
        SortKey::ReadTime => posts.sort_by(|a, b| {
            a.read_time.cmp(&b.read_time).then(a.id.cmp(&b.id))
        }),
    }
}

/// Heading in the journal's style: a search overrides the filter label
fn heading_for(query: &Query, count: usize) -> String {
    if query.search_active() {
        format!("Search Results ({})", count)
    } else {
        match &query.filter {
            CategoryFilter::All => format!("All Posts ({})", count),
            CategoryFilter::Named(name) => format!("{} ({})", name, count),
        }
    }
}
