//! Blog journal subsystem for kitbag
//!
//! A durable list of posts behind a localStorage-style slot, plus the
//! pure projections a front end renders from.
//!
//! # Design Principles
//!
//! - The in-memory list is the working copy; every mutation rewrites the
//!   slot in full (one atomic overwrite, no partial writes)
//! - Loading never fails: corrupt or missing data falls back to the seed
//! - Validation happens only at the input boundary (create/update);
//!   imported posts are taken as-is
//! - Projections and statistics are derived, deterministic, and never
//!   mutate the list

mod category;
mod errors;
mod ops;
mod post;
mod projection;
mod seed;
mod slot;
pub mod stats;
mod store;
mod theme;
mod transfer;
mod validate;

pub use category::Category;
pub use errors::{BlogError, BlogResult};
pub use ops::{dispatch, BlogOp, CreateOp, ListOp, OpOutcome, ReplaceAllOp, UpdateOp};
pub use post::{read_time_minutes, Post, PostDraft, PostPatch};
pub use projection::{project, CategoryFilter, Listing, Query, SortKey};
pub use seed::seed_posts;
pub use slot::{DurableSlot, POSTS_KEY, THEME_KEY};
pub use store::PostStore;
pub use theme::Theme;
pub use transfer::{
    default_export_filename, parse_import, read_import, write_export, TransferDocument,
    TRANSFER_VERSION,
};
pub use validate::{validate_draft, FieldErrors};
