//! # Templates
//!
//! Terminal output is rendered from minijinja templates kept in `templates/` and
//! embedded here as string constants.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so a line holding
//! only a block tag produces no output. A newline right after a block tag is eaten
//! too, which is why lines never end in an inline `{% ... %}`: inline branching is
//! written as an expression (`{{ a if cond else b }}`) and anything harder moves to
//! a Rust filter (see `tags` in `render.rs`).
//!
//! Layout (widths, padding, truncation) is computed in Rust. Templates pick styles.

pub const LISTING_TEMPLATE: &str = include_str!("templates/listing.tmp");
pub const DETAIL_TEMPLATE: &str = include_str!("templates/detail.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const TYPES_TEMPLATE: &str = include_str!("templates/types.tmp");
pub const HELP_TEMPLATE: &str = include_str!("templates/help.tmp");
