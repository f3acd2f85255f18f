// src/view/mod.rs
// =============================================================================
// Presentation helpers for the terminal front-end.
//
// Submodules:
// - state: Loading / Success / Error lifecycle with stale-response guarding
// - messages: canned loading and error messages, and injectable picking
// - pagination: page arithmetic for the repository list
// - pager: the repository list with its search query and page
// - clipboard: copy the rendered tree (optional feature)
// =============================================================================

mod clipboard;
mod messages;
mod pager;
mod pagination;
mod state;

pub use clipboard::{can_copy, copy_to_clipboard};
pub use messages::{RandomPicker, LIST_LOADING_MESSAGES, TREE_LOADING_MESSAGES};
pub use pager::{PagerCommand, RepoPager};
pub use pagination::Pagination;
pub use state::{View, ViewState};
