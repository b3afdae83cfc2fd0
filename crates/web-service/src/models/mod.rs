pub mod bookmarks;
pub mod common;
pub mod discover;
pub mod err;
