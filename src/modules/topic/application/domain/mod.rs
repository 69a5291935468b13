pub mod entities;
pub mod list_query;
pub mod slug;
