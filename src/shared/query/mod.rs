pub mod list_query;
pub mod record_query;
pub mod tracked;

pub use list_query::{ListQuery, ListRequest, PageRequest, RecordList, SearchQuery, SortOrder};
pub use record_query::{fetch_records, Searchable};
pub use tracked::{live, live_by_ref, resolve_key, resolve_optional_key, HasStatus, Tracked};
