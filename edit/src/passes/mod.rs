pub mod dedup_tokens;
pub mod insert_variable;
pub mod merge;
pub mod sanitize_append_modifier;
pub mod set_version;
pub mod sort_tokens;

pub use dedup_tokens::dedup_tokens;
pub use insert_variable::insert_variable;
pub use merge::{merge, MergeOptions};
pub use sanitize_append_modifier::sanitize_append_modifier;
pub use set_version::set_version;
pub use sort_tokens::sort_tokens;
