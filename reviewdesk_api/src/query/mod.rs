mod common;
pub use self::common::{ListQuery, Query, PAGE_SIZE};
