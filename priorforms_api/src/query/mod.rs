mod common;
pub use self::common::{Query, SortDirection};

mod revision;
pub use self::revision::{Criteria, RevisionQuery};
