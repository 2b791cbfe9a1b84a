mod client;
mod errors;
mod listing;
mod query;
pub mod user_agent;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::listing::ListingTable;
pub use self::query::{Criteria, Query, RevisionQuery, SortDirection};
