pub mod law;
pub mod token;
pub mod tracker;

pub use law::{Law, LawsEnvelope, SearchEnvelope, distinct_categories, sort_newest_first};
pub use token::{Command, Status};
pub use tracker::{TimestampError, UpdateTracker};
