// Role dashboards over mock data, the public job board, and job/candidate edits.

pub mod board;
pub mod handlers;
pub mod mock;

pub use board::JobBoard;
