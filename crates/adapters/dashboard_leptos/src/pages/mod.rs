mod dashboard;
mod not_found;
mod query;

pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use query::Query;
