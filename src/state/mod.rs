pub mod filter;
pub mod store;

pub use filter::IncidentFilter;
pub use store::IncidentStore;
