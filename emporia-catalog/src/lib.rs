pub mod observations;
pub mod product;
pub mod store;

pub use observations::{CompetitorQuote, PriceChange, SaleRecord};
pub use product::{round_to_cents, Product};
pub use store::{CatalogError, CatalogStore, DashboardStats};
