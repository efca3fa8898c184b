//! API service modules for Alpha Vantage endpoints.
//!
//! Each service provides methods for one subset of the API. Every method is
//! declared as endpoint data and dispatched through the client's shared call
//! pipeline.

mod fundamentals;
mod listings;

pub use fundamentals::FundamentalsService;
pub use listings::ListingsService;
