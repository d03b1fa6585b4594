//! Free-text search over the catalog.
//!
//! ```text
//!   query ──► normalize ──┐
//!                         ├──► substring match ──► ResultSet (catalog order)
//!   title / tagline /     │
//!   overview / genres ──► normalize
//! ```
//!
//! There is no ranking: results keep the order of the catalog.

pub mod filter;
pub mod normalize;

pub use filter::{ResultSet, filter, matches};
pub use normalize::normalize;
