//! Permutation-based route optimisation.
//!
//! A [`RouteOptimizer`] holds named locations and the distances between
//! them, and answers "shortest/longest route visiting every location once"
//! by scoring every ordering. The search is factorial in the number of
//! locations and meant for a handful of them.

pub mod error;
pub mod optimizer;
pub mod options;

pub use error::RouteError;
pub use optimizer::{Route, RouteOptimizer};
pub use options::RouteOptions;
