//! zoro-core: exam record store, statistics, and derived views.
//!
//! This crate owns the exam collection and everything derived from it:
//! dashboard statistics, sorted and filtered table views, and the
//! import/export snapshot format. Persistence goes through the
//! [`traits::KeyValueStore`] seam.

pub mod error;
pub mod model;
pub mod statistics;
pub mod store;
pub mod traits;
pub mod transfer;
pub mod view;
