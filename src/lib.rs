//! Session-based strength training set tracker.
//!
//! The core is pure: validation of raw set entries, 1RM and rep-max
//! estimation, an effective volume model, an immutable session accumulator
//! with next-set recommendations, and summary rendering. The binary adds the
//! terminal prompt loop and the last-session store.

pub mod domain;
pub mod error;
pub mod formulas;
pub mod session;
pub mod store;
pub mod summary;
pub mod validation;
pub mod volume;
pub mod workout;
