//! Common types, traits, and error definitions for mazebot
//!
//! This module provides the foundational building blocks used by the
//! grid utilities and the search algorithms.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
