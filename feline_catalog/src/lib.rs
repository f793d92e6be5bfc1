//! # Feline Catalog
//!
//! The fixed reference data behind the Feline Fascination page: the breed catalog,
//! the rotating "did you know" facts, the trivia questions and the vocabulary used
//! by the personality matcher. This crate holds no interactive state.

pub mod breeds;
pub mod catalog;
pub mod config;
pub mod error;
pub mod personality;
pub mod quiz;

pub use breeds::*;
pub use catalog::*;
pub use config::*;
pub use error::*;
pub use personality::*;
pub use quiz::*;
