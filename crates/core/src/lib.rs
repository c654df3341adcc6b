//! Seeded replay of run generation. Keep this crate free of IO and platform
//! concerns.

pub mod cards;
pub mod config;
pub mod content;
pub mod deck;
pub mod engine;
pub mod error;
pub mod instance;
pub mod rng;
pub mod shop;
pub mod vouchers;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use engine::*;
pub use error::*;
pub use instance::*;
pub use rng::*;
pub use shop::*;
pub use vouchers::*;
