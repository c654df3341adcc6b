//! Ante-by-ante forecast of a seeded run: shop queues, packs, vouchers,
//! tags, bosses and the misc streams, as the game would generate them.

pub mod analyze;
pub mod ante;
pub mod error;
pub mod item;
pub mod ledger;
pub mod lookahead;
pub mod materialize;
pub mod misc;
pub mod options;
pub mod result;
pub mod settings;
pub mod simulation;

pub use analyze::*;
pub use ante::*;
pub use error::*;
pub use item::*;
pub use ledger::*;
pub use lookahead::*;
pub use materialize::*;
pub use misc::*;
pub use options::*;
pub use result::*;
pub use settings::*;
pub use simulation::*;
