pub mod analyzer;
pub mod intent;
pub mod normalizer;
pub mod scorer;
pub mod signals;

pub use crate::domain::model::{NormalizedNumber, NormalizedView, RiskLevel, RiskResult, Signal, SignalSet};
pub use crate::domain::ports::{Blacklist, BlacklistSource};
pub use crate::utils::error::Result;
