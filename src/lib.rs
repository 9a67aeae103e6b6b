pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ChainedBlacklist, EnvBlacklist, StaticBlacklist};
pub use config::SpamsenseConfig;
pub use crate::core::{
    analyzer::PhoneAnalyzer,
    intent::{CallContext, CallIntentAnalysis, IntentDetector},
    normalizer::{normalize, split_national},
    scorer::score,
    signals::{extract_signals, AreaCodeSets, SignalExtractor},
};
pub use domain::model::{NormalizedNumber, RiskLevel, RiskResult, SignalSet};
pub use domain::ports::{Blacklist, BlacklistSource};
pub use server::ToolServer;
pub use utils::error::{Result, SpamsenseError};
