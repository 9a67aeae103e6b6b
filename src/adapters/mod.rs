// Adapters layer: concrete blacklist sources behind the domain port.

pub mod blacklist;

pub use blacklist::{ChainedBlacklist, EnvBlacklist, StaticBlacklist, DEFAULT_BLACKLIST_ENV};
