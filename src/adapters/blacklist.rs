use crate::domain::ports::{Blacklist, BlacklistSource};
use std::env;

pub const DEFAULT_BLACKLIST_ENV: &str = "SPAM_BLACKLIST";

/// Reads a comma-separated blacklist from an environment variable on every load.
#[derive(Debug, Clone)]
pub struct EnvBlacklist {
    var: String,
}

impl EnvBlacklist {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvBlacklist {
    fn default() -> Self {
        Self::new(DEFAULT_BLACKLIST_ENV)
    }
}

impl BlacklistSource for EnvBlacklist {
    fn load(&self) -> Blacklist {
        match env::var(&self.var) {
            Ok(value) => Blacklist::from_delimited(&value),
            Err(env::VarError::NotPresent) => Blacklist::new(),
            Err(env::VarError::NotUnicode(_)) => {
                tracing::warn!("{} is not valid unicode, ignoring it", self.var);
                Blacklist::new()
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticBlacklist {
    list: Blacklist,
}

impl StaticBlacklist {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            list: Blacklist::from_entries(entries),
        }
    }
}

impl BlacklistSource for StaticBlacklist {
    fn load(&self) -> Blacklist {
        self.list.clone()
    }
}

/// Union of several sources, each loaded fresh.
#[derive(Default)]
pub struct ChainedBlacklist {
    sources: Vec<Box<dyn BlacklistSource>>,
}

impl ChainedBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl BlacklistSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }
}

impl BlacklistSource for ChainedBlacklist {
    fn load(&self) -> Blacklist {
        let mut merged = Blacklist::new();
        for source in &self.sources {
            merged.extend(source.load());
        }
        merged
    }
}
