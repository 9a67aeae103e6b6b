pub mod toml_config;

pub use toml_config::SpamsenseConfig;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
pub mod cli {
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    pub const DEFAULT_TEST_NUMBER: &str = "+1 (809) 555-1234";

    #[derive(Debug, Clone, Parser)]
    #[command(name = "spamsense")]
    #[command(version, about = "Phone number and call-intent spam risk heuristics")]
    pub struct CliConfig {
        /// Optional TOML file with blacklist and area-code settings
        #[arg(long, global = true)]
        pub config: Option<PathBuf>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Print single-line JSON")]
        pub compact: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Score a phone number for spam risk
        Check {
            #[arg(env = "TEST_PHONE_NUMBER", default_value = DEFAULT_TEST_NUMBER)]
            number: String,
        },
        /// Classify call or message text
        Intent {
            #[arg(long)]
            text: String,
            #[arg(long)]
            caller_id: Option<String>,
            #[arg(long, value_parser = ["inbound", "outbound"])]
            direction: Option<String>,
            #[arg(long)]
            locale: Option<String>,
            #[arg(long, help = "Log reasons and matched rules")]
            debug: bool,
        },
        /// Serve the analyzers as JSON-RPC tools over stdio
        Serve,
    }

}
