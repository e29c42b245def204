use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "timers-tui")]
#[command(about = "Terminal UI for a timers JSON API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the configured timers API
    Run {
        /// Override `api_url` from the config file
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Run against an in-memory backend seeded with sample timers
    Dev {
        /// Artificial delay added to every backend call
        #[arg(long, default_value_t = 300)]
        latency_ms: u64,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}

impl Cli {
    pub fn command(self) -> Commands {
        self.command.unwrap_or(Commands::Run { api_url: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::parse_from(["timers-tui"]);
        assert!(matches!(cli.command(), Commands::Run { api_url: None }));
    }

    #[test]
    fn dev_latency_is_configurable() {
        let cli = Cli::parse_from(["timers-tui", "dev", "--latency-ms", "0"]);
        assert!(matches!(cli.command(), Commands::Dev { latency_ms: 0 }));
    }

    #[test]
    fn run_accepts_api_url_override() {
        let cli = Cli::parse_from(["timers-tui", "run", "--api-url", "http://example.test"]);
        match cli.command() {
            Commands::Run { api_url } => assert_eq!(api_url.as_deref(), Some("http://example.test")),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
