use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "select-ctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve the organization, region or VM size for a platform command")]
#[command(long_about = "Resolves platform selections from flags, environment or ~/.select-ctl.toml, and falls back to an interactive picker when running in a terminal.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Never prompt; missing values are errors
    #[arg(long, global = true, env = "SELECT_CTL_NON_INTERACTIVE")]
    pub non_interactive: bool,

    /// Organization slug
    #[arg(short, long, global = true, env = "SELECT_CTL_ORG", value_name = "SLUG")]
    pub org: Option<String>,

    /// Region code
    #[arg(short, long, global = true, env = "SELECT_CTL_REGION", value_name = "CODE")]
    pub region: Option<String>,

    /// Region codes, comma-separated
    #[arg(long, global = true, env = "SELECT_CTL_REGIONS", value_delimiter = ',', value_name = "CODES")]
    pub regions: Option<Vec<String>>,

    /// Platform API access token
    #[arg(long, global = true, env = "SELECT_CTL_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Platform API URL
    #[arg(long, global = true, env = "SELECT_CTL_API_URL", value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the organization
    Org,

    /// Resolve a single region
    Region {
        /// Prompt message
        #[arg(short, long, default_value = "")]
        message: String,
    },

    /// Resolve a set of regions
    Regions {
        /// Prompt message
        #[arg(short, long, default_value = "")]
        message: String,

        /// Regions to pre-check, comma-separated
        #[arg(long, value_delimiter = ',')]
        current: Vec<String>,

        /// Region to leave out of the list
        #[arg(long, default_value = "")]
        exclude: String,
    },

    /// Resolve a VM size
    VmSize {
        /// VM size name
        #[arg(short, long, env = "SELECT_CTL_VM_SIZE")]
        size: Option<String>,
    },
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_flag_is_comma_separated() {
        let cli = Cli::try_parse_from(["select-ctl", "--regions", "ams,iad", "regions"]).unwrap();
        assert_eq!(
            cli.regions,
            Some(vec!["ams".to_string(), "iad".to_string()])
        );
    }

    #[test]
    fn test_regions_subcommand_args() {
        let cli = Cli::try_parse_from([
            "select-ctl",
            "regions",
            "--current",
            "ams,syd",
            "--exclude",
            "iad",
        ])
        .unwrap();
        match cli.command {
            Commands::Regions {
                current, exclude, ..
            } => {
                assert_eq!(current, vec!["ams", "syd"]);
                assert_eq!(exclude, "iad");
            }
            _ => panic!("expected regions"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["select-ctl", "org", "--org", "acme", "-vv"]).unwrap();
        assert_eq!(cli.org.as_deref(), Some("acme"));
        assert_eq!(cli.verbose, 2);
    }
}
