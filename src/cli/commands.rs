// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Complexity level: easy, medium, hard or extra-hard
        #[arg(long, short)]
        complexity: Option<String>,

        /// Number of passwords to generate
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Seed for reproducible output
        #[arg(long, env = "PASSFORGE_SEED")]
        seed: Option<u64>,
    },

    /// Analyze the strength of a password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Print sample passwords for each complexity level
    Demo,
}
