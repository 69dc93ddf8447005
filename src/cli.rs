use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "projadm")]
#[command(about = "Administer projects in the project directory", version)]
#[command(after_help = "EXAMPLES:
    projadm list                          List all projects
    projadm edit analytics --tag ml       Retag a project
    projadm delete analytics              Delete a project (asks first)
    projadm list --format json            Machine-readable output")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    projadm list
    projadm list --format json"
    )]
    List,
    /// Change a project's tag or endpoints
    #[command(after_help = "EXAMPLES:
    projadm edit analytics --tag research
    projadm edit p-42 --endpoint local --endpoint aws")]
    Edit(EditArgs),
    /// Delete a project
    #[command(
        alias = "rm",
        after_help = "EXAMPLES:
    projadm delete analytics
    projadm delete p-42 --yes"
    )]
    Delete(DeleteArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    projadm completions bash > ~/.bash_completion.d/projadm
    projadm completions zsh > ~/.zfunc/_projadm")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args)]
pub struct EditArgs {
    /// Project id or name
    pub project: String,

    /// New classification tag
    #[arg(long, short)]
    pub tag: Option<String>,

    /// Replace endpoints (repeat for several)
    #[arg(long = "endpoint", short = 'e')]
    pub endpoints: Vec<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Project id or name
    pub project: String,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}
