//! Decontamination drill binary
//!
//! ## Operating Modes
//!
//! | Mode | Command | Description |
//! |------|---------|-------------|
//! | **Drill** | `bindery-decon` | Run the announce / clear / disinfect sequence |
//! | **Catalog** | `bindery-decon --catalog` | List linked implementations and exit |

use clap::Parser;

/// Command line interface for the decontamination drill
#[derive(Parser, Debug)]
#[command(name = "bindery-decon")]
#[command(about = "Decontamination drill driven by the bindery object factory")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// List every implementation linked into this binary and exit
    ///
    /// Prints the registration table grouped by capability, including the
    /// module each implementation was registered from.
    #[arg(long, help = "List linked implementations and exit")]
    pub catalog: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    Ok(bindery_decon::run(cli.config.as_deref(), cli.catalog)?)
}
