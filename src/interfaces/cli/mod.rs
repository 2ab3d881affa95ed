use std::path::PathBuf;

use clap::Parser;

use crate::io::format::dcg_output;

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Logs a nicely formatted dcaspt2gen heading to the `dcaspt2gen-output` logger.
pub fn log_heading() {
    let version = if let Some(ver) = VERSION {
        format!("v{ver}")
    } else {
        "v unknown".to_string()
    };
    let heading = format!(" dcaspt2gen ── DIRAC-CASPT2 and IVO input generation {version:>9} ");
    let bar = "─".repeat(heading.chars().count());
    dcg_output!("╭{bar}╮");
    dcg_output!("│{heading}│");
    dcg_output!("╰{bar}╯");
    dcg_output!("");
}

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to the YAML job file describing the classified spinor table.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path the generated CASPT2 input file is written to.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory overriding the default application directory (`~/.dcaspt2gen`).
    #[arg(long)]
    pub app_dir: Option<PathBuf>,

    /// Path to a DIRAC output file to be summarised with `sum_dirac_dfcoef` before any
    /// generation.
    #[arg(long, requires = "molecule")]
    pub dirac_output: Option<PathBuf>,

    /// Molecule formula of the DIRAC calculation; required with `--dirac-output`.
    #[arg(long, requires = "dirac_output")]
    pub molecule: Option<String>,

    /// Increases the verbosity of the diagnostic log.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
