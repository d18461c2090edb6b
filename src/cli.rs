use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Installation root holding data/ and logs/ (defaults to the crate's own directory).
    #[arg(long = "base-dir", value_name = "DIR", global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a timestamped line to a file in the log directory.
    Log(LogArgs),
    /// Print the resolved data, log and test directories.
    Paths,
    /// Display a raw pixel buffer until `q` is pressed.
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct LogArgs {
    /// Text to record.
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Log file name inside the log directory.
    #[arg(long, value_name = "NAME")]
    pub file: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// File of interleaved 8-bit samples, row-major.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[arg(long)]
    pub width: usize,

    #[arg(long)]
    pub height: usize,

    /// Samples per pixel: 1 (gray), 3 or 4.
    #[arg(long, default_value_t = 3)]
    pub channels: usize,

    /// Samples are RGB ordered instead of BGR.
    #[arg(long)]
    pub rgb: bool,

    /// Window title (defaults to the file name).
    #[arg(long)]
    pub title: Option<String>,
}
