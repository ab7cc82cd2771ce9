use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "netgauge",
    version,
    about = "Batch report generator for network diagnostic logs — per-file and global statistics with PASS/WARNING/FAIL grading"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze the diagnostic logs in a directory and append text reports
    Analyze(super::commands::analyze::AnalyzeArgs),
}
