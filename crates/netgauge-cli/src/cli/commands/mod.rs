pub mod analyze;

use super::args::{Cli, Command};
use anyhow::Result;

pub fn dispatch(cli: Cli) -> Result<i32> {
    match cli.cmd {
        Command::Analyze(args) => analyze::run(args),
    }
}
