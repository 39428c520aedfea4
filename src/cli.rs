//! Command line handling

use anyhow::Result;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: todolist [OPTIONS]

Options:
  --config <PATH>             Load configuration from PATH
  --generate-config [PATH]    Write the default configuration and exit
  -h, --help                  Print this help
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run { config: Option<PathBuf> },
    GenerateConfig { path: Option<PathBuf> },
    Help,
}

/// Parse arguments, excluding the program name
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut config = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--generate-config" => {
                return Ok(Command::GenerateConfig {
                    path: args.next().map(PathBuf::from),
                })
            }
            "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => anyhow::bail!("--config requires a path"),
            },
            other => anyhow::bail!("Unknown argument '{}'\n\n{}", other, USAGE),
        }
    }

    Ok(Command::Run { config })
}
