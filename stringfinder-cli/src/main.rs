use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use stringfinder::{config::parse_file_types, search, SearchConfig, SearchError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE_HINT: &str = "Not valid arguments given. Please refer to --help if you're lost.";

const AFTER_HELP: &str = "\
Positional parameters: 1. path 2. string

Example 1: stringfinder /home/user npm
Example 2: stringfinder /home/user/downloads flower -f .txt,.md,.csv -n";

#[derive(Parser, Debug)]
#[command(name = "stringfinder", version, about, long_about = None, after_help = AFTER_HELP)]
struct Cli {
    /// The search path
    #[arg(short = 'p', long = "path")]
    path: Option<PathBuf>,

    /// The string to be searched
    #[arg(short = 's', long = "string")]
    string: Option<String>,

    /// Targeted filetypes separated with comma (e.g. .txt,.md,.csv)
    #[arg(short = 'f', long = "filetypes")]
    filetypes: Option<String>,

    /// Disable recursive search
    #[arg(short = 'n', long = "nonrec")]
    nonrec: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "log-level", default_value = "warn")]
    log_level: String,

    /// Path and string given positionally
    #[arg(value_name = "ARGS")]
    positional: Vec<String>,
}

impl Cli {
    /// The path and pattern to search, from the flag pair or two positionals
    fn target(&self) -> Option<(PathBuf, String)> {
        match (&self.path, &self.string) {
            (Some(path), Some(string)) => Some((path.clone(), string.clone())),
            _ if self.positional.len() == 2 => Some((
                PathBuf::from(&self.positional[0]),
                self.positional[1].clone(),
            )),
            _ => None,
        }
    }

    fn search_config(&self) -> Option<SearchConfig> {
        let (path, pattern) = self.target()?;
        Some(
            SearchConfig::new(path, pattern)
                .recursive(!self.nonrec)
                .with_file_types(
                    self.filetypes
                        .as_deref()
                        .map(parse_file_types)
                        .unwrap_or_default(),
                )
                .with_log_level(self.log_level.clone()),
        )
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stdout)
        .with_ansi(io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            println!("{}", USAGE_HINT);
            return Ok(());
        }
    };

    let Some(config) = cli.search_config() else {
        println!("{}", USAGE_HINT);
        return Ok(());
    };

    init_logging(&config.log_level);
    debug!("Search config: {:?}", config);

    let output = match search(&config) {
        Ok(output) => output,
        Err(err @ (SearchError::InvalidPattern(_) | SearchError::ConfigError(_))) => {
            println!("{}", err);
            println!("{}", USAGE_HINT);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", output.report(&config.pattern))?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stringfinder").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flag_pair() {
        let config = parse(&["-p", "/tmp", "-s", "foo"]).search_config().unwrap();
        assert_eq!(config.root_path, PathBuf::from("/tmp"));
        assert_eq!(config.pattern, "foo");
        assert!(config.recursive);
        assert!(config.file_types.is_empty());
    }

    #[test]
    fn test_positionals() {
        let config = parse(&["/tmp", "foo", "-f", ".txt,.md", "-n"])
            .search_config()
            .unwrap();
        assert_eq!(config.root_path, PathBuf::from("/tmp"));
        assert_eq!(config.pattern, "foo");
        assert!(!config.recursive);
        assert_eq!(config.file_types, vec![".txt", ".md"]);
    }

    #[test]
    fn test_insufficient_arguments() {
        assert!(parse(&[]).search_config().is_none());
        assert!(parse(&["/tmp"]).search_config().is_none());
        assert!(parse(&["-p", "/tmp"]).search_config().is_none());
        assert!(parse(&["a", "b", "c"]).search_config().is_none());
    }
}
