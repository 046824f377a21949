//! Runtime configuration, read from command-line arguments with environment fallbacks.

use std::path::PathBuf;

use clap::Parser;

use crate::constants::DEFAULT_FONT_PATH;

pub const FONT_ENV: &str = "FLAPPY_DOT_FONT";
pub const SEED_ENV: &str = "FLAPPY_DOT_SEED";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "flappy-dot")]
#[command(about = "Guide the dot through the pipes")]
pub struct Config {
    /// TTF font used for all text
    #[arg(short, long = "font", env = FONT_ENV, default_value = DEFAULT_FONT_PATH)]
    pub font_path: PathBuf,

    /// Seed for pipe placement; taken from the operating system when absent
    #[arg(short, long, env = SEED_ENV)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::env;
    use pretty_assertions::assert_eq;

    /// Parses `args` with the environment fallbacks cleared.
    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        env::remove_var(FONT_ENV);
        env::remove_var(SEED_ENV);
        Config::try_parse_from(args)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["flappy-dot"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.font_path, PathBuf::from("OptimusPrinceps.ttf"));
    }

    #[test]
    fn test_flags() {
        let config = parse(&["flappy-dot", "--font", "fonts/a.ttf", "-s", "42"]).unwrap();
        assert_eq!(config.font_path, PathBuf::from("fonts/a.ttf"));
        assert_eq!(config.seed, Some(42));

        let config = parse(&["flappy-dot", "-f", "b.ttf", "--seed", "7"]).unwrap();
        assert_eq!(config.font_path, PathBuf::from("b.ttf"));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_errors() {
        let kind = |args: &[&str]| parse(args).unwrap_err().kind();

        assert_eq!(kind(&["flappy-dot", "--font"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["flappy-dot", "--seed", "abc"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["flappy-dot", "--fullscreen"]), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help() {
        let err = parse(&["flappy-dot", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
