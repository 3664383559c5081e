//! Configuration resolution from CLI args and environment

use crate::cli::Args;
use crate::error::CliError;
use crate::inputs::InputSource;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default input directory
pub const INPUT_DIR_ENV: &str = "PUZZLE_INPUT_DIR";

const DEFAULT_INPUT_DIR: &str = "~/.config/puzzle_inputs";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags every selected solver must carry
    pub tags: Vec<String>,
    pub input: InputSource,
    pub list: bool,
    pub quiet: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::resolve(args, std::env::var(INPUT_DIR_ENV).ok())
    }

    /// Precedence for the input location: `--input`, `--input-dir`, the
    /// environment, then the default directory.
    fn resolve(args: Args, env_input_dir: Option<String>) -> Result<Self, CliError> {
        let input = match (args.input, args.input_dir, env_input_dir) {
            (Some(file), _, _) => {
                if args.year.is_none() || args.day.is_none() {
                    return Err(CliError::Config(
                        "--input needs a single puzzle, select one with --year and --day"
                            .to_string(),
                    ));
                }
                InputSource::File(expand_tilde(&file))
            }
            (None, Some(dir), _) => InputSource::Dir(expand_tilde(&dir)),
            (None, None, Some(dir)) if !dir.is_empty() => {
                InputSource::Dir(expand_tilde(Path::new(&dir)))
            }
            _ => InputSource::Dir(expand_tilde(Path::new(DEFAULT_INPUT_DIR))),
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input,
            list: args.list,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
