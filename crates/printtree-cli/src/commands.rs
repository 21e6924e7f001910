//! Command handlers.
//!
//! Each handler writes its output to the given stream so it can be driven
//! from tests as well as from `main`.

use crate::cli::{Cli, Command, ConfigAction, CsvArgs, PairsArgs};
use crate::config::{Config, delimiter_byte};
use crate::{Error, Result};
use log::{debug, info};
use printtree_graph::Tree;
use printtree_loaders::load_pairs_reader;
use printtree_render::render_tree;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

// ============================================================================
// Dispatch
// ============================================================================

/// Runs the parsed command against `config`, writing to `out`.
pub fn run(cli: &Cli, config: &Config, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Command::Pairs(args) => cmd_pairs(args, config, out),
        Command::Csv(args) => cmd_csv(args, config, out),
        Command::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(config, out),
            ConfigAction::Path => cmd_config_path(cli.config.as_deref(), out),
        },
    }
}

// ============================================================================
// Render commands
// ============================================================================

/// Loads `start,end` records and renders them.
pub fn cmd_pairs(args: &PairsArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let delimiter = delimiter_byte(args.delimiter.unwrap_or(config.csv.delimiter))?;
    let input = open_input(args.file.as_deref())?;
    let tree = load_pairs_reader(input, delimiter)?;
    render(&tree, out)
}

/// Loads delimited rows and renders them.
pub fn cmd_csv(args: &CsvArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let options = config.csv.with_overrides(args);
    debug!("CSV options: {options:?}");
    let loader = options.loader()?;
    let tree = match args.file.as_deref() {
        Some(path) => loader.load_path(path)?,
        None => loader.load_reader(io::stdin().lock())?,
    };
    render(&tree, out)
}

fn render(tree: &Tree<String>, out: &mut dyn Write) -> Result<()> {
    info!(
        "Rendering {} nodes, {} edges",
        tree.node_count(),
        tree.edge_count()
    );
    render_tree(tree, out)?;
    out.flush()?;
    Ok(())
}

fn open_input(file: Option<&Path>) -> Result<Box<dyn Read>> {
    match file {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| printtree_loaders::Error::io_with_path(e, path))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

// ============================================================================
// Config commands
// ============================================================================

/// Prints the effective configuration as TOML.
pub fn cmd_config_show(config: &Config, out: &mut dyn Write) -> Result<()> {
    out.write_all(config.to_toml_string()?.as_bytes())?;
    Ok(())
}

/// Prints the config file in use, or notes that defaults apply.
pub fn cmd_config_path(explicit: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    match Config::resolve_path(explicit) {
        Some(path) => writeln!(out, "{}", path.display())?,
        None => match Config::default_path() {
            Some(path) => writeln!(out, "{} (not present; using defaults)", path.display())?,
            None => {
                return Err(Error::config(
                    "Could not determine config directory for this platform",
                ));
            }
        },
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn output_of(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_pairs_command_renders_file() {
        let input = write_temp("a,b\nb,c\na,e\n");
        let args = PairsArgs {
            file: Some(input.path().to_path_buf()),
            delimiter: None,
        };
        let text = output_of(|out| cmd_pairs(&args, &Config::default(), out));
        assert_eq!(text, "* a\n|\\\n| * e\n* b\n* c\n");
    }

    #[test]
    fn test_pairs_command_uses_flag_delimiter() {
        let input = write_temp("x|y\n");
        let args = PairsArgs {
            file: Some(input.path().to_path_buf()),
            delimiter: Some('|'),
        };
        let text = output_of(|out| cmd_pairs(&args, &Config::default(), out));
        assert_eq!(text, "* x\n* y\n");
    }

    #[test]
    fn test_pairs_command_missing_file() {
        let args = PairsArgs {
            file: Some(PathBuf::from("/definitely/not/here.csv")),
            delimiter: None,
        };
        let mut buffer = Vec::new();
        let err = cmd_pairs(&args, &Config::default(), &mut buffer).unwrap_err();
        assert!(matches!(err, Error::Loader(printtree_loaders::Error::Io { .. })));
    }

    #[test]
    fn test_csv_command_merges_config_and_flags() {
        let input = write_temp("id;parent\nroot;\nleaf;root\n");
        let mut config = Config::default();
        config.csv.header_rows = 1;
        let args = CsvArgs {
            file: Some(input.path().to_path_buf()),
            parent_column: Some(1),
            delimiter: Some(';'),
            ..CsvArgs::default()
        };
        let text = output_of(|out| cmd_csv(&args, &config, out));
        assert_eq!(text, "* root\n* leaf\n");
    }

    #[test]
    fn test_config_show_prints_toml() {
        let text = output_of(|out| cmd_config_show(&Config::default(), out));
        assert!(text.contains("log_level = \"warn\""));
        assert!(text.contains("[csv]"));
    }

    #[test]
    fn test_config_path_explicit() {
        let text = output_of(|out| cmd_config_path(Some(Path::new("/etc/pt.toml")), out));
        assert_eq!(text, "/etc/pt.toml\n");
    }
}
