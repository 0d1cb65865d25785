// CLI module - command-line argument parsing and handlers
//
// Top-level flags override the config file for a single run:
// - --feed <PATH>: load posts from a TOML feed file
// - --theme <NAME>: pick a theme by name
//
// Subcommands for configuration management:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Print config file location

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Ignite Feed - terminal post feed with comments and applause
#[derive(Parser, Debug)]
#[command(name = "feed")]
#[command(version = VERSION)]
#[command(about = "Terminal post feed with comments and applause", long_about = None)]
pub struct Cli {
    /// Load posts from a TOML feed file instead of the built-in sample
    #[arg(long, value_name = "PATH")]
    pub feed: Option<PathBuf>,

    /// Theme to use for this run
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Apply per-run flag overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.feed {
            config.feed_path = Some(path.clone());
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> bool {
    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else {
                // No flag provided, show help
                println!("Usage: feed config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            true
        }
        None => false, // No subcommand, run the feed
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_runs_feed() {
        let cli = Cli::try_parse_from(["feed"]).unwrap();
        assert!(cli.feed.is_none());
        assert!(cli.theme.is_none());
        assert!(!handle_command(&cli));
    }

    #[test]
    fn test_flags_override_config() {
        let cli =
            Cli::try_parse_from(["feed", "--feed", "posts.toml", "--theme", "Ignite Light"])
                .unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);

        assert_eq!(config.feed_path, Some(PathBuf::from("posts.toml")));
        assert_eq!(config.theme, "Ignite Light");
    }

    #[test]
    fn test_apply_without_flags_keeps_config() {
        let cli = Cli::try_parse_from(["feed"]).unwrap();
        let mut config = Config::default();
        config.theme = "Terminal ANSI".to_string();
        cli.apply(&mut config);

        assert_eq!(config.theme, "Terminal ANSI");
        assert!(config.feed_path.is_none());
    }

    #[test]
    fn test_config_subcommand_parses() {
        let cli = Cli::try_parse_from(["feed", "config", "--path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                path: true,
                show: false,
                reset: false
            })
        ));
    }
}
