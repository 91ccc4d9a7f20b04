//! Hand-rolled argument parsing for the thin command surface.

use std::path::PathBuf;

pub const USAGE: &str = "\
crucible — self-evolving benchmark corpus engine

USAGE:
    crucible [--config <path>] [--corpus <path>] <command> [options]

COMMANDS:
    evolve    Generate cases for deficient categories and merge them
    gaps      Report per-category coverage against target
    stats     Corpus totals
    help      Show this message

EVOLVE OPTIONS:
    --category <name>   Target one category explicitly
    --count <n>         Cases to request (requires --category)
    --dry-run           Run everything but skip the corpus write
    --no-validate       Skip the external sanity validator

ENVIRONMENT:
    ANTHROPIC_API_KEY   Primary provider credential
    OPENAI_API_KEY      Fallback provider credential
    CRUCIBLE_LOG        Log filter (default: info)";

#[derive(Debug)]
pub struct Cli {
    pub config_path: Option<PathBuf>,
    pub corpus_path: Option<String>,
    pub command: Command,
}

#[derive(Debug)]
pub enum Command {
    Evolve {
        category: Option<String>,
        count: Option<usize>,
        dry_run: bool,
        no_validate: bool,
    },
    Gaps,
    Stats,
    Help,
}

pub fn parse(args: impl Iterator<Item = String>) -> Result<Cli, String> {
    let mut args = args.peekable();
    let mut config_path = None;
    let mut corpus_path = None;

    // Globals may precede the command.
    let command_name = loop {
        match args.next() {
            Some(arg) if arg == "--config" => {
                config_path = Some(PathBuf::from(expect_value(&mut args, "--config")?));
            }
            Some(arg) if arg == "--corpus" => {
                corpus_path = Some(expect_value(&mut args, "--corpus")?);
            }
            Some(arg) if arg == "--help" || arg == "-h" => break "help".to_string(),
            Some(arg) if arg.starts_with('-') => {
                return Err(format!("unknown option `{arg}`"));
            }
            Some(arg) => break arg,
            None => break "help".to_string(),
        }
    };

    let command = match command_name.as_str() {
        "help" => Command::Help,
        "gaps" => Command::Gaps,
        "stats" => Command::Stats,
        "evolve" => {
            let mut category = None;
            let mut count = None;
            let mut dry_run = false;
            let mut no_validate = false;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--category" => category = Some(expect_value(&mut args, "--category")?),
                    "--count" => {
                        let raw = expect_value(&mut args, "--count")?;
                        count = Some(
                            raw.parse::<usize>()
                                .map_err(|_| format!("--count expects a number, got `{raw}`"))?,
                        );
                    }
                    "--dry-run" => dry_run = true,
                    "--no-validate" => no_validate = true,
                    other => return Err(format!("unknown evolve option `{other}`")),
                }
            }
            Command::Evolve {
                category,
                count,
                dry_run,
                no_validate,
            }
        }
        other => return Err(format!("unknown command `{other}`")),
    };

    if let Some(extra) = args.next() {
        return Err(format!("unexpected argument `{extra}`"));
    }

    Ok(Cli {
        config_path,
        corpus_path,
        command,
    })
}

fn expect_value(
    args: &mut std::iter::Peekable<impl Iterator<Item = String>>,
    flag: &str,
) -> Result<String, String> {
    match args.next() {
        Some(value) if !value.starts_with('-') => Ok(value),
        _ => Err(format!("{flag} expects a value")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(argv: &[&str]) -> Cli {
        parse(argv.iter().map(|s| s.to_string())).unwrap()
    }

    #[test]
    fn bare_invocation_shows_help() {
        assert!(matches!(parse_ok(&[]).command, Command::Help));
    }

    #[test]
    fn evolve_with_all_options() {
        let cli = parse_ok(&[
            "--corpus",
            "bench.json",
            "evolve",
            "--category",
            "hallucination",
            "--count",
            "4",
            "--dry-run",
        ]);
        assert_eq!(cli.corpus_path.as_deref(), Some("bench.json"));
        match cli.command {
            Command::Evolve {
                category,
                count,
                dry_run,
                no_validate,
            } => {
                assert_eq!(category.as_deref(), Some("hallucination"));
                assert_eq!(count, Some(4));
                assert!(dry_run);
                assert!(!no_validate);
            }
            _ => panic!("expected evolve"),
        }
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        let err = parse(
            ["evolve", "--count", "many"].iter().map(|s| s.to_string()),
        )
        .unwrap_err();
        assert!(err.contains("--count"));
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = parse(["prune"].iter().map(|s| s.to_string())).unwrap_err();
        assert!(err.contains("unknown command"));
    }

    #[test]
    fn missing_flag_value_is_rejected() {
        let err = parse(
            ["evolve", "--category"].iter().map(|s| s.to_string()),
        )
        .unwrap_err();
        assert!(err.contains("--category"));
    }
}
