mod cli;
mod config;
mod errors;
mod models;
mod output;
mod record;
mod render;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::errors::GenError;
use crate::output::write_output;
use crate::record::load_record;
use crate::render::render;

fn main() -> ExitCode {
    // Usage errors exit with status 2 inside clap
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("resumegen: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr; stdout may be carrying the document
    let level = if cli.verbose { "debug" } else { config.rust_log.as_str() };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(gen_err) = e.downcast_ref::<GenError>() {
                debug!(code = gen_err.code(), "Generation failed");
            }
            eprintln!("resumegen: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// One parse → render → write pass.
fn run(cli: &Cli, config: &Config) -> Result<()> {
    let input = cli.input_path();
    let mode = cli.mode();
    let format = cli.format();
    info!(
        "Generating {:?} as {:?} from {}",
        mode,
        format,
        input.display()
    );

    let record = load_record(&input, mode)?;
    info!("Loaded record for {}", record.identity().name);
    let document = render(&record, format, config);

    let dest = cli.destination();
    write_output(&dest, &document)
        .with_context(|| format!("Failed to emit {mode:?} document"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("resumegen").chain(args.iter().copied())).unwrap()
    }

    fn write_input(dir: &TempDir, name: &str, json: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, json).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_run_writes_latex_resume() {
        let dir = TempDir::new().unwrap();
        let input = write_input(
            &dir,
            "resume.json",
            r#"{"name": "Jane Doe", "email": "jane@example.com",
                "experience": [{"title": "Engineer", "organization": "R&D Labs"}]}"#,
        );
        let out = dir.path().join("resume.tex");
        let out_arg = out.to_string_lossy().into_owned();

        run(&cli(&["-o", &out_arg, &input]), &Config::default()).unwrap();

        let tex = std::fs::read_to_string(&out).unwrap();
        assert!(tex.starts_with(r"\documentclass[10pt]{article}"));
        assert!(tex.contains(r"\section*{Experience}"));
        assert!(tex.contains(r"{R\&D Labs}"));
        assert!(tex.trim_end().ends_with(r"\end{document}"));
    }

    #[test]
    fn test_run_writes_plaintext_references() {
        let dir = TempDir::new().unwrap();
        let input = write_input(
            &dir,
            "references.json",
            r#"{"name": "Jane Doe",
                "references": [{"name": "Sam Roe", "relationship": "Colleague & Manager"}]}"#,
        );
        let out = dir.path().join("references.txt");
        let out_arg = out.to_string_lossy().into_owned();

        run(&cli(&["-r", "-p", "-o", &out_arg, &input]), &Config::default()).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("Jane Doe\n"));
        assert!(text.contains("References\n=========="));
        assert!(text.contains("Relationship: Colleague & Manager"));
    }

    #[test]
    fn test_missing_name_creates_no_output() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "resume.json", r#"{"email": "jane@example.com"}"#);
        let out = dir.path().join("resume.tex");
        let out_arg = out.to_string_lossy().into_owned();

        let err = run(&cli(&["-o", &out_arg, &input]), &Config::default()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GenError>(),
            Some(GenError::MissingField(f)) if f == "name"
        ));
        assert!(!out.exists());
    }

    #[test]
    fn test_failed_run_keeps_previous_output() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "resume.json", "not json");
        let out = dir.path().join("resume.tex");
        std::fs::write(&out, "previous build").unwrap();
        let out_arg = out.to_string_lossy().into_owned();

        let err = run(&cli(&["-o", &out_arg, &input]), &Config::default()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GenError>(),
            Some(GenError::InputParse { .. })
        ));
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "previous build");
    }

    #[test]
    fn test_unwritable_destination_is_reported() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "resume.json", r#"{"name": "Jane Doe"}"#);
        let out = dir.path().join("missing").join("resume.tex");
        let out_arg = out.to_string_lossy().into_owned();

        let err = run(&cli(&["-o", &out_arg, &input]), &Config::default()).unwrap_err();

        assert!(format!("{err:#}").contains("resume.tex"));
        assert!(matches!(
            err.downcast_ref::<GenError>(),
            Some(GenError::Write { .. })
        ));
    }
}
