use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use profilegen::cli::{Cli, Command};
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = profilegen::config::load(cli.config.as_ref());

    match cli.command {
        Command::Generate { output } => {
            let path = output.unwrap_or(config.output.path);
            cmd_generate(&path, cli.json)?;
        }
        Command::Validate { path } => {
            let path = path.unwrap_or(config.output.path);
            cmd_validate(&path, cli.json)?;
        }
        Command::Match { name } => cmd_match(&name.join(" "), cli.json)?,
        Command::Completions { shell } => profilegen::cli::print_completions(shell),
    }

    Ok(())
}

fn cmd_generate(path: &PathBuf, json: bool) -> Result<()> {
    let doc = profilegen::profile::build_document();

    // Generation is pure; a document that trips its own invariants is a
    // table bug, so refuse to write it.
    let findings = profilegen::validate::check_document(&doc);
    if profilegen::validate::has_failures(&findings) {
        profilegen::output::print_findings(&findings, json);
        anyhow::bail!("generated document violates schema invariants");
    }

    profilegen::writer::write_document(&doc, path)?;
    profilegen::output::print_generate_summary(doc.cpu_count(), doc.gpu_count(), path, json);

    Ok(())
}

fn cmd_validate(path: &PathBuf, json: bool) -> Result<()> {
    let doc = profilegen::writer::load_document(path)?;
    let findings = profilegen::validate::check_document(&doc);

    profilegen::output::print_findings(&findings, json);

    if profilegen::validate::has_failures(&findings) {
        anyhow::bail!(
            "{} invariant violation(s) in {}",
            findings
                .iter()
                .filter(|f| f.severity == profilegen::validate::Severity::High)
                .count(),
            path.display()
        );
    }

    Ok(())
}

fn cmd_match(query: &str, json: bool) -> Result<()> {
    let doc = profilegen::profile::build_document();

    match profilegen::matcher::find_best(&doc, query) {
        Some(hit) => profilegen::output::print_match(&hit, query, json),
        None => {
            println!(
                "  {} No profile matched {:?}.",
                "Note:".yellow(),
                query
            );
            std::process::exit(1);
        }
    }

    Ok(())
}
