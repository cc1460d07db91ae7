use crate::matcher::{MatchHit, MatchedProfile};
use crate::validate::{Finding, Severity};
use colored::Colorize;
use std::path::Path;

pub fn print_generate_summary(cpu_count: usize, gpu_count: usize, path: &Path, json: bool) {
    if json {
        let output = serde_json::json!({
            "cpuProfiles": cpu_count,
            "gpuProfiles": gpu_count,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return;
    }

    println!(
        "Wrote {} CPU profiles and {} GPU profiles to {}",
        cpu_count.to_string().bold(),
        gpu_count.to_string().bold(),
        path.display().to_string().cyan()
    );
}

pub fn print_findings(findings: &[Finding], json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(findings).unwrap());
        return;
    }

    if findings.is_empty() {
        println!("{}", "No issues found. Document honors all invariants.".green());
        return;
    }

    let mut sorted: Vec<&Finding> = findings.iter().collect();
    sorted.sort_by_key(|f| std::cmp::Reverse(f.severity));

    let title = format!("Findings ({})", findings.len());
    let divider_w: usize = 64;
    let fill = divider_w.saturating_sub(2 + title.len());
    println!("── {} {}", title.bold(), "─".repeat(fill));

    for finding in sorted {
        let sev = match finding.severity {
            Severity::High => "HIGH".red().bold(),
            Severity::Medium => " MED".yellow().bold(),
            Severity::Info => "INFO".dimmed().bold(),
        };
        println!("  {} [{}] {}", sev, finding.category, finding.description);
        if let Some(ref subject) = finding.subject {
            println!("       {}", subject.dimmed());
        }
    }

    println!("{}", "─".repeat(divider_w));
}

pub fn print_match(hit: &MatchHit<'_>, query: &str, json: bool) {
    if json {
        let output = serde_json::json!({
            "query": query,
            "profile": hit.profile.id(),
            "label": hit.profile.label(),
            "matchedToken": hit.token,
            "targets": hit.profile.target_count(),
        });
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return;
    }

    println!(
        "  {} {}",
        "Matched profile:".bold(),
        hit.profile.label().green()
    );
    println!(
        "  {} {} (via token {:?})",
        "Id:".bold(),
        hit.profile.id(),
        hit.token
    );

    match hit.profile {
        MatchedProfile::Cpu(p) => {
            println!(
                "  {} {} MHz nominal",
                "Clock:".bold(),
                p.nominal_frequency_mhz
            );
            println!("  {}", "Targets:".bold());
            for t in &p.targets {
                let confirm = if t.requires_confirmation {
                    " (confirm)".yellow().to_string()
                } else {
                    String::new()
                };
                println!(
                    "    {} — {} MHz, {}%{}",
                    t.label, t.max_frequency_mhz, t.max_percent, confirm
                );
            }
        }
        MatchedProfile::Gpu(p) => {
            println!(
                "  {} {} MHz / {} W nominal",
                "Limits:".bold(),
                p.nominal_frequency_mhz,
                p.nominal_power_watts
            );
            println!("  {}", "Targets:".bold());
            for t in &p.targets {
                let confirm = if t.requires_confirmation {
                    " (confirm)".yellow().to_string()
                } else {
                    String::new()
                };
                println!(
                    "    {} — {} MHz, {} W{}",
                    t.label, t.max_frequency_mhz, t.power_limit_watts, confirm
                );
            }
        }
    }
}
