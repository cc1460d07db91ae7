use crate::schema::{CpuProfile, GpuProfile, ProfileDocument};
use serde::Serialize;
use std::collections::HashSet;

/// Intel targets at or below this percent must carry the confirmation flag.
const INTEL_CONFIRM_PERCENT: u32 = 35;
/// AMD equivalent.
const AMD_CONFIRM_PERCENT: u32 = 38;
/// GPU targets at or below this power limit must carry the flag.
const GPU_CONFIRM_POWER: u32 = 130;

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Info,
    Medium,
    High,
}

/// A single validation finding against a profile document.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub category: String,
    pub description: String,
    /// The profile (or target) id this finding relates to.
    pub subject: Option<String>,
}

impl Finding {
    pub fn new(
        severity: Severity,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category: category.into(),
            description: description.into(),
            subject: None,
        }
    }

    pub fn subject(mut self, value: impl Into<String>) -> Self {
        self.subject = Some(value.into());
        self
    }
}

/// Run every invariant check over a document. An empty result means the
/// document honors the full schema contract.
pub fn check_document(doc: &ProfileDocument) -> Vec<Finding> {
    let mut findings = Vec::new();

    check_unique_ids(
        doc.cpu_profiles.iter().map(|p| p.id.as_str()),
        "cpu",
        &mut findings,
    );
    check_unique_ids(
        doc.gpu_profiles.iter().map(|p| p.id.as_str()),
        "gpu",
        &mut findings,
    );

    for profile in &doc.cpu_profiles {
        check_cpu_profile(profile, &mut findings);
    }
    for profile in &doc.gpu_profiles {
        check_gpu_profile(profile, &mut findings);
    }

    findings
}

/// True when any finding is severe enough to fail a validation run.
pub fn has_failures(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::High)
}

fn check_unique_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    category: &str,
    findings: &mut Vec<Finding>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            findings.push(
                Finding::new(Severity::High, category, "duplicate profile id").subject(id),
            );
        }
    }
}

fn check_tokens(id: &str, category: &str, tokens: &[String], findings: &mut Vec<Finding>) {
    if tokens.is_empty() {
        findings.push(
            Finding::new(Severity::High, category, "profile has no match tokens").subject(id),
        );
    }
    let mut seen = HashSet::new();
    for token in tokens {
        if token.is_empty() {
            findings.push(
                Finding::new(Severity::High, category, "empty match token").subject(id),
            );
        }
        if *token != token.to_lowercase() {
            findings.push(
                Finding::new(Severity::Medium, category, format!("token not lowercase: {token:?}"))
                    .subject(id),
            );
        }
        if !seen.insert(token.as_str()) {
            findings.push(
                Finding::new(Severity::High, category, format!("duplicate match token: {token:?}"))
                    .subject(id),
            );
        }
    }
}

fn check_cpu_profile(profile: &CpuProfile, findings: &mut Vec<Finding>) {
    check_tokens(&profile.id, "cpu", &profile.match_tokens, findings);

    if profile.targets.is_empty() {
        findings.push(
            Finding::new(Severity::High, "cpu", "profile emitted with no targets")
                .subject(profile.id.as_str()),
        );
    }

    let confirm_percent = if profile.id.starts_with("amd-") {
        AMD_CONFIRM_PERCENT
    } else {
        INTEL_CONFIRM_PERCENT
    };

    let mut seen = HashSet::new();
    for target in &profile.targets {
        if !seen.insert(target.id.as_str()) {
            findings.push(
                Finding::new(Severity::High, "cpu", "duplicate target id").subject(target.id.as_str()),
            );
        }
        if target.max_frequency_mhz >= profile.nominal_frequency_mhz {
            findings.push(
                Finding::new(
                    Severity::High,
                    "cpu",
                    format!(
                        "target frequency {} MHz is not below nominal {} MHz",
                        target.max_frequency_mhz, profile.nominal_frequency_mhz
                    ),
                )
                .subject(target.id.as_str()),
            );
        }
        if target.max_percent <= confirm_percent && !target.requires_confirmation {
            findings.push(
                Finding::new(
                    Severity::High,
                    "cpu",
                    format!(
                        "percent {} at or below floor {} without confirmation flag",
                        target.max_percent, confirm_percent
                    ),
                )
                .subject(target.id.as_str()),
            );
        }
        if target.extra_commands.is_empty() {
            findings.push(
                Finding::new(Severity::Medium, "cpu", "target has no apply commands")
                    .subject(target.id.as_str()),
            );
        }
    }
}

fn check_gpu_profile(profile: &GpuProfile, findings: &mut Vec<Finding>) {
    check_tokens(&profile.id, "gpu", &profile.match_tokens, findings);

    if profile.targets.is_empty() {
        findings.push(
            Finding::new(Severity::High, "gpu", "profile emitted with no targets")
                .subject(profile.id.as_str()),
        );
    }

    let mut seen = HashSet::new();
    for target in &profile.targets {
        if !seen.insert(target.id.as_str()) {
            findings.push(
                Finding::new(Severity::High, "gpu", "duplicate target id").subject(target.id.as_str()),
            );
        }
        if target.max_frequency_mhz >= profile.nominal_frequency_mhz {
            findings.push(
                Finding::new(
                    Severity::High,
                    "gpu",
                    format!(
                        "target clock {} MHz is not below nominal {} MHz",
                        target.max_frequency_mhz, profile.nominal_frequency_mhz
                    ),
                )
                .subject(target.id.as_str()),
            );
        }
        if target.power_limit_watts >= profile.nominal_power_watts {
            findings.push(
                Finding::new(
                    Severity::High,
                    "gpu",
                    format!(
                        "target power {} W is not below nominal {} W",
                        target.power_limit_watts, profile.nominal_power_watts
                    ),
                )
                .subject(target.id.as_str()),
            );
        }
        if target.power_limit_watts <= GPU_CONFIRM_POWER && !target.requires_confirmation {
            findings.push(
                Finding::new(
                    Severity::High,
                    "gpu",
                    format!(
                        "power {} W at or below floor {} W without confirmation flag",
                        target.power_limit_watts, GPU_CONFIRM_POWER
                    ),
                )
                .subject(target.id.as_str()),
            );
        }
        if target.nvidia_smi_args.first().map(String::as_str) != Some("-lgc") {
            findings.push(
                Finding::new(Severity::High, "gpu", "nvidia-smi args must begin with -lgc")
                    .subject(target.id.as_str()),
            );
        } else {
            let expected = format!("{0},{0}", target.max_frequency_mhz);
            if target.nvidia_smi_args.get(1) != Some(&expected) {
                findings.push(
                    Finding::new(
                        Severity::High,
                        "gpu",
                        format!("clock-lock argument does not match target clock (want {expected})"),
                    )
                    .subject(target.id.as_str()),
                );
            }
        }
    }
}
