use crate::schema::{GpuProfile, GpuTarget};
use crate::tables::nvidia::{GpuModel, MODELS};
use crate::tokens::TokenSet;

/// At most this many downclock targets per GPU, best-ranked first.
const MAX_TARGETS: usize = 8;
/// Performance-index gaps this wide must be confirmed.
const CONFIRM_PERF_GAP: f32 = 1.5;
/// Power limits at or below this must be confirmed regardless of gap.
const CONFIRM_POWER_FLOOR: u32 = 130;

pub fn build_profiles() -> Vec<GpuProfile> {
    let mut profiles = Vec::new();

    for model in MODELS {
        let targets = build_targets(model);
        // Entry-level cards have no strict downgrade available.
        if targets.is_empty() {
            continue;
        }

        profiles.push(GpuProfile {
            id: profile_id(model),
            label: format!("NVIDIA GeForce {}", model.name),
            match_tokens: match_tokens(model),
            targets,
            nominal_frequency_mhz: model.boost_mhz,
            nominal_power_watts: model.power_watts,
        });
    }

    profiles
}

fn profile_id(model: &GpuModel) -> String {
    format!("nvidia-{}", model.name.to_lowercase().replace(' ', "-"))
}

fn match_tokens(model: &GpuModel) -> Vec<String> {
    let base = model.name.to_lowercase();
    let mut tokens = TokenSet::new();

    tokens.push(base.clone());
    tokens.push(base.replace(' ', ""));
    tokens.push(base.replace(' ', "-"));
    tokens.push(format!("geforce {base}"));

    let parts: Vec<&str> = base.split(' ').collect();
    if !parts.is_empty() {
        tokens.push(parts[parts.len().saturating_sub(2)..].join(" "));
        if parts[0] == "rtx" || parts[0] == "gtx" {
            tokens.push(parts[..parts.len().min(2)].join(" "));
        }
    }
    // Spacing variants for the suffix words as they appear in driver strings.
    if base.contains("ti") {
        tokens.push(base.replace("ti", " ti"));
    }
    if base.contains("super") {
        tokens.push(base.replace("super", " super"));
    }

    tokens.into_vec()
}

/// A candidate must be a strict downgrade on all three axes. Ranking by
/// performance index alone would let a high-clocked Ada card slip in as
/// a "downclock" for a low-clocked Ampere flagship.
fn is_downgrade(from: &GpuModel, to: &GpuModel) -> bool {
    to.perf_index < from.perf_index
        && to.boost_mhz < from.boost_mhz
        && to.power_watts < from.power_watts
}

fn build_targets(model: &GpuModel) -> Vec<GpuTarget> {
    let profile_id = profile_id(model);

    let mut candidates: Vec<&GpuModel> =
        MODELS.iter().filter(|m| is_downgrade(model, m)).collect();
    // Stable sort keeps table order for equal indices.
    candidates.sort_by(|a, b| b.perf_index.total_cmp(&a.perf_index));
    candidates.truncate(MAX_TARGETS);

    candidates
        .into_iter()
        .map(|target| GpuTarget {
            id: format!(
                "{profile_id}-to-{}",
                target.name.to_lowercase().replace(' ', "-")
            ),
            label: format!("Mimic NVIDIA GeForce {}", target.name),
            max_frequency_mhz: target.boost_mhz,
            power_limit_watts: target.power_watts,
            nvidia_smi_args: vec![
                "-lgc".to_string(),
                format!("{0},{0}", target.boost_mhz),
                "-pl".to_string(),
                target.power_watts.to_string(),
            ],
            requires_confirmation: model.perf_index - target.perf_index >= CONFIRM_PERF_GAP
                || target.power_watts <= CONFIRM_POWER_FLOOR,
        })
        .collect()
}
