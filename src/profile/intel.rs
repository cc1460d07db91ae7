use crate::schema::{CpuProfile, CpuTarget};
use crate::tables::intel::{GENERATIONS, Generation, SEGMENTS, Segment};
use crate::tokens::TokenSet;

/// Throttle percent never drops below this, however old the target.
const PERCENT_FLOOR: u32 = 25;
/// Percent penalty per generation of distance.
const PERCENT_PENALTY: u32 = 6;
/// Targets this many generations back (or more) must be confirmed.
const CONFIRM_DELTA: u32 = 4;
/// Targets at or below this percent must be confirmed.
const CONFIRM_PERCENT_FLOOR: u32 = 35;
/// PERFBOOSTMODE caps at 4 (Aggressive At Guaranteed).
const BOOST_MODE_MAX: u32 = 4;

pub fn build_profiles() -> Vec<CpuProfile> {
    let mut profiles = Vec::new();

    for segment in SEGMENTS {
        for generation in GENERATIONS {
            let targets = build_targets(segment, generation);
            // The oldest generation has nothing older to mimic.
            if targets.is_empty() {
                continue;
            }

            profiles.push(CpuProfile {
                id: profile_id(segment, generation),
                label: format!("Intel {} {}", segment.label, generation.label),
                match_tokens: match_tokens(segment, generation),
                targets,
                nominal_frequency_mhz: generation.boost_mhz,
            });
        }
    }

    profiles
}

fn profile_id(segment: &Segment, generation: &Generation) -> String {
    format!("intel-{}-gen{}", segment.code, generation.number)
}

fn sku_number(segment: &Segment, generation: &Generation) -> u32 {
    generation.number * 1000 + segment.sku_suffix
}

/// Canonical spellings first, then approximate SKU variants in plain,
/// hyphenated, and space-separated forms.
fn match_tokens(segment: &Segment, generation: &Generation) -> Vec<String> {
    let seg = segment.code;
    let number = generation.number;

    let mut tokens = TokenSet::new();
    tokens.push(format!("{seg}-{number}"));
    tokens.push(format!("core {seg} {number}"));
    tokens.push(format!("core {seg} {number}th"));
    tokens.push(format!("{seg} {number}th"));

    let sku = sku_number(segment, generation);
    for variant in segment.sku_variants {
        let sku_text = format!("{sku}{variant}");
        tokens.push(format!("{seg}{sku_text}"));
        tokens.push(format!("{seg}-{sku_text}"));
        tokens.push(format!("{seg} {sku_text}"));
        tokens.push(sku_text);
    }

    tokens.into_vec()
}

fn build_targets(segment: &Segment, generation: &Generation) -> Vec<CpuTarget> {
    let profile_id = profile_id(segment, generation);
    let mut targets = Vec::new();

    for older in GENERATIONS {
        if older.number >= generation.number {
            continue;
        }
        let delta = generation.number - older.number;
        let percent = PERCENT_FLOOR.max(segment.base_percent.saturating_sub(delta * PERCENT_PENALTY));
        let display_model = format!(
            "{}-{}",
            segment.code.to_uppercase(),
            sku_number(segment, older)
        );

        targets.push(CpuTarget {
            id: format!("{profile_id}-to-gen{}", older.number),
            label: format!("Mimic Intel {} {}", segment.label, display_model),
            max_frequency_mhz: older.boost_mhz,
            max_cores: 0,
            max_threads: 0,
            max_percent: percent,
            extra_commands: vec![format!(
                "powercfg /setacvalueindex SCHEME_CURRENT SUB_PROCESSOR PERFBOOSTMODE {}",
                delta.min(BOOST_MODE_MAX)
            )],
            requires_confirmation: delta >= CONFIRM_DELTA || percent <= CONFIRM_PERCENT_FLOOR,
        });
    }

    targets
}
