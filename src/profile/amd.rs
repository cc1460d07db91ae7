use crate::schema::{CpuProfile, CpuTarget};
use crate::tables::amd::{SEGMENTS, SERIES, Segment, Series};
use crate::tokens::TokenSet;

/// Throttle percent never drops below this.
const PERCENT_FLOOR: u32 = 28;
/// Percent penalty per series step of distance.
const PERCENT_PENALTY: u32 = 7;
/// Targets this many series back (or more) must be confirmed.
const CONFIRM_DELTA: u32 = 3;
/// Targets at or below this percent must be confirmed.
const CONFIRM_PERCENT_FLOOR: u32 = 38;
/// Boost is tamed rather than disabled; 2 is "Aggressive" on the
/// powercfg scale, a middle ground that behaves well on Ryzen.
const BOOST_MODE: u32 = 2;

pub fn build_profiles() -> Vec<CpuProfile> {
    let mut profiles = Vec::new();

    for segment in SEGMENTS {
        for (index, series) in SERIES.iter().enumerate() {
            let targets = build_targets(segment, series, index);
            if targets.is_empty() {
                continue;
            }

            profiles.push(CpuProfile {
                id: profile_id(segment, series),
                label: format!("AMD {} {}", segment.label, series.label),
                match_tokens: match_tokens(segment, series),
                targets,
                nominal_frequency_mhz: series.boost_mhz,
            });
        }
    }

    profiles
}

fn profile_id(segment: &Segment, series: &Series) -> String {
    format!("amd-ryzen{}-{}", segment.tier, series.number)
}

fn sku_number(segment: &Segment, series: &Series) -> u32 {
    series.number + segment.sku_base
}

/// Progressive prefixes of the series number let the matcher catch
/// truncated model strings, then full SKU variants are added.
fn match_tokens(segment: &Segment, series: &Series) -> Vec<String> {
    let tier = segment.tier;
    let series_text = series.number.to_string();

    let mut tokens = TokenSet::new();
    for len in 1..=series_text.len() {
        let prefix = &series_text[..len];
        tokens.push(format!("ryzen {tier} {prefix}"));
        tokens.push(format!("ryzen {tier}-{prefix}"));
    }
    tokens.push(format!("ryzen {tier} {}", series.number));

    let sku = sku_number(segment, series);
    for variant in segment.sku_variants {
        let sku_text = format!("{sku}{variant}");
        tokens.push(format!("ryzen {tier} {sku_text}"));
        tokens.push(format!("ryzen {tier}-{sku_text}"));
        tokens.push(sku_text);
    }

    tokens.into_vec()
}

fn build_targets(segment: &Segment, series: &Series, index: usize) -> Vec<CpuTarget> {
    let profile_id = profile_id(segment, series);
    let mut targets = Vec::new();

    // Nearest series first, walking back to Zen 1.
    for older_index in (0..index).rev() {
        let older = &SERIES[older_index];
        let delta = (index - older_index) as u32;
        let percent = PERCENT_FLOOR.max(segment.base_percent.saturating_sub(delta * PERCENT_PENALTY));

        targets.push(CpuTarget {
            id: format!("{profile_id}-to-{}", older.number),
            label: format!("Mimic {} {}", segment.label, sku_number(segment, older)),
            max_frequency_mhz: older.boost_mhz,
            max_cores: 0,
            max_threads: 0,
            max_percent: percent,
            extra_commands: vec![format!(
                "powercfg /setacvalueindex SCHEME_CURRENT SUB_PROCESSOR PERFBOOSTMODE {BOOST_MODE}"
            )],
            requires_confirmation: delta >= CONFIRM_DELTA || percent <= CONFIRM_PERCENT_FLOOR,
        });
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str) -> CpuProfile {
        build_profiles()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap_or_else(|| panic!("missing profile {id}"))
    }

    #[test]
    fn first_series_dropped() {
        assert!(build_profiles().iter().all(|p| !p.id.ends_with("-1000")));
    }

    #[test]
    fn segment_count() {
        // 4 tiers x 6 series with at least one older peer
        assert_eq!(build_profiles().len(), 24);
    }

    #[test]
    fn ryzen5_5000_tokens() {
        let p = profile("amd-ryzen5-5000");
        assert_eq!(p.match_tokens[0], "ryzen 5 5");
        assert!(p.match_tokens.contains(&"ryzen 5 5000".to_string()));
        assert!(p.match_tokens.contains(&"ryzen 5 5600x".to_string()));
        assert!(p.match_tokens.contains(&"5600".to_string()));
    }

    #[test]
    fn targets_nearest_series_first() {
        let p = profile("amd-ryzen7-7000");
        assert_eq!(p.targets[0].id, "amd-ryzen7-7000-to-5000");
        assert_eq!(p.targets.last().unwrap().id, "amd-ryzen7-7000-to-1000");
    }

    #[test]
    fn percent_formula_and_fixed_boost_mode() {
        let p = profile("amd-ryzen5-3000");
        // 3000 is index 2; mimicking 2000 is delta 1: 65 - 7 = 58
        let t = p.targets.iter().find(|t| t.id.ends_with("-to-2000")).unwrap();
        assert_eq!(t.max_percent, 58);
        assert_eq!(t.max_frequency_mhz, 4000);
        assert!(t.extra_commands[0].ends_with("PERFBOOSTMODE 2"));
        assert!(!t.requires_confirmation);
    }

    #[test]
    fn confirmation_thresholds() {
        let p = profile("amd-ryzen9-8000");
        // 8000 is index 6; mimicking 4000 (index 3) is delta 3
        let t = p.targets.iter().find(|t| t.id.ends_with("-to-4000")).unwrap();
        assert_eq!(t.max_percent, 82 - 21);
        assert!(t.requires_confirmation);

        // Ryzen 3 bottoms out quickly: 55 - 14 = 41 > 38 at delta 2,
        // 55 - 21 = 34 <= 38 at delta 3
        let p = profile("amd-ryzen3-5000");
        let near = p.targets.iter().find(|t| t.id.ends_with("-to-3000")).unwrap();
        assert!(!near.requires_confirmation);
        let far = p.targets.iter().find(|t| t.id.ends_with("-to-2000")).unwrap();
        assert!(far.requires_confirmation);
    }

    #[test]
    fn percent_floor_applies() {
        let p = profile("amd-ryzen3-8000");
        let t = p.targets.iter().find(|t| t.id.ends_with("-to-1000")).unwrap();
        // 55 - 6*7 would be 13; clamped
        assert_eq!(t.max_percent, PERCENT_FLOOR);
        assert!(t.requires_confirmation);
    }
}
