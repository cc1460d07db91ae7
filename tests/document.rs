use profilegen::matcher;
use profilegen::profile::build_document;
use profilegen::validate;
use profilegen::writer;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn full_document_counts() {
    let doc = build_document();
    // Intel: 4 segments x 8 generations; AMD: 4 tiers x 6 series
    assert_eq!(doc.cpu_count(), 56);
    // 35 models minus the three 75 W cards with no strict downgrade
    assert_eq!(doc.gpu_count(), 32);
}

#[test]
fn every_profile_has_targets_and_strict_downgrades() {
    let doc = build_document();

    for p in &doc.cpu_profiles {
        assert!(!p.targets.is_empty(), "{}", p.id);
        for t in &p.targets {
            assert!(t.max_frequency_mhz < p.nominal_frequency_mhz, "{}", t.id);
            assert_eq!(t.max_cores, 0);
            assert_eq!(t.max_threads, 0);
        }
    }
    for p in &doc.gpu_profiles {
        assert!(!p.targets.is_empty(), "{}", p.id);
        for t in &p.targets {
            assert!(t.max_frequency_mhz < p.nominal_frequency_mhz, "{}", t.id);
            assert!(t.power_limit_watts < p.nominal_power_watts, "{}", t.id);
        }
    }
}

#[test]
fn profile_ids_unique_per_kind() {
    let doc = build_document();

    let cpu_ids: HashSet<&str> = doc.cpu_profiles.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(cpu_ids.len(), doc.cpu_count());

    let gpu_ids: HashSet<&str> = doc.gpu_profiles.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(gpu_ids.len(), doc.gpu_count());
}

#[test]
fn match_tokens_deduplicated_and_lowercase() {
    let doc = build_document();

    let all_token_lists = doc
        .cpu_profiles
        .iter()
        .map(|p| (&p.id, &p.match_tokens))
        .chain(doc.gpu_profiles.iter().map(|p| (&p.id, &p.match_tokens)));

    for (id, tokens) in all_token_lists {
        assert!(!tokens.is_empty(), "{id}");
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        assert_eq!(unique.len(), tokens.len(), "{id}");
        for token in tokens {
            assert_eq!(*token, token.to_lowercase(), "{id}");
        }
    }
}

#[test]
fn intel_i5_gen10_mimics_older_i5() {
    let doc = build_document();
    let p = doc
        .cpu_profiles
        .iter()
        .find(|p| p.id == "intel-i5-gen10")
        .unwrap();

    let t = p
        .targets
        .iter()
        .find(|t| t.id == "intel-i5-gen10-to-gen8")
        .unwrap();
    // The target clock is the 8th gen's own nominal clock.
    assert_eq!(t.max_frequency_mhz, 4300);
    assert!(t
        .extra_commands
        .iter()
        .any(|c| c.contains("powercfg /setacvalueindex")));
}

#[test]
fn rtx_3080_targets_rank_strictly_below() {
    let doc = build_document();
    let own_index = doc
        .gpu_profiles
        .iter()
        .position(|p| p.id == "nvidia-rtx-3080")
        .unwrap();
    let p = &doc.gpu_profiles[own_index];

    for t in &p.targets {
        assert!(t.max_frequency_mhz < p.nominal_frequency_mhz);
        assert_eq!(t.nvidia_smi_args[0], "-lgc");
        assert_eq!(
            t.nvidia_smi_args[1],
            format!("{0},{0}", t.max_frequency_mhz)
        );
    }
}

#[test]
fn generated_document_validates_clean() {
    let findings = validate::check_document(&build_document());
    assert!(findings.is_empty(), "{findings:?}");
}

#[test]
fn write_load_validate_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("resources/profiles.json");

    writer::write_document(&build_document(), &path).unwrap();
    let loaded = writer::load_document(&path).unwrap();
    assert!(validate::check_document(&loaded).is_empty());

    // Top-level shape as the consumer expects it
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(raw.get("cpuProfiles").unwrap().is_array());
    assert!(raw.get("gpuProfiles").unwrap().is_array());
}

#[test]
fn regenerating_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profiles.json");

    writer::write_document(&build_document(), &path).unwrap();
    let first = fs::read(&path).unwrap();

    writer::write_document(&build_document(), &path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn matcher_resolves_consumer_strings() {
    let doc = build_document();

    let cases = [
        ("Intel(R) Core(TM) i7-9700K CPU @ 3.60GHz", "intel-i7-gen9"),
        ("AMD Ryzen 7 7700X 8-Core Processor", "amd-ryzen7-7000"),
        ("NVIDIA GeForce GTX 1660 Super", "nvidia-gtx-1660-super"),
        ("NVIDIA GeForce RTX 3080", "nvidia-rtx-3080"),
    ];
    for (query, expected) in cases {
        let hit = matcher::find_best(&doc, query).unwrap();
        assert_eq!(hit.profile.id(), expected, "{query}");
    }
}
