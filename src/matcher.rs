use crate::schema::{CpuProfile, GpuProfile, ProfileDocument};

/// A profile of either kind, borrowed from a document.
#[derive(Debug, Clone, Copy)]
pub enum MatchedProfile<'a> {
    Cpu(&'a CpuProfile),
    Gpu(&'a GpuProfile),
}

impl<'a> MatchedProfile<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            MatchedProfile::Cpu(p) => &p.id,
            MatchedProfile::Gpu(p) => &p.id,
        }
    }

    pub fn label(&self) -> &'a str {
        match self {
            MatchedProfile::Cpu(p) => &p.label,
            MatchedProfile::Gpu(p) => &p.label,
        }
    }

    pub fn target_count(&self) -> usize {
        match self {
            MatchedProfile::Cpu(p) => p.targets.len(),
            MatchedProfile::Gpu(p) => p.targets.len(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MatchHit<'a> {
    pub profile: MatchedProfile<'a>,
    /// The token that matched; the longest one wins.
    pub token: &'a str,
}

/// Resolve a free-text hardware identification string against a document,
/// the same way the consuming application does: case-insensitive substring
/// match, longest token wins, document order breaks ties.
pub fn find_best<'a>(doc: &'a ProfileDocument, query: &str) -> Option<MatchHit<'a>> {
    let query = query.to_lowercase();
    let mut best: Option<MatchHit<'a>> = None;

    let mut consider = |profile: MatchedProfile<'a>, tokens: &'a [String]| {
        for token in tokens {
            if !query.contains(token.as_str()) {
                continue;
            }
            let better = match &best {
                Some(hit) => token.len() > hit.token.len(),
                None => true,
            };
            if better {
                best = Some(MatchHit { profile, token });
            }
        }
    };

    for p in &doc.cpu_profiles {
        consider(MatchedProfile::Cpu(p), &p.match_tokens);
    }
    for p in &doc.gpu_profiles {
        consider(MatchedProfile::Gpu(p), &p.match_tokens);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::build_document;

    #[test]
    fn matches_intel_retail_string() {
        let doc = build_document();
        let hit = find_best(&doc, "Intel(R) Core(TM) i5-10600K CPU @ 4.10GHz").unwrap();
        assert_eq!(hit.profile.id(), "intel-i5-gen10");
        // The i5 tier has no bare "K" SKU variant, so the plain SKU token
        // is the longest hit inside "i5-10600K".
        assert_eq!(hit.token, "i5-10600");
    }

    #[test]
    fn matches_ryzen_retail_string() {
        let doc = build_document();
        let hit = find_best(&doc, "AMD Ryzen 5 5600X 6-Core Processor").unwrap();
        assert_eq!(hit.profile.id(), "amd-ryzen5-5000");
        assert_eq!(hit.token, "ryzen 5 5600x");
    }

    #[test]
    fn longer_gpu_token_beats_prefix() {
        let doc = build_document();
        let hit = find_best(&doc, "NVIDIA GeForce RTX 3080 Ti").unwrap();
        // Must not stop at the plain 3080 profile.
        assert_eq!(hit.profile.id(), "nvidia-rtx-3080-ti");
    }

    #[test]
    fn unknown_hardware_matches_nothing() {
        let doc = build_document();
        assert!(find_best(&doc, "Apple M3 Max").is_none());
    }
}
