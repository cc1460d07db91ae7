use serde::{Deserialize, Serialize};

/// The complete generated document, exactly as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub cpu_profiles: Vec<CpuProfile>,
    pub gpu_profiles: Vec<GpuProfile>,
}

/// One CPU model the consumer can recognize and impersonate downwards from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuProfile {
    pub id: String,
    pub label: String,
    /// Lowercase variants a detected CPU model string is matched against.
    pub match_tokens: Vec<String>,
    /// Older models in the same vendor+segment lineage.
    pub targets: Vec<CpuTarget>,
    #[serde(rename = "nominalFrequencyMHz")]
    pub nominal_frequency_mhz: u32,
}

/// Settings to approximate one older CPU model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuTarget {
    pub id: String,
    pub label: String,
    #[serde(rename = "maxFrequencyMHz")]
    pub max_frequency_mhz: u32,
    /// Zero means no core limit.
    pub max_cores: u32,
    /// Zero means no thread limit.
    pub max_threads: u32,
    pub max_percent: u32,
    /// OS power-configuration commands the consumer runs when applying.
    pub extra_commands: Vec<String>,
    /// Large throttling deltas must be confirmed by the user.
    pub requires_confirmation: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuProfile {
    pub id: String,
    pub label: String,
    pub match_tokens: Vec<String>,
    pub targets: Vec<GpuTarget>,
    #[serde(rename = "nominalFrequencyMHz")]
    pub nominal_frequency_mhz: u32,
    pub nominal_power_watts: u32,
}

/// Settings to approximate one weaker GPU model via nvidia-smi.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuTarget {
    pub id: String,
    pub label: String,
    #[serde(rename = "maxFrequencyMHz")]
    pub max_frequency_mhz: u32,
    pub power_limit_watts: u32,
    /// Clock-lock and power-limit arguments: `-lgc <f>,<f> -pl <w>`.
    pub nvidia_smi_args: Vec<String>,
    pub requires_confirmation: bool,
}

impl ProfileDocument {
    pub fn cpu_count(&self) -> usize {
        self.cpu_profiles.len()
    }

    pub fn gpu_count(&self) -> usize {
        self.gpu_profiles.len()
    }
}
