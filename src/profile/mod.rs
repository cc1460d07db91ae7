pub mod amd;
pub mod intel;
pub mod nvidia;

use crate::schema::ProfileDocument;

/// Build the complete profile document from the static reference tables.
///
/// Pure and deterministic: two calls always produce identical output.
/// Assembly order is Intel then AMD for `cpuProfiles`, GPU table order
/// for `gpuProfiles`.
pub fn build_document() -> ProfileDocument {
    let mut cpu_profiles = intel::build_profiles();
    cpu_profiles.extend(amd::build_profiles());

    ProfileDocument {
        cpu_profiles,
        gpu_profiles: nvidia::build_profiles(),
    }
}
