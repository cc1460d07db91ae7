/// One GeForce model: reference boost clock, stock power limit, and a
/// relative performance index used to rank downclock candidates.
///
/// Mid-range and high-end SKUs since Pascal (2016). The list is ordered
/// roughly by performance but the index is authoritative: Ada cards sit
/// interleaved with Ampere on raw throughput despite much higher clocks.
#[derive(Debug, Clone, Copy)]
pub struct GpuModel {
    pub name: &'static str,
    pub boost_mhz: u32,
    pub power_watts: u32,
    pub perf_index: f32,
}

pub const MODELS: &[GpuModel] = &[
    GpuModel { name: "GTX 1050", boost_mhz: 1493, power_watts: 75, perf_index: 1.0 },
    GpuModel { name: "GTX 1050 Ti", boost_mhz: 1620, power_watts: 75, perf_index: 1.1 },
    GpuModel { name: "GTX 1650", boost_mhz: 1860, power_watts: 75, perf_index: 1.3 },
    GpuModel { name: "GTX 1650 Super", boost_mhz: 1950, power_watts: 100, perf_index: 1.35 },
    GpuModel { name: "GTX 1060 3GB", boost_mhz: 1700, power_watts: 120, perf_index: 1.4 },
    GpuModel { name: "GTX 1060 6GB", boost_mhz: 1771, power_watts: 120, perf_index: 1.5 },
    GpuModel { name: "GTX 1660", boost_mhz: 1860, power_watts: 120, perf_index: 1.6 },
    GpuModel { name: "GTX 1660 Super", boost_mhz: 1935, power_watts: 125, perf_index: 1.7 },
    GpuModel { name: "GTX 1660 Ti", boost_mhz: 1900, power_watts: 120, perf_index: 1.8 },
    GpuModel { name: "GTX 1070", boost_mhz: 1886, power_watts: 150, perf_index: 1.9 },
    GpuModel { name: "GTX 1070 Ti", boost_mhz: 1900, power_watts: 180, perf_index: 2.05 },
    GpuModel { name: "GTX 1080", boost_mhz: 2000, power_watts: 180, perf_index: 2.2 },
    GpuModel { name: "GTX 1080 Ti", boost_mhz: 2100, power_watts: 250, perf_index: 2.4 },
    GpuModel { name: "RTX 2060", boost_mhz: 1680, power_watts: 160, perf_index: 2.3 },
    GpuModel { name: "RTX 2060 Super", boost_mhz: 1770, power_watts: 175, perf_index: 2.45 },
    GpuModel { name: "RTX 3050", boost_mhz: 1777, power_watts: 130, perf_index: 2.5 },
    GpuModel { name: "RTX 2070", boost_mhz: 1770, power_watts: 185, perf_index: 2.6 },
    GpuModel { name: "RTX 2070 Super", boost_mhz: 1815, power_watts: 215, perf_index: 2.8 },
    GpuModel { name: "RTX 3060", boost_mhz: 1780, power_watts: 170, perf_index: 2.9 },
    GpuModel { name: "RTX 2080", boost_mhz: 1800, power_watts: 215, perf_index: 3.0 },
    GpuModel { name: "RTX 3060 Ti", boost_mhz: 1800, power_watts: 200, perf_index: 3.1 },
    GpuModel { name: "RTX 2080 Super", boost_mhz: 1815, power_watts: 250, perf_index: 3.2 },
    GpuModel { name: "RTX 3070", boost_mhz: 1815, power_watts: 220, perf_index: 3.3 },
    GpuModel { name: "RTX 2080 Ti", boost_mhz: 1755, power_watts: 260, perf_index: 3.4 },
    GpuModel { name: "RTX 3070 Ti", boost_mhz: 1890, power_watts: 290, perf_index: 3.5 },
    GpuModel { name: "RTX 3080", boost_mhz: 1710, power_watts: 320, perf_index: 3.8 },
    GpuModel { name: "RTX 3080 Ti", boost_mhz: 1710, power_watts: 350, perf_index: 4.0 },
    GpuModel { name: "RTX 3090", boost_mhz: 1700, power_watts: 350, perf_index: 4.2 },
    GpuModel { name: "RTX 3090 Ti", boost_mhz: 1860, power_watts: 450, perf_index: 4.4 },
    GpuModel { name: "RTX 4060", boost_mhz: 2460, power_watts: 160, perf_index: 3.2 },
    GpuModel { name: "RTX 4060 Ti", boost_mhz: 2535, power_watts: 200, perf_index: 3.5 },
    GpuModel { name: "RTX 4070", boost_mhz: 2475, power_watts: 200, perf_index: 3.7 },
    GpuModel { name: "RTX 4070 Ti", boost_mhz: 2610, power_watts: 285, perf_index: 3.9 },
    GpuModel { name: "RTX 4080", boost_mhz: 2505, power_watts: 320, perf_index: 4.3 },
    GpuModel { name: "RTX 4090", boost_mhz: 2520, power_watts: 450, perf_index: 4.8 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_names_unique() {
        for (i, a) in MODELS.iter().enumerate() {
            for b in &MODELS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn perf_index_positive_and_finite() {
        for m in MODELS {
            assert!(m.perf_index.is_finite());
            assert!(m.perf_index > 0.0);
        }
    }
}
