/// One Ryzen desktop series (1000-series through 8000-series), ordered
/// oldest to newest. AMD skipped the 6000 number on desktop.
#[derive(Debug, Clone, Copy)]
pub struct Series {
    pub number: u32,
    pub label: &'static str,
    pub boost_mhz: u32,
}

/// A Ryzen brand tier (Ryzen 3/5/7/9).
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub tier: u32,
    pub label: &'static str,
    /// Starting throttle percent before the per-series penalty.
    pub base_percent: u32,
    /// Added to the series number to form an approximate SKU number.
    pub sku_base: u32,
    /// Suffix letters commonly seen on retail SKUs in this tier.
    pub sku_variants: &'static [&'static str],
}

pub const SERIES: &[Series] = &[
    Series { number: 1000, label: "1st Gen (Zen)", boost_mhz: 3800 },
    Series { number: 2000, label: "2nd Gen (Zen+)", boost_mhz: 4000 },
    Series { number: 3000, label: "3rd Gen (Zen 2)", boost_mhz: 4300 },
    Series { number: 4000, label: "4th Gen (Zen 2 Mobile)", boost_mhz: 4400 },
    Series { number: 5000, label: "5th Gen (Zen 3)", boost_mhz: 4700 },
    Series { number: 7000, label: "7th Gen (Zen 4)", boost_mhz: 5200 },
    Series { number: 8000, label: "8th Gen (Zen 4 Refresh)", boost_mhz: 5300 },
];

pub const SEGMENTS: &[Segment] = &[
    Segment {
        tier: 3,
        label: "Ryzen 3",
        base_percent: 55,
        sku_base: 200,
        sku_variants: &[""],
    },
    Segment {
        tier: 5,
        label: "Ryzen 5",
        base_percent: 65,
        sku_base: 600,
        sku_variants: &["", "X"],
    },
    Segment {
        tier: 7,
        label: "Ryzen 7",
        base_percent: 75,
        sku_base: 700,
        sku_variants: &["", "X", "XT"],
    },
    Segment {
        tier: 9,
        label: "Ryzen 9",
        base_percent: 82,
        sku_base: 900,
        sku_variants: &["", "X", "XT"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_ordered_oldest_to_newest() {
        for pair in SERIES.windows(2) {
            assert!(pair[0].number < pair[1].number);
            assert!(pair[0].boost_mhz < pair[1].boost_mhz);
        }
    }
}
