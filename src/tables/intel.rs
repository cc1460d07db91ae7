/// One Intel Core desktop generation, ordered oldest to newest.
#[derive(Debug, Clone, Copy)]
pub struct Generation {
    pub number: u32,
    pub label: &'static str,
    /// Typical top boost clock for the flagship desktop SKU of this generation.
    pub boost_mhz: u32,
}

/// A Core brand tier (i3/i5/i7/i9) with its throttling baseline and the
/// data needed to synthesize approximate SKU numbers for match tokens.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub code: &'static str,
    pub label: &'static str,
    /// Starting throttle percent before the per-generation penalty.
    pub base_percent: u32,
    /// Added to `generation * 1000` to form an approximate SKU number.
    pub sku_suffix: u32,
    /// Suffix letters commonly seen on retail SKUs in this tier.
    pub sku_variants: &'static [&'static str],
}

pub const GENERATIONS: &[Generation] = &[
    Generation { number: 6, label: "6th Gen (Skylake)", boost_mhz: 4000 },
    Generation { number: 7, label: "7th Gen (Kaby Lake)", boost_mhz: 4100 },
    Generation { number: 8, label: "8th Gen (Coffee Lake)", boost_mhz: 4300 },
    Generation { number: 9, label: "9th Gen (Coffee Lake Refresh)", boost_mhz: 4500 },
    Generation { number: 10, label: "10th Gen (Comet Lake)", boost_mhz: 4700 },
    Generation { number: 11, label: "11th Gen (Rocket Lake)", boost_mhz: 4900 },
    Generation { number: 12, label: "12th Gen (Alder Lake)", boost_mhz: 5100 },
    Generation { number: 13, label: "13th Gen (Raptor Lake)", boost_mhz: 5300 },
    Generation { number: 14, label: "14th Gen (Raptor Lake Refresh)", boost_mhz: 5400 },
];

pub const SEGMENTS: &[Segment] = &[
    Segment {
        code: "i3",
        label: "Core i3",
        base_percent: 60,
        sku_suffix: 100,
        sku_variants: &["", "T", "F"],
    },
    Segment {
        code: "i5",
        label: "Core i5",
        base_percent: 70,
        sku_suffix: 600,
        sku_variants: &["", "F", "KF"],
    },
    Segment {
        code: "i7",
        label: "Core i7",
        base_percent: 80,
        sku_suffix: 700,
        sku_variants: &["", "K", "KF"],
    },
    Segment {
        code: "i9",
        label: "Core i9",
        base_percent: 85,
        sku_suffix: 900,
        sku_variants: &["", "K", "KF"],
    },
];
