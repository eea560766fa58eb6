// Copyright 2026 the HeatGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bucketed sequential palettes.
//!
//! Each named palette carries one color ramp per supported bucket count
//! (ColorBrewer sequential schemes, counts 3 through 9). Settings select a
//! palette by name; lookups that miss fall back to the default palette so a
//! stale palette name never aborts an update.

use peniko::Color;

use crate::settings::{BUCKET_COUNT_MIN, PALETTE_BUCKET_SCAN_LIMIT};

/// The palette used when settings name none, or name one we don't carry.
pub const DEFAULT_PALETTE_NAME: &str = "Reds";

const RAMP_MIN: usize = 3;
const RAMP_MAX: usize = 9;
const RAMP_COUNT: usize = RAMP_MAX - RAMP_MIN + 1;

/// One named palette: color ramps keyed by bucket count.
#[derive(Debug)]
pub struct Palette {
    /// Palette name as referenced by settings.
    pub name: &'static str,
    ramps: [&'static [Color]; RAMP_COUNT],
}

impl Palette {
    /// Returns the ramp for `buckets`, if this palette carries one.
    pub fn colors(&self, buckets: usize) -> Option<&'static [Color]> {
        if (RAMP_MIN..=RAMP_MAX).contains(&buckets) {
            Some(self.ramps[buckets - RAMP_MIN])
        } else {
            None
        }
    }

    /// Returns the smallest and largest bucket counts this palette carries,
    /// scanned over `[BUCKET_COUNT_MIN, PALETTE_BUCKET_SCAN_LIMIT)`.
    pub fn available_bucket_range(&self) -> Option<(usize, usize)> {
        let mut min = None;
        let mut max = None;
        for buckets in BUCKET_COUNT_MIN..PALETTE_BUCKET_SCAN_LIMIT {
            if self.colors(buckets).is_some() {
                if min.is_none() {
                    min = Some(buckets);
                }
                max = Some(buckets);
            }
        }
        Some((min?, max?))
    }
}

/// Looks up a palette by its settings name.
pub fn palette_by_name(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.name == name)
}

/// Returns the default palette.
///
/// The default name is a compile-time constant kept in `PALETTES`, so the
/// lookup cannot miss.
pub fn default_palette() -> &'static Palette {
    PALETTES
        .iter()
        .find(|p| p.name == DEFAULT_PALETTE_NAME)
        .unwrap_or(&PALETTES[0])
}

/// Resolves the ramp for a palette name and bucket count, falling back when
/// either misses.
///
/// An unknown name falls back to the default palette's ramp for the same
/// count. A count the default palette does not carry either fails closed to
/// the default palette's largest available ramp; callers always get a
/// non-empty ramp.
pub(crate) fn colors_or_fallback(name: &str, buckets: usize) -> &'static [Color] {
    if let Some(colors) = palette_by_name(name).and_then(|p| p.colors(buckets)) {
        return colors;
    }
    let fallback = default_palette();
    if let Some(colors) = fallback.colors(buckets) {
        return colors;
    }
    let largest = fallback
        .available_bucket_range()
        .map_or(RAMP_MAX, |(_, max)| max);
    fallback.colors(largest).unwrap_or(&FALLBACK_RAMP)
}

const fn rgb(hex: u32) -> Color {
    Color::from_rgb8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

static FALLBACK_RAMP: [Color; 3] = [rgb(0xfee0d2), rgb(0xfc9272), rgb(0xde2d26)];

static REDS_3: [Color; 3] = [rgb(0xfee0d2), rgb(0xfc9272), rgb(0xde2d26)];
static REDS_4: [Color; 4] = [rgb(0xfee5d9), rgb(0xfcae91), rgb(0xfb6a4a), rgb(0xcb181d)];
static REDS_5: [Color; 5] = [
    rgb(0xfee5d9),
    rgb(0xfcae91),
    rgb(0xfb6a4a),
    rgb(0xde2d26),
    rgb(0xa50f15),
];
static REDS_6: [Color; 6] = [
    rgb(0xfee5d9),
    rgb(0xfcbba1),
    rgb(0xfc9272),
    rgb(0xfb6a4a),
    rgb(0xde2d26),
    rgb(0xa50f15),
];
static REDS_7: [Color; 7] = [
    rgb(0xfee5d9),
    rgb(0xfcbba1),
    rgb(0xfc9272),
    rgb(0xfb6a4a),
    rgb(0xef3b2c),
    rgb(0xcb181d),
    rgb(0x99000d),
];
static REDS_8: [Color; 8] = [
    rgb(0xfff5f0),
    rgb(0xfee0d2),
    rgb(0xfcbba1),
    rgb(0xfc9272),
    rgb(0xfb6a4a),
    rgb(0xef3b2c),
    rgb(0xcb181d),
    rgb(0x99000d),
];
static REDS_9: [Color; 9] = [
    rgb(0xfff5f0),
    rgb(0xfee0d2),
    rgb(0xfcbba1),
    rgb(0xfc9272),
    rgb(0xfb6a4a),
    rgb(0xef3b2c),
    rgb(0xcb181d),
    rgb(0xa50f15),
    rgb(0x67000d),
];

static BLUES_3: [Color; 3] = [rgb(0xdeebf7), rgb(0x9ecae1), rgb(0x3182bd)];
static BLUES_4: [Color; 4] = [rgb(0xeff3ff), rgb(0xbdd7e7), rgb(0x6baed6), rgb(0x2171b5)];
static BLUES_5: [Color; 5] = [
    rgb(0xeff3ff),
    rgb(0xbdd7e7),
    rgb(0x6baed6),
    rgb(0x3182bd),
    rgb(0x08519c),
];
static BLUES_6: [Color; 6] = [
    rgb(0xeff3ff),
    rgb(0xc6dbef),
    rgb(0x9ecae1),
    rgb(0x6baed6),
    rgb(0x3182bd),
    rgb(0x08519c),
];
static BLUES_7: [Color; 7] = [
    rgb(0xeff3ff),
    rgb(0xc6dbef),
    rgb(0x9ecae1),
    rgb(0x6baed6),
    rgb(0x4292c6),
    rgb(0x2171b5),
    rgb(0x084594),
];
static BLUES_8: [Color; 8] = [
    rgb(0xf7fbff),
    rgb(0xdeebf7),
    rgb(0xc6dbef),
    rgb(0x9ecae1),
    rgb(0x6baed6),
    rgb(0x4292c6),
    rgb(0x2171b5),
    rgb(0x084594),
];
static BLUES_9: [Color; 9] = [
    rgb(0xf7fbff),
    rgb(0xdeebf7),
    rgb(0xc6dbef),
    rgb(0x9ecae1),
    rgb(0x6baed6),
    rgb(0x4292c6),
    rgb(0x2171b5),
    rgb(0x08519c),
    rgb(0x08306b),
];

static GREENS_3: [Color; 3] = [rgb(0xe5f5e0), rgb(0xa1d99b), rgb(0x31a354)];
static GREENS_4: [Color; 4] = [rgb(0xedf8e9), rgb(0xbae4b3), rgb(0x74c476), rgb(0x238b45)];
static GREENS_5: [Color; 5] = [
    rgb(0xedf8e9),
    rgb(0xbae4b3),
    rgb(0x74c476),
    rgb(0x31a354),
    rgb(0x006d2c),
];
static GREENS_6: [Color; 6] = [
    rgb(0xedf8e9),
    rgb(0xc7e9c0),
    rgb(0xa1d99b),
    rgb(0x74c476),
    rgb(0x31a354),
    rgb(0x006d2c),
];
static GREENS_7: [Color; 7] = [
    rgb(0xedf8e9),
    rgb(0xc7e9c0),
    rgb(0xa1d99b),
    rgb(0x74c476),
    rgb(0x41ab5d),
    rgb(0x238b45),
    rgb(0x005a32),
];
static GREENS_8: [Color; 8] = [
    rgb(0xf7fcf5),
    rgb(0xe5f5e0),
    rgb(0xc7e9c0),
    rgb(0xa1d99b),
    rgb(0x74c476),
    rgb(0x41ab5d),
    rgb(0x238b45),
    rgb(0x005a32),
];
static GREENS_9: [Color; 9] = [
    rgb(0xf7fcf5),
    rgb(0xe5f5e0),
    rgb(0xc7e9c0),
    rgb(0xa1d99b),
    rgb(0x74c476),
    rgb(0x41ab5d),
    rgb(0x238b45),
    rgb(0x006d2c),
    rgb(0x00441b),
];

static GREYS_3: [Color; 3] = [rgb(0xf0f0f0), rgb(0xbdbdbd), rgb(0x636363)];
static GREYS_4: [Color; 4] = [rgb(0xf7f7f7), rgb(0xcccccc), rgb(0x969696), rgb(0x525252)];
static GREYS_5: [Color; 5] = [
    rgb(0xf7f7f7),
    rgb(0xcccccc),
    rgb(0x969696),
    rgb(0x636363),
    rgb(0x252525),
];
static GREYS_6: [Color; 6] = [
    rgb(0xf7f7f7),
    rgb(0xd9d9d9),
    rgb(0xbdbdbd),
    rgb(0x969696),
    rgb(0x636363),
    rgb(0x252525),
];
static GREYS_7: [Color; 7] = [
    rgb(0xf7f7f7),
    rgb(0xd9d9d9),
    rgb(0xbdbdbd),
    rgb(0x969696),
    rgb(0x737373),
    rgb(0x525252),
    rgb(0x252525),
];
static GREYS_8: [Color; 8] = [
    rgb(0xffffff),
    rgb(0xf0f0f0),
    rgb(0xd9d9d9),
    rgb(0xbdbdbd),
    rgb(0x969696),
    rgb(0x737373),
    rgb(0x525252),
    rgb(0x252525),
];
static GREYS_9: [Color; 9] = [
    rgb(0xffffff),
    rgb(0xf0f0f0),
    rgb(0xd9d9d9),
    rgb(0xbdbdbd),
    rgb(0x969696),
    rgb(0x737373),
    rgb(0x525252),
    rgb(0x252525),
    rgb(0x000000),
];

static ORANGES_3: [Color; 3] = [rgb(0xfee6ce), rgb(0xfdae6b), rgb(0xe6550d)];
static ORANGES_4: [Color; 4] = [rgb(0xfeedde), rgb(0xfdbe85), rgb(0xfd8d3c), rgb(0xd94701)];
static ORANGES_5: [Color; 5] = [
    rgb(0xfeedde),
    rgb(0xfdbe85),
    rgb(0xfd8d3c),
    rgb(0xe6550d),
    rgb(0xa63603),
];
static ORANGES_6: [Color; 6] = [
    rgb(0xfeedde),
    rgb(0xfdd0a2),
    rgb(0xfdae6b),
    rgb(0xfd8d3c),
    rgb(0xe6550d),
    rgb(0xa63603),
];
static ORANGES_7: [Color; 7] = [
    rgb(0xfeedde),
    rgb(0xfdd0a2),
    rgb(0xfdae6b),
    rgb(0xfd8d3c),
    rgb(0xf16913),
    rgb(0xd94801),
    rgb(0x8c2d04),
];
static ORANGES_8: [Color; 8] = [
    rgb(0xfff5eb),
    rgb(0xfee6ce),
    rgb(0xfdd0a2),
    rgb(0xfdae6b),
    rgb(0xfd8d3c),
    rgb(0xf16913),
    rgb(0xd94801),
    rgb(0x8c2d04),
];
static ORANGES_9: [Color; 9] = [
    rgb(0xfff5eb),
    rgb(0xfee6ce),
    rgb(0xfdd0a2),
    rgb(0xfdae6b),
    rgb(0xfd8d3c),
    rgb(0xf16913),
    rgb(0xd94801),
    rgb(0xa63603),
    rgb(0x7f2704),
];

static PURPLES_3: [Color; 3] = [rgb(0xefedf5), rgb(0xbcbddc), rgb(0x756bb1)];
static PURPLES_4: [Color; 4] = [rgb(0xf2f0f7), rgb(0xcbc9e2), rgb(0x9e9ac8), rgb(0x6a51a3)];
static PURPLES_5: [Color; 5] = [
    rgb(0xf2f0f7),
    rgb(0xcbc9e2),
    rgb(0x9e9ac8),
    rgb(0x756bb1),
    rgb(0x54278f),
];
static PURPLES_6: [Color; 6] = [
    rgb(0xf2f0f7),
    rgb(0xdadaeb),
    rgb(0xbcbddc),
    rgb(0x9e9ac8),
    rgb(0x756bb1),
    rgb(0x54278f),
];
static PURPLES_7: [Color; 7] = [
    rgb(0xf2f0f7),
    rgb(0xdadaeb),
    rgb(0xbcbddc),
    rgb(0x9e9ac8),
    rgb(0x807dba),
    rgb(0x6a51a3),
    rgb(0x4a1486),
];
static PURPLES_8: [Color; 8] = [
    rgb(0xfcfbfd),
    rgb(0xefedf5),
    rgb(0xdadaeb),
    rgb(0xbcbddc),
    rgb(0x9e9ac8),
    rgb(0x807dba),
    rgb(0x6a51a3),
    rgb(0x4a1486),
];
static PURPLES_9: [Color; 9] = [
    rgb(0xfcfbfd),
    rgb(0xefedf5),
    rgb(0xdadaeb),
    rgb(0xbcbddc),
    rgb(0x9e9ac8),
    rgb(0x807dba),
    rgb(0x6a51a3),
    rgb(0x54278f),
    rgb(0x3f007d),
];

static YLGNBU_3: [Color; 3] = [rgb(0xedf8b1), rgb(0x7fcdbb), rgb(0x2c7fb8)];
static YLGNBU_4: [Color; 4] = [rgb(0xffffcc), rgb(0xa1dab4), rgb(0x41b6c4), rgb(0x225ea8)];
static YLGNBU_5: [Color; 5] = [
    rgb(0xffffcc),
    rgb(0xa1dab4),
    rgb(0x41b6c4),
    rgb(0x2c7fb8),
    rgb(0x253494),
];
static YLGNBU_6: [Color; 6] = [
    rgb(0xffffcc),
    rgb(0xc7e9b4),
    rgb(0x7fcdbb),
    rgb(0x41b6c4),
    rgb(0x2c7fb8),
    rgb(0x253494),
];
static YLGNBU_7: [Color; 7] = [
    rgb(0xffffcc),
    rgb(0xc7e9b4),
    rgb(0x7fcdbb),
    rgb(0x41b6c4),
    rgb(0x1d91c0),
    rgb(0x225ea8),
    rgb(0x0c2c84),
];
static YLGNBU_8: [Color; 8] = [
    rgb(0xffffd9),
    rgb(0xedf8b1),
    rgb(0xc7e9b4),
    rgb(0x7fcdbb),
    rgb(0x41b6c4),
    rgb(0x1d91c0),
    rgb(0x225ea8),
    rgb(0x0c2c84),
];
static YLGNBU_9: [Color; 9] = [
    rgb(0xffffd9),
    rgb(0xedf8b1),
    rgb(0xc7e9b4),
    rgb(0x7fcdbb),
    rgb(0x41b6c4),
    rgb(0x1d91c0),
    rgb(0x225ea8),
    rgb(0x253494),
    rgb(0x081d58),
];

static YLORRD_3: [Color; 3] = [rgb(0xffeda0), rgb(0xfeb24c), rgb(0xf03b20)];
static YLORRD_4: [Color; 4] = [rgb(0xffffb2), rgb(0xfecc5c), rgb(0xfd8d3c), rgb(0xe31a1c)];
static YLORRD_5: [Color; 5] = [
    rgb(0xffffb2),
    rgb(0xfecc5c),
    rgb(0xfd8d3c),
    rgb(0xf03b20),
    rgb(0xbd0026),
];
static YLORRD_6: [Color; 6] = [
    rgb(0xffffb2),
    rgb(0xfed976),
    rgb(0xfeb24c),
    rgb(0xfd8d3c),
    rgb(0xf03b20),
    rgb(0xbd0026),
];
static YLORRD_7: [Color; 7] = [
    rgb(0xffffb2),
    rgb(0xfed976),
    rgb(0xfeb24c),
    rgb(0xfd8d3c),
    rgb(0xfc4e2a),
    rgb(0xe31a1c),
    rgb(0xb10026),
];
static YLORRD_8: [Color; 8] = [
    rgb(0xffffcc),
    rgb(0xffeda0),
    rgb(0xfed976),
    rgb(0xfeb24c),
    rgb(0xfd8d3c),
    rgb(0xfc4e2a),
    rgb(0xe31a1c),
    rgb(0xb10026),
];
static YLORRD_9: [Color; 9] = [
    rgb(0xffffcc),
    rgb(0xffeda0),
    rgb(0xfed976),
    rgb(0xfeb24c),
    rgb(0xfd8d3c),
    rgb(0xfc4e2a),
    rgb(0xe31a1c),
    rgb(0xbd0026),
    rgb(0x800026),
];

/// All palettes this crate carries, in settings-panel order.
pub static PALETTES: [Palette; 8] = [
    Palette {
        name: "Reds",
        ramps: [
            &REDS_3, &REDS_4, &REDS_5, &REDS_6, &REDS_7, &REDS_8, &REDS_9,
        ],
    },
    Palette {
        name: "Blues",
        ramps: [
            &BLUES_3, &BLUES_4, &BLUES_5, &BLUES_6, &BLUES_7, &BLUES_8, &BLUES_9,
        ],
    },
    Palette {
        name: "Greens",
        ramps: [
            &GREENS_3, &GREENS_4, &GREENS_5, &GREENS_6, &GREENS_7, &GREENS_8, &GREENS_9,
        ],
    },
    Palette {
        name: "Greys",
        ramps: [
            &GREYS_3, &GREYS_4, &GREYS_5, &GREYS_6, &GREYS_7, &GREYS_8, &GREYS_9,
        ],
    },
    Palette {
        name: "Oranges",
        ramps: [
            &ORANGES_3, &ORANGES_4, &ORANGES_5, &ORANGES_6, &ORANGES_7, &ORANGES_8, &ORANGES_9,
        ],
    },
    Palette {
        name: "Purples",
        ramps: [
            &PURPLES_3, &PURPLES_4, &PURPLES_5, &PURPLES_6, &PURPLES_7, &PURPLES_8, &PURPLES_9,
        ],
    },
    Palette {
        name: "YlGnBu",
        ramps: [
            &YLGNBU_3, &YLGNBU_4, &YLGNBU_5, &YLGNBU_6, &YLGNBU_7, &YLGNBU_8, &YLGNBU_9,
        ],
    },
    Palette {
        name: "YlOrRd",
        ramps: [
            &YLORRD_3, &YLORRD_4, &YLORRD_5, &YLORRD_6, &YLORRD_7, &YLORRD_8, &YLORRD_9,
        ],
    },
];

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn every_ramp_matches_its_bucket_count() {
        for palette in &PALETTES {
            for buckets in RAMP_MIN..=RAMP_MAX {
                let ramp = palette.colors(buckets).expect("ramp in declared range");
                assert_eq!(ramp.len(), buckets, "{} x{buckets}", palette.name);
            }
            assert!(palette.colors(RAMP_MIN - 1).is_none());
            assert!(palette.colors(RAMP_MAX + 1).is_none());
        }
    }

    #[test]
    fn available_range_scans_to_the_declared_bounds() {
        let reds = palette_by_name("Reds").expect("Reds is always present");
        assert_eq!(reds.available_bucket_range(), Some((RAMP_MIN, RAMP_MAX)));
    }

    #[test]
    fn unknown_names_fall_back_to_the_default_palette() {
        let fallback = colors_or_fallback("NotAPalette", 5);
        let reds = default_palette().colors(5).expect("default carries 5");
        assert_eq!(fallback, reds);
    }

    #[test]
    fn uncarried_counts_fail_closed_to_the_largest_default_ramp() {
        let fallback = colors_or_fallback("Reds", 12);
        assert_eq!(fallback.len(), RAMP_MAX);
    }
}
