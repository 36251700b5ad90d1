//! Stamps: small pre-made images composited onto a frame.
//!
//! Unlike painting, stamps are placed at raw device-pixel positions and are
//! alpha-blended (source over) rather than overwriting.

use std::collections::BTreeMap;
use std::path::Path;

use glob::glob;
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use thiserror::Error;
use tracing::{debug, warn};

use crate::canvas::Canvas;

/// Side length of the built-in stamps in device pixels.
pub const BUILTIN_STAMP_SIZE: u32 = 32;

/// Errors while loading stamps from disk.
#[derive(Debug, Error)]
pub enum StampError {
    /// The stamps directory could not be turned into a glob pattern
    #[error("invalid stamp directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// A stamp image could not be decoded
    #[error("failed to load stamp '{name}': {source}")]
    Image {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

/// A named stamp image.
#[derive(Debug, Clone, PartialEq)]
pub struct StampImage {
    name: String,
    image: RgbaImage,
}

impl StampImage {
    pub fn new(name: impl Into<String>, image: RgbaImage) -> Self {
        Self { name: name.into(), image }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Composite `src` over `dst` (Porter-Duff source over).
pub fn source_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    if src[3] == 255 {
        return src;
    }
    if src[3] == 0 {
        return dst;
    }

    let src_a = src[3] as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);

    let channel = |s: u8, d: u8| -> u8 {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        let out = (s * src_a + d * dst_a * (1.0 - src_a)) / out_a;
        (out.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

/// Composite a stamp onto a canvas with its top-left corner at `(x, y)`.
///
/// No grid snapping is applied. Stamp pixels that fall outside the canvas
/// are ignored.
pub fn place_stamp(canvas: &mut Canvas, x: i32, y: i32, stamp: &StampImage) {
    for (sx, sy, pixel) in stamp.image().enumerate_pixels() {
        let dx = x as i64 + sx as i64;
        let dy = y as i64 + sy as i64;
        if !canvas.contains(dx, dy) {
            continue;
        }
        let (dx, dy) = (dx as u32, dy as u32);
        if let Some(dst) = canvas.get(dx, dy) {
            canvas.set(dx, dy, source_over(*pixel, dst));
        }
    }
}

/// The set of stamps the user can pick from.
#[derive(Debug, Clone, Default)]
pub struct StampCatalog {
    stamps: BTreeMap<String, StampImage>,
}

impl StampCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the built-in stamps.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (name, rows) in BUILTIN_STAMPS {
            catalog.insert(StampImage::new(*name, render_stamp(rows)));
        }
        catalog
    }

    /// Add or replace a stamp.
    pub fn insert(&mut self, stamp: StampImage) {
        self.stamps.insert(stamp.name().to_string(), stamp);
    }

    pub fn get(&self, name: &str) -> Option<&StampImage> {
        self.stamps.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stamps.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Load every `*.png` in `dir` as a stamp named after its file stem.
    ///
    /// A file that fails to decode aborts the load; stamps already added stay.
    /// Returns the number of stamps loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, StampError> {
        let pattern = format!("{}/*.png", dir.display());
        let mut loaded = 0;
        for path in glob(&pattern)?.filter_map(Result::ok) {
            let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("stamp").to_string();
            let image = image::open(&path)
                .map_err(|source| StampError::Image { name: name.clone(), source })?
                .to_rgba8();
            if self.stamps.contains_key(&name) {
                warn!(stamp = %name, "stamp file overrides an existing stamp");
            }
            debug!(stamp = %name, path = %path.display(), "stamp loaded");
            self.insert(StampImage::new(name, image));
            loaded += 1;
        }
        Ok(loaded)
    }
}

/// Built-in stamp artwork as 8x8 character grids, scaled up on load.
///
/// `.` is transparent; other characters are looked up in [`stamp_color`].
const BUILTIN_STAMPS: &[(&str, [&str; 8])] = &[
    (
        "yellow",
        [
            "........",
            "..yyyy..",
            ".yyyyyy.",
            "yykyykyy",
            "yyyyyyyy",
            "yyyooyyy",
            ".yyyyyy.",
            "..y..y..",
        ],
    ),
    (
        "blue",
        [
            "........",
            "..bbbb..",
            ".bbbbbb.",
            "bbwbbwbb",
            "bbkbbkbb",
            "bbbbbbbb",
            ".bbbbbb.",
            ".b.bb.b.",
        ],
    ),
    (
        "warrior",
        [
            "..hhhh..",
            "..hssh..",
            "..ssss.w",
            ".rrrrrrw",
            "s.rrrr.w",
            "..rrrr.g",
            "..n..n..",
            ".nn..nn.",
        ],
    ),
    (
        "crab",
        [
            "r......r",
            "rr....rr",
            ".r.kk.r.",
            "..rrrr..",
            ".rrrrrr.",
            "rrrrrrrr",
            ".r.rr.r.",
            "r..rr..r",
        ],
    ),
];

fn stamp_color(c: char) -> Rgba<u8> {
    match c {
        'y' => Rgba([255, 220, 40, 255]),
        'o' => Rgba([255, 127, 0, 255]),
        'b' => Rgba([40, 100, 240, 255]),
        'w' => Rgba([240, 240, 240, 255]),
        'k' => Rgba([0, 0, 0, 255]),
        'h' => Rgba([130, 130, 140, 255]),
        's' => Rgba([250, 190, 150, 255]),
        'r' => Rgba([210, 40, 40, 255]),
        'g' => Rgba([200, 160, 40, 255]),
        'n' => Rgba([100, 60, 20, 255]),
        _ => Rgba([0, 0, 0, 0]),
    }
}

fn render_stamp(rows: &[&str; 8]) -> RgbaImage {
    let small = RgbaImage::from_fn(8, 8, |x, y| {
        let c = rows[y as usize].chars().nth(x as usize).unwrap_or('.');
        stamp_color(c)
    });
    image::imageops::resize(&small, BUILTIN_STAMP_SIZE, BUILTIN_STAMP_SIZE, FilterType::Nearest)
}
