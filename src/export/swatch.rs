//! Swatch rasterizer: one small PNG circle per palette role.
//!
//! Each swatch is a 23×23 transparent canvas with an opaque filled disk of
//! radius 11 in the middle. Files are named `<palette>-<role-slug>.png`.

// Pixel offsets are bounded by the canvas size
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

use crate::constants::{SWATCH_RADIUS, SWATCH_SIZE};
use crate::models::{ColorError, Palette, RgbColor, Role};
use image::{ImageFormat, Rgba, RgbaImage};
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while writing swatch files.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output directory could not be created. Nothing can be written.
    #[error("Failed to create output directory {}: {source}", .path.display())]
    Directory {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A swatch image could not be PNG-encoded.
    #[error("Failed to encode PNG for {}: {source}", .path.display())]
    Encode {
        /// File the image was destined for.
        path: PathBuf,
        /// Underlying encoder failure.
        #[source]
        source: image::ImageError,
    },

    /// A swatch file could not be written, or its path would land outside
    /// the output directory.
    #[error("Failed to create file {}: {source}", .path.display())]
    Write {
        /// File that was not written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Why a role produced no swatch file.
#[derive(Debug)]
pub enum SkipReason {
    /// The palette's hex string for the role did not parse.
    InvalidColor(ColorError),
    /// Encoding or writing the file failed.
    Export(ExportError),
}

/// A role that was eligible for a swatch but did not get one.
#[derive(Debug)]
pub struct SkippedSwatch {
    /// The role that was skipped.
    pub role: Role,
    /// What went wrong.
    pub reason: SkipReason,
}

/// Outcome of writing the swatches of one palette.
#[derive(Debug, Default)]
pub struct SwatchReport {
    /// Files written, in role display order.
    pub written: Vec<PathBuf>,
    /// Roles skipped because of a per-role failure.
    pub skipped: Vec<SkippedSwatch>,
}

/// Rasterizes a swatch: an opaque disk on a transparent square canvas.
///
/// A pixel is filled when its offset from the centre satisfies
/// `dx² + dy² <= radius²`; every other pixel stays fully transparent.
#[must_use]
pub fn render_swatch(color: RgbColor) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(SWATCH_SIZE, SWATCH_SIZE, Rgba([0, 0, 0, 0]));
    let fill = Rgba([color.r, color.g, color.b, 255]);
    let center = (SWATCH_SIZE / 2) as i32;
    let radius = SWATCH_RADIUS;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                image.put_pixel((center + dx) as u32, (center + dy) as u32, fill);
            }
        }
    }

    image
}

/// File name of the swatch for `role` in the palette called `palette_name`.
///
/// # Examples
///
/// ```
/// use onedark_palette::export::swatch::swatch_file_name;
/// use onedark_palette::models::Role;
///
/// assert_eq!(swatch_file_name("dark", Role::DarkRed), "dark-dark-red.png");
/// ```
#[must_use]
pub fn swatch_file_name(palette_name: &str, role: Role) -> String {
    format!("{}-{}.png", palette_name, role.slug())
}

/// Writes swatch PNGs for palettes into one output directory.
#[derive(Debug, Clone)]
pub struct SwatchWriter {
    output_dir: PathBuf,
}

impl SwatchWriter {
    /// Creates a writer targeting `output_dir`. The directory is created on
    /// first use, not here.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory the swatches are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes one swatch per role that the palette defines.
    ///
    /// Bad colors and failed file writes are logged and recorded in the
    /// report; the remaining roles are still processed. A palette name that
    /// would place a file outside the output directory (absolute, or with
    /// path separators) fails as a write for every role.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Directory`] if the output directory cannot be
    /// created.
    pub fn write_palette(
        &self,
        palette_name: &str,
        palette: &Palette,
    ) -> Result<SwatchReport, ExportError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::Directory {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut report = SwatchReport::default();

        for (role, hex) in palette.role_colors() {
            let color = match RgbColor::from_hex(hex) {
                Ok(color) => color,
                Err(e) => {
                    warn!("Skipping {} swatch for palette '{}': {}", role, palette_name, e);
                    report.skipped.push(SkippedSwatch {
                        role,
                        reason: SkipReason::InvalidColor(e),
                    });
                    continue;
                }
            };

            let path = self.output_dir.join(swatch_file_name(palette_name, role));
            let written = if path.parent() == Some(self.output_dir.as_path()) {
                write_png(&path, &render_swatch(color))
            } else {
                Err(ExportError::Write {
                    path: path.clone(),
                    source: io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "palette name escapes the output directory",
                    ),
                })
            };
            match written {
                Ok(()) => {
                    debug!("Wrote {}", path.display());
                    report.written.push(path);
                }
                Err(e) => {
                    warn!("{}", e);
                    report.skipped.push(SkippedSwatch {
                        role,
                        reason: SkipReason::Export(e),
                    });
                }
            }
        }

        info!(
            "Palette '{}': wrote {} swatches to {} ({} skipped)",
            palette_name,
            report.written.len(),
            self.output_dir.display(),
            report.skipped.len()
        );

        Ok(report)
    }
}

/// Encodes in memory first so a failed encode never leaves a partial file.
fn write_png(path: &Path, image: &RgbaImage) -> Result<(), ExportError> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|source| ExportError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, bytes.into_inner()).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dark_palette() -> Palette {
        Palette::new()
            .with_color("red", "#E06C75")
            .with_color("bg0", "#282C34")
    }

    #[test]
    fn test_render_swatch_geometry() {
        let image = render_swatch(RgbColor::new(224, 108, 117));
        assert_eq!(image.dimensions(), (23, 23));

        // Centre and the four extreme points of the disk are filled
        for (x, y) in [(11, 11), (0, 11), (22, 11), (11, 0), (11, 22)] {
            assert_eq!(image.get_pixel(x, y), &Rgba([224, 108, 117, 255]), "({x}, {y})");
        }

        // Corners are outside the disk
        for (x, y) in [(0, 0), (22, 0), (0, 22), (22, 22)] {
            assert_eq!(image.get_pixel(x, y)[3], 0, "({x}, {y})");
        }
    }

    #[test]
    fn test_render_swatch_inclusive_boundary() {
        let image = render_swatch(RgbColor::new(1, 2, 3));

        // dx=11, dy=0 lies exactly on the circle; dx=8, dy=8 (128 > 121) lies outside
        assert_eq!(image.get_pixel(22, 11)[3], 255);
        assert_eq!(image.get_pixel(19, 19)[3], 0);
        // dx=7, dy=8 (113 <= 121) is inside
        assert_eq!(image.get_pixel(18, 19)[3], 255);
    }

    #[test]
    fn test_render_swatch_only_two_pixel_values() {
        let image = render_swatch(RgbColor::new(10, 20, 30));
        for pixel in image.pixels() {
            assert!(pixel == &Rgba([10, 20, 30, 255]) || pixel[3] == 0);
        }
    }

    #[test]
    fn test_swatch_file_name() {
        assert_eq!(swatch_file_name("dark", Role::Red), "dark-red.png");
        assert_eq!(swatch_file_name("frost", Role::Subtext1), "frost-subtext1.png");
        assert_eq!(swatch_file_name("ember", Role::DarkYellow), "ember-dark-yellow.png");
    }

    #[test]
    fn test_write_palette_creates_directory_and_files() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("assets/palette/circles");
        let writer = SwatchWriter::new(&out_dir);

        let report = writer.write_palette("dark", &dark_palette()).unwrap();

        assert_eq!(
            report.written,
            vec![out_dir.join("dark-red.png"), out_dir.join("dark-base.png")]
        );
        assert!(report.skipped.is_empty());

        let red = image::open(out_dir.join("dark-red.png")).unwrap().to_rgba8();
        assert_eq!(red.dimensions(), (23, 23));
        assert_eq!(red.get_pixel(11, 11), &Rgba([224, 108, 117, 255]));
        assert_eq!(red.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_write_palette_skips_invalid_color() {
        let temp = TempDir::new().unwrap();
        let writer = SwatchWriter::new(temp.path());
        let palette = dark_palette().with_color("fg", "#ZZZZZZ");

        let report = writer.write_palette("dark", &palette).unwrap();

        assert_eq!(report.written.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].role, Role::Text);
        assert!(matches!(report.skipped[0].reason, SkipReason::InvalidColor(_)));
        assert!(!temp.path().join("dark-text.png").exists());
        assert!(temp.path().join("dark-red.png").exists());
        assert!(temp.path().join("dark-base.png").exists());
    }

    #[test]
    fn test_write_palette_ignores_unmapped_keys() {
        let temp = TempDir::new().unwrap();
        let writer = SwatchWriter::new(temp.path());
        let palette = Palette::new().with_color("magenta", "#FF00FF");

        let report = writer.write_palette("dark", &palette).unwrap();

        assert!(report.written.is_empty());
        assert!(report.skipped.is_empty());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write_palette_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let writer = SwatchWriter::new(temp.path());

        writer.write_palette("dark", &dark_palette()).unwrap();
        let first = fs::read(temp.path().join("dark-red.png")).unwrap();
        writer.write_palette("dark", &dark_palette()).unwrap();
        let second = fs::read(temp.path().join("dark-red.png")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_write_palette_absolute_name_stays_in_output_dir() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("assets/palette/circles");
        let writer = SwatchWriter::new(&out_dir);
        let outside = temp.path().join("outside");
        let palette = Palette::new().with_color("red", "#E06C75");

        let report = writer
            .write_palette(&outside.to_string_lossy(), &palette)
            .unwrap();

        assert!(report.written.iter().all(|p| p.starts_with(&out_dir)));
        assert!(report.written.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].role, Role::Red);
        assert!(matches!(
            report.skipped[0].reason,
            SkipReason::Export(ExportError::Write { .. })
        ));
        assert!(!temp.path().join("outside-red.png").exists());
    }

    #[test]
    fn test_write_palette_relative_escape_is_skipped() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("circles");
        let writer = SwatchWriter::new(&out_dir);

        for name in ["../up", "nested/dark"] {
            let report = writer.write_palette(name, &dark_palette()).unwrap();
            assert!(report.written.is_empty(), "{name}");
            assert_eq!(report.skipped.len(), 2, "{name}");
        }

        assert!(!temp.path().join("up-red.png").exists());
        assert!(!out_dir.join("nested").exists());
        // A well-formed name next to them is still written
        let report = writer.write_palette("dark", &dark_palette()).unwrap();
        assert_eq!(report.written.len(), 2);
    }

    #[test]
    fn test_write_palette_directory_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, b"file").unwrap();

        let writer = SwatchWriter::new(blocker.join("circles"));
        let err = writer.write_palette("dark", &dark_palette()).unwrap_err();

        assert!(matches!(err, ExportError::Directory { .. }));
    }
}
