//! Region-by-region compositing and persistence of the final image

use crate::canvas::Canvas;
use crate::compose::blend::AlphaCompositor;
use crate::io::error::{Result, StudioError};
use crate::io::image::{default_output_dir, output_file_name, save_rgb};
use crate::io::progress::ProgressManager;
use crate::patterns::{PatternAsset, PatternLibrary};
use crate::regions::Region;
use chrono::{DateTime, Local};
use image::{RgbImage, imageops};
use rand::Rng;
use std::path::PathBuf;

/// Where one region's pattern ended up
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Region that received the pattern
    pub region_id: usize,
    /// Pattern file that was drawn
    pub pattern: PathBuf,
    /// Top-left canvas position of the pasted pattern
    pub origin: (u32, u32),
    /// Fitted (width, height)
    pub size: (u32, u32),
}

/// Output of one compositing pass, never cached between passes
#[derive(Clone, Debug)]
pub struct CompositeResult {
    /// Final pixels with every region filled
    pub image: RgbImage,
    /// One entry per region that received pixels, in id order
    pub placements: Vec<Placement>,
}

/// Drives the compositor over every region and writes the result
///
/// A pass is atomic: the first failing region aborts it, the canvas original
/// is never touched and nothing is written to disk.
#[derive(Default)]
pub struct ExportPipeline {
    compositor: AlphaCompositor,
    output_dir: Option<PathBuf>,
    progress_manager: Option<ProgressManager>,
}

impl ExportPipeline {
    /// Create a pipeline exporting to the platform downloads directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `compositor` for every region
    #[must_use]
    pub fn with_compositor(mut self, compositor: AlphaCompositor) -> Self {
        self.compositor = compositor;
        self
    }

    /// Export into `dir` instead of the downloads directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Report per-region progress while compositing
    #[must_use]
    pub fn with_progress(mut self, progress_manager: ProgressManager) -> Self {
        self.progress_manager = Some(progress_manager);
        self
    }

    /// Directory exports are written to
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(default_output_dir)
    }

    /// Blend a random pattern into every region of a copy of `canvas`
    ///
    /// Regions are processed in id order against the working copy, so a
    /// region overlapping an earlier one blends over that region's pattern.
    /// Zero-area regions draw a pattern but paste nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The library is empty
    /// - A drawn pattern cannot be decoded or has an unsupported layout
    /// - A region's paste rectangle leaves the canvas
    pub fn compose<R: Rng>(
        &self,
        canvas: &Canvas,
        regions: &[Region],
        library: &mut PatternLibrary<R>,
    ) -> Result<CompositeResult> {
        if library.is_empty() {
            return Err(StudioError::EmptyLibrary);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.initialize(regions.len());
        }

        let result = self.compose_regions(canvas, regions, library);

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        result
    }

    fn compose_regions<R: Rng>(
        &self,
        canvas: &Canvas,
        regions: &[Region],
        library: &mut PatternLibrary<R>,
    ) -> Result<CompositeResult> {
        let mut image = canvas.working_copy();
        let mut placements = Vec::with_capacity(regions.len());

        for region in regions {
            let pattern_path = library.pick_random()?.to_path_buf();
            if let Some(ref pm) = self.progress_manager {
                pm.start_region(region.id(), &pattern_path);
            }

            let asset = PatternAsset::load(&pattern_path)?;
            match self.compositor.blend(&image, region, &asset)? {
                Some(patch) => {
                    imageops::replace(
                        &mut image,
                        &patch.pixels,
                        i64::from(patch.origin.0),
                        i64::from(patch.origin.1),
                    );
                    log::debug!(
                        "region {} <- {} at {:?} size {:?}",
                        region.label(),
                        pattern_path.display(),
                        patch.origin,
                        patch.pixels.dimensions()
                    );
                    placements.push(Placement {
                        region_id: region.id(),
                        pattern: pattern_path,
                        origin: patch.origin,
                        size: patch.pixels.dimensions(),
                    });
                }
                None => {
                    log::warn!(
                        "region {} has no area to fill, skipping {}",
                        region.label(),
                        pattern_path.display()
                    );
                }
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_region();
            }
        }

        Ok(CompositeResult { image, placements })
    }

    /// Composite and return the pixels without persisting them
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::compose`]
    pub fn run<R: Rng>(
        &self,
        canvas: &Canvas,
        regions: &[Region],
        library: &mut PatternLibrary<R>,
    ) -> Result<RgbImage> {
        Ok(self.compose(canvas, regions, library)?.image)
    }

    /// Composite and save under the export naming convention, timestamped now
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::export_at`]
    pub fn export<R: Rng>(
        &self,
        canvas: &Canvas,
        regions: &[Region],
        library: &mut PatternLibrary<R>,
    ) -> Result<PathBuf> {
        self.export_at(canvas, regions, library, &Local::now())
    }

    /// Composite and save as `<stem>-PixStudio-<timestamp><.ext>` in the output directory
    ///
    /// # Errors
    ///
    /// Returns an error if compositing fails (see [`Self::compose`]) or the
    /// output directory or file cannot be written
    pub fn export_at<R: Rng>(
        &self,
        canvas: &Canvas,
        regions: &[Region],
        library: &mut PatternLibrary<R>,
        now: &DateTime<Local>,
    ) -> Result<PathBuf> {
        let composite = self.compose(canvas, regions, library)?;
        let output_path = self.output_dir().join(output_file_name(canvas.path(), now));

        save_rgb(&composite.image, &output_path).inspect_err(|e| {
            log::error!("export failed: {e}");
        })?;
        log::info!(
            "exported {} regions to {}",
            composite.placements.len(),
            output_path.display()
        );

        Ok(output_path)
    }
}
