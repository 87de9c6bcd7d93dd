//! Editing session tying the canvas, regions, patterns and export together

use crate::canvas::Canvas;
use crate::compose::{CompositeResult, ExportPipeline};
use crate::io::error::{Result, StudioError};
use crate::patterns::PatternLibrary;
use crate::preview::PreviewRenderer;
use crate::regions::{Rect, Region, RegionField, RegionStore};
use image::RgbImage;
use rand::Rng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// One editing session as driven by a host application
///
/// Every region change redraws the preview; opening a new base image drops
/// all regions. Compositing always reads the clean original.
pub struct Studio<R = StdRng> {
    canvas: Option<Canvas>,
    regions: RegionStore<PreviewRenderer>,
    patterns: PatternLibrary<R>,
    pipeline: ExportPipeline,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

impl Studio {
    /// Create a session with unseeded pattern selection
    pub fn new() -> Self {
        Self::with_library(PatternLibrary::new())
    }

    /// Create a session whose pattern selection is reproducible
    pub fn seeded(seed: u64) -> Self {
        Self::with_library(PatternLibrary::seeded(seed))
    }
}

impl<R: Rng> Studio<R> {
    /// Create a session around an existing pattern library
    pub fn with_library(patterns: PatternLibrary<R>) -> Self {
        Self {
            canvas: None,
            regions: RegionStore::with_observer(PreviewRenderer::new()),
            patterns,
            pipeline: ExportPipeline::new(),
        }
    }

    /// Replace the export pipeline configuration
    #[must_use]
    pub fn with_pipeline(mut self, pipeline: ExportPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Open a base image, discarding all regions
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be read; the current session is
    /// left unchanged in that case
    pub fn open_base(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let canvas = Canvas::open(path)?;
        self.set_canvas(canvas);
        Ok(())
    }

    /// Use an already decoded canvas, discarding all regions
    pub fn set_canvas(&mut self, canvas: Canvas) {
        log::debug!(
            "base image {} ({}x{})",
            canvas.path().display(),
            canvas.dimensions().0,
            canvas.dimensions().1
        );
        self.regions.clear();
        self.regions
            .observer_mut()
            .set_base(canvas.shared(), &[]);
        self.canvas = Some(canvas);
    }

    /// Drop the canvas, every region and every pattern
    pub fn reset(&mut self) {
        self.regions.clear();
        self.regions.observer_mut().clear_base();
        self.patterns.clear();
        self.canvas = None;
    }

    /// Register more pattern files
    pub fn add_patterns<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.patterns.add_assets(paths);
    }

    /// Add a region from a resolved selection; zero-area selections return `None`
    pub fn add_region(&mut self, rect: Rect) -> Option<usize> {
        let id = self.regions.add_region(rect);
        if id.is_none() {
            log::debug!("ignoring empty selection {rect:?}");
        }
        id
    }

    /// Change one field of region `id`; unknown ids are ignored
    pub fn update_region(&mut self, id: usize, field: RegionField, value: u32) -> bool {
        let updated = self.regions.update_field(id, field, value);
        if !updated {
            log::debug!("ignoring edit of unknown region {id}");
        }
        updated
    }

    /// Regions in creation order
    pub fn regions(&self) -> &[Region] {
        self.regions.list()
    }

    /// Registered patterns
    pub const fn patterns(&self) -> &PatternLibrary<R> {
        &self.patterns
    }

    /// Current canvas, if a base image is open
    pub const fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Annotated preview frame, if a base image is open
    pub const fn preview(&self) -> Option<&RgbImage> {
        self.regions.observer().frame()
    }

    /// Export configuration in use
    pub const fn pipeline(&self) -> &ExportPipeline {
        &self.pipeline
    }

    /// Composite every region and keep the placements
    ///
    /// # Errors
    ///
    /// Returns an error if no pattern is registered, no base image is open,
    /// or any region fails to composite
    pub fn compose(&mut self) -> Result<CompositeResult> {
        if self.patterns.is_empty() {
            return Err(StudioError::EmptyLibrary);
        }
        let canvas = self.canvas.as_ref().ok_or(StudioError::NoBaseImage)?;
        self.pipeline
            .compose(canvas, self.regions.list(), &mut self.patterns)
    }

    /// Composite every region and return the pixels for display
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::compose`]
    pub fn run(&mut self) -> Result<RgbImage> {
        Ok(self.compose()?.image)
    }

    /// Composite every region and save it under the export naming convention
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::compose`], plus any failure to
    /// create the output directory or write the file
    pub fn export(&mut self) -> Result<PathBuf> {
        if self.patterns.is_empty() {
            return Err(StudioError::EmptyLibrary);
        }
        let canvas = self.canvas.as_ref().ok_or(StudioError::NoBaseImage)?;
        self.pipeline
            .export(canvas, self.regions.list(), &mut self.patterns)
    }
}
