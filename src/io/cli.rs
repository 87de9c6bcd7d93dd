//! Command-line host: build a session from arguments, then preview, run or export

use crate::compose::ExportPipeline;
use crate::io::error::{Result, StudioError, invalid_parameter};
use crate::io::image::save_rgb;
use crate::io::progress::ProgressManager;
use crate::patterns::PatternLibrary;
use crate::patterns::library::collect_pattern_files;
use crate::regions::{Rect, RegionField};
use crate::studio::Studio;
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "pixstudio")]
#[command(
    author,
    version,
    about = "Fill marked regions of an image with randomly chosen patterns"
)]
/// Command-line arguments for the compositing tool
pub struct Cli {
    /// Base image (PNG, JPEG, BMP or GIF)
    #[arg(value_name = "BASE")]
    pub base: PathBuf,

    /// Pattern image or directory of pattern images (repeatable)
    #[arg(short, long = "pattern", value_name = "PATH")]
    pub patterns: Vec<PathBuf>,

    /// Region to fill as x,y,width,height (repeatable, labelled 1, 2, ... in order)
    #[arg(short, long = "region", value_name = "X,Y,W,H")]
    pub regions: Vec<Rect>,

    /// Region edit as LABEL:FIELD=VALUE, e.g. 2:width=80 (repeatable)
    #[arg(short, long = "edit", value_name = "EDIT")]
    pub edits: Vec<RegionEdit>,

    /// Random seed for reproducible pattern selection
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Export directory (defaults to the downloads directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write the annotated region overlay to this path
    #[arg(long, value_name = "PATH")]
    pub preview: Option<PathBuf>,

    /// Write the composite to this path instead of exporting
    #[arg(long, value_name = "PATH")]
    pub run: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Field edit addressed by the 1-based label shown in the preview
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionEdit {
    /// Label of the region as drawn in the preview
    pub label: usize,
    /// Field to replace
    pub field: RegionField,
    /// New value
    pub value: u32,
}

impl RegionEdit {
    /// Store id of the addressed region, `None` for label 0
    pub const fn region_id(&self) -> Option<usize> {
        self.label.checked_sub(1)
    }
}

/// Parses `LABEL:FIELD=VALUE`
impl FromStr for RegionEdit {
    type Err = StudioError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let malformed = || invalid_parameter("edit", &s, &"expected LABEL:FIELD=VALUE");

        let (label, assignment) = s.split_once(':').ok_or_else(malformed)?;
        let (field, value) = assignment.split_once('=').ok_or_else(malformed)?;

        Ok(Self {
            label: label
                .trim()
                .parse()
                .map_err(|e| invalid_parameter("edit", &s, &e))?,
            field: field.parse()?,
            value: value
                .trim()
                .parse()
                .map_err(|e| invalid_parameter("edit", &s, &e))?,
        })
    }
}

/// What a finished invocation produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Composite exported under the naming convention
    Exported(PathBuf),
    /// Composite written to the path given with `--run`
    Ran(PathBuf),
}

/// Runs one invocation of the command-line tool
pub struct StudioProcessor {
    cli: Cli,
}

impl StudioProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the session, apply regions and edits, then run or export
    ///
    /// # Errors
    ///
    /// Returns an error if any input cannot be read, an edit addresses an
    /// unknown label, or compositing or saving fails
    pub fn process(&self) -> Result<Outcome> {
        let mut studio = self.build_studio()?;

        for rect in &self.cli.regions {
            if studio.add_region(*rect).is_none() {
                log::warn!("skipping zero-area region {rect:?}");
            }
        }

        for edit in &self.cli.edits {
            let applied = edit
                .region_id()
                .is_some_and(|id| studio.update_region(id, edit.field, edit.value));
            if !applied {
                return Err(invalid_parameter(
                    "edit",
                    &edit.label,
                    &format!("no region labelled {}", edit.label),
                ));
            }
        }

        if let (Some(path), Some(frame)) = (&self.cli.preview, studio.preview()) {
            save_rgb(frame, path)?;
            log::info!("preview written to {}", path.display());
        }

        if let Some(path) = &self.cli.run {
            let composite = studio.run()?;
            save_rgb(&composite, path)?;
            Ok(Outcome::Ran(path.clone()))
        } else {
            studio.export().map(Outcome::Exported)
        }
    }

    fn build_studio(&self) -> Result<Studio> {
        let library = self
            .cli
            .seed
            .map_or_else(PatternLibrary::new, PatternLibrary::seeded);

        let mut pipeline = ExportPipeline::new();
        if let Some(dir) = &self.cli.output_dir {
            pipeline = pipeline.with_output_dir(dir);
        }
        if self.cli.should_show_progress() {
            pipeline = pipeline.with_progress(ProgressManager::new());
        }

        let mut studio = Studio::with_library(library).with_pipeline(pipeline);
        studio.open_base(&self.cli.base)?;
        studio.add_patterns(collect_pattern_files(&self.cli.patterns)?);
        log::debug!("{} pattern files registered", studio.patterns().len());

        Ok(studio)
    }
}
