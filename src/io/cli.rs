//! Command-line interface for single-file and batch compositing
//!
//! In single-file mode the mask is given explicitly with `--mask`; in batch
//! mode (a directory target) each `foo.png` is paired with a companion
//! `foo_mask.png` alongside it and files without one are skipped.

use crate::algorithm::composite;
use crate::io::configuration::{DEFAULT_MARKER, LUMA_MAP_SUFFIX, MASK_SUFFIX, OUTPUT_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_grid, load_grid};
use crate::io::progress::ProgressManager;
use crate::spatial::Pixel;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Parse an `R,G,B` color argument
///
/// # Errors
///
/// Returns a message when the value is not three comma-separated integers
/// in 0..=255.
fn parse_color(value: &str) -> std::result::Result<Pixel, String> {
    let components: Vec<&str> = value.split(',').collect();
    if components.len() != 3 {
        return Err(format!("expected R,G,B, got '{value}'"));
    }

    let mut pixel = [0u8; 3];
    for (slot, component) in pixel.iter_mut().zip(&components) {
        *slot = component
            .trim()
            .parse::<u8>()
            .map_err(|e| format!("invalid channel '{component}': {e}"))?;
    }
    Ok(pixel)
}

fn default_marker() -> String {
    format!(
        "{},{},{}",
        DEFAULT_MARKER[0], DEFAULT_MARKER[1], DEFAULT_MARKER[2]
    )
}

#[derive(Parser)]
#[command(name = "maskfill")]
#[command(
    author,
    version,
    about = "Fill marker-colored pixels from a mask image, following its luminosity"
)]
/// Command-line arguments for the compositing tool
// Independent CLI flags, not a state machine
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Mask image (single-file mode; batch mode pairs <name>_mask.png)
    #[arg(short = 'k', long)]
    pub mask: Option<PathBuf>,

    /// Output path (single-file mode; defaults to <name>_filled.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Marker color identifying destination pixels, as R,G,B
    #[arg(long, default_value_t = default_marker(), value_name = "R,G,B")]
    pub marker: String,

    /// Propagate fills along monotonic luminosity trends in the mask
    #[arg(short, long)]
    pub follow_luminosity: bool,

    /// Rewrite one source color to another before compositing
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"], value_parser = parse_color)]
    pub remap: Option<Vec<Pixel>>,

    /// Also export the mask's luminosity map as <name>_luma.png
    #[arg(short, long)]
    pub luma_map: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Parse the marker color argument
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error when the value is not `R,G,B`.
    pub fn marker_color(&self) -> Result<Pixel> {
        parse_color(&self.marker)
            .map_err(|reason| invalid_parameter("marker", &self.marker, &reason))
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, image decoding, compositing,
    /// or export fails.
    pub fn process(&mut self) -> Result<()> {
        let marker = self.cli.marker_color()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            Self::process_file(&self.cli, self.progress_manager.as_mut(), file, marker)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && !Self::is_companion_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    // Masks, previous outputs, and luminosity maps never become sources
    fn is_companion_file(path: &Path) -> bool {
        let stem = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        stem.ends_with(MASK_SUFFIX)
            || stem.ends_with(OUTPUT_SUFFIX)
            || stem.ends_with(LUMA_MAP_SUFFIX)
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback for missing mask files
    #[allow(clippy::print_stderr)]
    fn process_file(
        cli: &Cli,
        mut progress: Option<&mut ProgressManager>,
        input_path: &Path,
        marker: Pixel,
    ) -> Result<()> {
        let mask_path = cli
            .mask
            .clone()
            .unwrap_or_else(|| Self::with_suffix(input_path, MASK_SUFFIX));

        if !mask_path.exists() {
            if !cli.quiet {
                eprintln!(
                    "No mask found at: {} (skipping {})",
                    mask_path.display(),
                    input_path.display()
                );
            }
            return Ok(());
        }

        if let Some(ref mut pm) = progress {
            pm.start_file(input_path);
        }

        let mut source = load_grid(input_path)?;
        let mask = load_grid(&mask_path)?;

        if let Some(remap) = cli.remap.as_deref() {
            if let [from, to] = remap {
                source.replace_color(*from, *to);
            }
        }

        let output = composite(&source, &mask, marker, cli.follow_luminosity)?;
        let output_path = cli
            .output
            .clone()
            .unwrap_or_else(|| Self::with_suffix(input_path, OUTPUT_SUFFIX));
        export_grid(&output, output_path)?;

        if cli.luma_map {
            export_grid(&mask.luminosity_map(), Self::with_suffix(input_path, LUMA_MAP_SUFFIX))?;
        }

        if let Some(ref mut pm) = progress {
            pm.complete_file();
        }

        Ok(())
    }

    fn output_path(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| Self::with_suffix(input_path, OUTPUT_SUFFIX))
    }

    fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        path.with_file_name(format!("{stem}{suffix}.png"))
    }
}
