//! End-to-end tests over real files: decode, composite, export, batch
//! pairing, and CLI argument parsing

use clap::Parser;
use maskfill::io::cli::{Cli, FileProcessor};
use maskfill::io::image::{export_grid, load_grid};
use maskfill::spatial::PixelGrid;
use std::path::Path;

const MARKER: [u8; 3] = [255, 255, 255];

fn write_png(dir: &Path, name: &str, grid: &PixelGrid) {
    if let Err(e) = export_grid(grid, dir.join(name)) {
        unreachable!("failed to write fixture {name}: {e}");
    }
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

fn cli_for(args: &[&str]) -> Cli {
    match Cli::try_parse_from(args.iter().copied()) {
        Ok(cli) => cli,
        Err(e) => unreachable!("CLI args must parse: {e}"),
    }
}

#[test]
fn test_png_round_trip_preserves_pixels() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir creation");
    };

    let grid = PixelGrid::from_rows(&[
        vec![[255, 0, 0], [0, 255, 0]],
        vec![[0, 0, 255], [128, 128, 128]],
    ]);
    write_png(dir.path(), "pixels.png", &grid);

    match load_grid(dir.path().join("pixels.png")) {
        Ok(decoded) => assert_eq!(decoded, grid),
        Err(e) => unreachable!("decode must succeed: {e}"),
    }
}

#[test]
fn test_load_missing_file_reports_image_load_error() {
    let result = load_grid("definitely/not/a/file.png");
    match result {
        Err(maskfill::CompositeError::ImageLoad { path, .. }) => {
            assert!(path.ends_with("file.png"));
        }
        _ => unreachable!("missing file must fail to load"),
    }
}

#[test]
fn test_single_file_processing_writes_filled_output() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir creation");
    };

    // All-non-marker source: the pass is a pure copy of the mask
    let source = PixelGrid::filled(4, 4, [10, 20, 30]);
    let mask = PixelGrid::filled(4, 4, [70, 70, 70]);
    write_png(dir.path(), "photo.png", &source);
    write_png(dir.path(), "photo_mask.png", &mask);

    let target = path_arg(&dir.path().join("photo.png"));
    let cli = cli_for(&["maskfill", "--quiet", &target]);
    let mut processor = FileProcessor::new(cli);
    if let Err(e) = processor.process() {
        unreachable!("processing must succeed: {e}");
    }

    match load_grid(dir.path().join("photo_filled.png")) {
        Ok(output) => assert_eq!(output, mask),
        Err(e) => unreachable!("output must exist: {e}"),
    }
}

#[test]
fn test_batch_mode_skips_companions_and_missing_masks() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir creation");
    };

    let source = PixelGrid::filled(2, 2, [10, 20, 30]);
    let mask = PixelGrid::filled(2, 2, [70, 70, 70]);
    write_png(dir.path(), "a.png", &source);
    write_png(dir.path(), "a_mask.png", &mask);
    // No companion mask: must be skipped without failing the batch
    write_png(dir.path(), "b.png", &source);

    let target = path_arg(dir.path());
    let cli = cli_for(&["maskfill", "--quiet", &target]);
    let mut processor = FileProcessor::new(cli);
    if let Err(e) = processor.process() {
        unreachable!("batch must succeed: {e}");
    }

    assert!(dir.path().join("a_filled.png").exists());
    assert!(!dir.path().join("b_filled.png").exists());
    // The mask itself must not be treated as a source
    assert!(!dir.path().join("a_mask_filled.png").exists());
}

#[test]
fn test_existing_output_is_skipped_unless_no_skip() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir creation");
    };

    let source = PixelGrid::filled(2, 2, [10, 20, 30]);
    let mask = PixelGrid::filled(2, 2, [70, 70, 70]);
    let stale = PixelGrid::filled(2, 2, [1, 1, 1]);
    write_png(dir.path(), "c.png", &source);
    write_png(dir.path(), "c_mask.png", &mask);
    write_png(dir.path(), "c_filled.png", &stale);

    let target = path_arg(&dir.path().join("c.png"));
    let mut skipping = FileProcessor::new(cli_for(&["maskfill", "--quiet", &target]));
    if let Err(e) = skipping.process() {
        unreachable!("processing must succeed: {e}");
    }
    match load_grid(dir.path().join("c_filled.png")) {
        Ok(output) => assert_eq!(output, stale, "existing output must be kept"),
        Err(e) => unreachable!("output must exist: {e}"),
    }

    let mut overwriting =
        FileProcessor::new(cli_for(&["maskfill", "--quiet", "--no-skip", &target]));
    if let Err(e) = overwriting.process() {
        unreachable!("processing must succeed: {e}");
    }
    match load_grid(dir.path().join("c_filled.png")) {
        Ok(output) => assert_eq!(output, mask, "output must be regenerated"),
        Err(e) => unreachable!("output must exist: {e}"),
    }
}

#[test]
fn test_remap_rewrites_hole_color_before_compositing() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir creation");
    };

    // Holes are magenta in the file; remapping them to the marker makes
    // them eligible, and with following disabled they stay untouched while
    // everything else copies from the mask
    let source = PixelGrid::from_rows(&[
        vec![[255, 0, 255], [10, 20, 30]],
        vec![[10, 20, 30], [255, 0, 255]],
    ]);
    let mask = PixelGrid::filled(2, 2, [70, 70, 70]);
    write_png(dir.path(), "d.png", &source);
    write_png(dir.path(), "d_mask.png", &mask);

    let target = path_arg(&dir.path().join("d.png"));
    let cli = cli_for(&[
        "maskfill",
        "--quiet",
        "--remap",
        "255,0,255",
        "255,255,255",
        &target,
    ]);
    let mut processor = FileProcessor::new(cli);
    if let Err(e) = processor.process() {
        unreachable!("processing must succeed: {e}");
    }

    match load_grid(dir.path().join("d_filled.png")) {
        Ok(output) => {
            assert_eq!(output.get(0, 0), Some(MARKER));
            assert_eq!(output.get(1, 1), Some(MARKER));
            assert_eq!(output.get(1, 0), Some([70, 70, 70]));
            assert_eq!(output.get(0, 1), Some([70, 70, 70]));
        }
        Err(e) => unreachable!("output must exist: {e}"),
    }
}

#[test]
fn test_luma_map_export() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("tempdir creation");
    };

    let source = PixelGrid::filled(2, 2, [10, 20, 30]);
    let mask = PixelGrid::from_rows(&[
        vec![[0, 0, 0], [255, 255, 255]],
        vec![[255, 0, 0], [0, 255, 0]],
    ]);
    write_png(dir.path(), "e.png", &source);
    write_png(dir.path(), "e_mask.png", &mask);

    let target = path_arg(&dir.path().join("e.png"));
    let cli = cli_for(&["maskfill", "--quiet", "--luma-map", &target]);
    let mut processor = FileProcessor::new(cli);
    if let Err(e) = processor.process() {
        unreachable!("processing must succeed: {e}");
    }

    match load_grid(dir.path().join("e_luma.png")) {
        Ok(map) => {
            assert_eq!(map.get(0, 0), Some([0, 0, 0]));
            // The BT.709 weights sum to just under 1, so white truncates
            // to 254 rather than rounding up
            assert_eq!(map.get(1, 0), Some([254, 254, 254]));
            // 0.2126 * 255 truncates to 54
            assert_eq!(map.get(0, 1), Some([54, 54, 54]));
        }
        Err(e) => unreachable!("luma map must exist: {e}"),
    }
}

#[test]
fn test_cli_rejects_malformed_marker() {
    let cli = cli_for(&["maskfill", "--marker", "purple", "input.png"]);
    assert!(cli.marker_color().is_err());
}

#[test]
fn test_cli_defaults() {
    let cli = cli_for(&["maskfill", "input.png"]);

    assert_eq!(cli.marker_color().ok(), Some([255, 255, 255]));
    assert!(!cli.follow_luminosity);
    assert!(cli.skip_existing());
    assert!(cli.should_show_progress());
}
