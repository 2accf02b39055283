//! Application runner logic
//!
//! Turns validated arguments into a complete job: resolve settings, build
//! the alphabet, then export, print a specimen or lay out a page.

use crate::alphabet::Alphabet;
use crate::core::cli::{is_json, is_saved_alphabet, CliArgs};
use crate::core::config::{ConfigFile, LayoutSettings};
use crate::font_source::{FontMetrics, JsonOutlineSource, OutlineSource, UfoSource};
use crate::io::{ImageSampler, SvgDocument};
use crate::layout::{specimen_sheet, LayoutEngine};
use crate::logging;
use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Create and run a job with the given CLI arguments.
/// Handles special CLI flags and delegates to the individual steps.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    cli_args.validate().map_err(|e| anyhow!(e))?;
    let _log_guard = logging::init(cli_args.verbose, cli_args.log_file)?;

    let settings = resolve_settings(&cli_args)?;
    let font = cli_args.font.as_deref().ok_or_else(|| anyhow!("No font given"))?;
    let (alphabet, metrics) = load_alphabet(font, &settings)?;
    if alphabet.is_empty() {
        bail!("No drawable glyphs in {}", font.display());
    }

    if let Some(path) = &cli_args.export_alphabet {
        alphabet.save(path)?;
    }
    if let Some(path) = &cli_args.specimen {
        specimen_sheet(&alphabet, &metrics, &settings).write(path)?;
    }
    if cli_args.wants_layout() {
        let text = cli_args.text.as_deref().ok_or_else(|| anyhow!("No text given"))?;
        let image = cli_args.image.as_deref().ok_or_else(|| anyhow!("No image given"))?;
        render_page(&alphabet, &settings, text, image, &cli_args.output)?;
    }
    Ok(())
}

/// Defaults, then the user settings file, then `--config`, then CLI flags
pub fn resolve_settings(cli_args: &CliArgs) -> Result<LayoutSettings> {
    let mut settings = ConfigFile::load().unwrap_or_default();
    if let Some(path) = &cli_args.config {
        settings = LayoutSettings::load(path)?;
    }
    cli_args.apply_to(&mut settings);
    settings.validate().context("Invalid layout settings")?;
    debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}

/// Build an alphabet from a UFO, a point dump or a saved alphabet
pub fn load_alphabet(font: &Path, settings: &LayoutSettings) -> Result<(Alphabet, FontMetrics)> {
    if is_saved_alphabet(font) {
        return Ok((Alphabet::load(font)?, FontMetrics::default()));
    }

    let source: Box<dyn OutlineSource> = if is_json(font) {
        Box::new(JsonOutlineSource::load(font)?)
    } else {
        Box::new(UfoSource::load(font)?)
    };

    let metrics = source.metrics().unwrap_or_default();
    info!(
        "Font metrics: {} units per em, ascender {}, descender {}, x-height {:?}",
        metrics.units_per_em, metrics.ascender, metrics.descender, metrics.x_height
    );

    let (alphabet, _report) = Alphabet::from_source(source.as_ref(), settings.load_options());
    Ok((alphabet, metrics))
}

/// Lay `text_path` out over `image_path` and write the SVG to `output`
pub fn render_page(
    alphabet: &Alphabet,
    settings: &LayoutSettings,
    text_path: &Path,
    image_path: &Path,
    output: &Path,
) -> Result<()> {
    let text = fs::read_to_string(text_path)
        .with_context(|| format!("Failed to read text {}", text_path.display()))?;
    let (width, height) = settings.pixel_dimensions();
    let sampler = ImageSampler::open(image_path, width, height, settings.contrast)?;

    let mut doc = SvgDocument::new(settings.page_width_mm, settings.page_height_mm, settings.scale);
    let stats = LayoutEngine::new(alphabet, settings).run(&text, &sampler, &mut doc);
    info!(
        "Rows: {}, glyphs placed: {}, glyphs skipped: {}, overflowing lines: {}",
        stats.rows, stats.glyphs_placed, stats.glyphs_skipped, stats.overflow_lines
    );

    doc.write(output)
}
