//! Command line interface for letterart
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs before any file is opened.

use crate::core::config::LayoutSettings;
use crate::layout::ColorMode;
use clap::Parser;
use std::path::{Path, PathBuf};

/// letterart CLI arguments
///
/// Examples:
///   letterart --font MyFont.ufo --text poem.txt --image face.png
///   letterart --font MyFont.ufo --text poem.txt --image face.png --mode color -o out.svg
///   letterart --font MyFont.ufo --export-alphabet my.alphabet.json
///   letterart --font my.alphabet.json --specimen sheet.svg
///   letterart --new-config
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "letterart",
    version,
    about = "Typeset a text over an image, weighting each glyph by the pixel under it",
    long_about = "letterart lays a text out in justified rows that fill a page, repeating it as often as needed, and draws every glyph with a stroke width or color taken from the backing image. Output is an SVG document."
)]
pub struct CliArgs {
    /// Font to draw with
    #[clap(
        long = "font",
        short = 'f',
        help = "UFO directory, JSON point dump or saved alphabet",
        long_help = "Font to draw with. Accepts a UFO directory, a JSON point dump (.json) or an alphabet saved with --export-alphabet (.alphabet.json)."
    )]
    pub font: Option<PathBuf>,

    /// Text to lay out
    #[clap(long = "text", short = 't', help = "Plain text file to lay out")]
    pub text: Option<PathBuf>,

    /// Image that drives glyph weights
    #[clap(long = "image", short = 'i', help = "Image that drives stroke widths or colors")]
    pub image: Option<PathBuf>,

    #[clap(
        long = "output",
        short = 'o',
        default_value = "export.svg",
        help = "SVG file to write"
    )]
    pub output: PathBuf,

    #[clap(
        long = "config",
        short = 'c',
        help = "Layout settings file",
        long_help = "JSON layout settings file. Overrides ~/.config/letterart/settings.json; CLI flags override both."
    )]
    pub config: Option<PathBuf>,

    #[clap(long = "mode", short = 'm', value_enum, help = "How pixels weight glyphs")]
    pub mode: Option<ColorMode>,

    #[clap(long = "export-alphabet", help = "Save the built alphabet as JSON")]
    pub export_alphabet: Option<PathBuf>,

    #[clap(long = "specimen", help = "Write an SVG sheet showing every glyph")]
    pub specimen: Option<PathBuf>,

    /// Keep the font's Y-up orientation instead of flipping to page Y-down
    #[clap(long = "keep-orientation", help = "Do not flip glyphs into page orientation")]
    pub keep_orientation: bool,

    #[clap(long = "flip-vertical", help = "Mirror glyphs left to right")]
    pub flip_vertical: bool,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Initialize the ~/.config/letterart directory with a settings.json file holding the default layout settings, then exit."
    )]
    pub new_config: bool,

    #[clap(long = "verbose", short = 'v', help = "Log debug output")]
    pub verbose: bool,

    #[clap(long = "log-file", help = "Also write logs to ~/.config/letterart/logs/")]
    pub log_file: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that all paths exist and that the flags describe a
    /// complete job, with clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if self.new_config {
            return Ok(());
        }

        let font = self.font.as_ref().ok_or_else(|| {
            "No font given.\nPass a UFO directory or JSON file with --font.".to_string()
        })?;
        if !font.exists() {
            return Err(format!(
                "Font source does not exist: {}\nMake sure the path is correct and the file exists.",
                font.display()
            ));
        }
        if font.is_dir() && !font.join("metainfo.plist").exists() {
            return Err(format!(
                "Not a valid UFO directory: missing metainfo.plist in {}\nMake sure this is a valid UFO directory.",
                font.display()
            ));
        }
        if font.is_file() && !is_json(font) {
            return Err(format!(
                "Unsupported font file: {}\nOnly UFO directories and .json files are supported.",
                font.display()
            ));
        }

        if !self.wants_layout() {
            return Ok(());
        }
        for (flag, path) in [("--text", &self.text), ("--image", &self.image)] {
            match path {
                None => return Err(format!("{flag} is required to lay out a page")),
                Some(path) if !path.is_file() => {
                    return Err(format!("File given to {flag} does not exist: {}", path.display()))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// A page layout runs unless the call only exports or prints a specimen
    pub fn wants_layout(&self) -> bool {
        let only_tools = self.export_alphabet.is_some() || self.specimen.is_some();
        !only_tools || self.text.is_some() || self.image.is_some()
    }

    /// Apply flags that override settings values
    pub fn apply_to(&self, settings: &mut LayoutSettings) {
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if self.keep_orientation {
            settings.flip_horizontal = false;
        }
        if self.flip_vertical {
            settings.flip_vertical = true;
        }
    }
}

/// `true` for `.json` files, which includes saved `.alphabet.json` alphabets
pub fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// `true` for alphabets written by `--export-alphabet`
pub fn is_saved_alphabet(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(".alphabet.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_command_line() {
        let args = CliArgs::try_parse_from([
            "letterart",
            "--font",
            "a.json",
            "--text",
            "t.txt",
            "--image",
            "i.png",
            "--mode",
            "grayscale",
            "--keep-orientation",
        ])
        .unwrap();
        assert_eq!(args.mode, Some(ColorMode::Grayscale));
        assert_eq!(args.output, PathBuf::from("export.svg"));

        let mut settings = LayoutSettings::default();
        args.apply_to(&mut settings);
        assert_eq!(settings.mode, ColorMode::Grayscale);
        assert!(!settings.flip_horizontal);
        assert!(!settings.flip_vertical);
    }

    #[test]
    fn test_missing_font_is_rejected() {
        let args = CliArgs::try_parse_from(["letterart"]).unwrap();
        assert!(args.validate().unwrap_err().contains("No font"));
        let args = CliArgs::try_parse_from(["letterart", "--new-config"]).unwrap();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_layout_needs_text_and_image() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("font.json");
        std::fs::write(&font, "{\"glyphs\": []}").unwrap();

        let font_arg = font.to_str().unwrap();
        let args = CliArgs::try_parse_from(["letterart", "--font", font_arg]).unwrap();
        assert!(args.validate().unwrap_err().contains("--text"));

        let args =
            CliArgs::try_parse_from(["letterart", "--font", font_arg, "--specimen", "s.svg"])
                .unwrap();
        assert!(!args.wants_layout());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_saved_alphabet_detection() {
        assert!(is_saved_alphabet(Path::new("dir/Font.alphabet.json")));
        assert!(!is_saved_alphabet(Path::new("dir/points.json")));
        assert!(is_json(Path::new("dir/points.JSON")));
    }
}
