#![allow(clippy::assertions_on_constants)]

#[cfg(test)]
mod fixtures {
    use crate::font_source::{ComponentRef, FontPoint, JsonOutlineSource, RawGlyph};
    use crate::geometry::BoundingBox;

    /// A square `o`, a round `c` made only of off-curve points, an `l` bar
    /// and a composite `odieresis`.
    pub fn outline_dump() -> JsonOutlineSource {
        let o = RawGlyph {
            name: "o".to_string(),
            bbox: Some(BoundingBox::new(0, 0, 500, 500)),
            codepoints: vec!['o'],
            contours: vec![vec![
                FontPoint::on(0, 0),
                FontPoint::on(500, 0),
                FontPoint::on(500, 500),
                FontPoint::on(0, 500),
            ]],
            components: Vec::new(),
        };
        let c = RawGlyph {
            name: "c".to_string(),
            bbox: None,
            codepoints: vec!['c'],
            contours: vec![vec![
                FontPoint::off(0, 0),
                FontPoint::off(400, 0),
                FontPoint::off(400, 400),
                FontPoint::off(0, 400),
            ]],
            components: Vec::new(),
        };
        let l = RawGlyph {
            name: "l".to_string(),
            bbox: Some(BoundingBox::new(0, 0, 100, 700)),
            codepoints: vec!['l'],
            contours: vec![vec![
                FontPoint::on(0, 0),
                FontPoint::on(100, 0),
                FontPoint::on(100, 700),
                FontPoint::on(0, 700),
            ]],
            components: Vec::new(),
        };
        let odieresis = RawGlyph {
            name: "odieresis".to_string(),
            bbox: None,
            codepoints: vec!['ö'],
            contours: Vec::new(),
            components: vec![ComponentRef {
                base: "o".to_string(),
                x_offset: 0,
                y_offset: 0,
            }],
        };
        JsonOutlineSource {
            units_per_em: Some(1000.0),
            glyphs: vec![o, c, l, odieresis],
        }
    }
}

#[cfg(test)]
mod alphabet_persistence_tests {
    use super::fixtures::outline_dump;
    use crate::alphabet::{Alphabet, LoadOptions};

    #[test]
    fn test_save_and_reload_is_lossless() {
        let (alphabet, report) = Alphabet::from_source(&outline_dump(), LoadOptions::default());
        assert!(report.issues.is_empty(), "fixture should load cleanly: {:?}", report.issues);
        assert_eq!(alphabet.len(), 4);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.alphabet.json");
        alphabet.save(&path).unwrap();
        let reloaded = Alphabet::load(&path).unwrap();

        assert_eq!(reloaded, alphabet);
        for glyph in alphabet.glyphs() {
            let other = reloaded.get_by_name(&glyph.name).unwrap();
            assert_eq!(other.contours(), glyph.contours(), "instructions of {}", glyph.name);
            assert_eq!(other.bbox(), glyph.bbox(), "box of {}", glyph.name);
        }
        assert_eq!(reloaded.lookup('ö').unwrap().name, "odieresis");
    }

    #[test]
    fn test_saved_alphabet_loads_through_runner() {
        let (alphabet, _) = Alphabet::from_source(&outline_dump(), LoadOptions::default());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.alphabet.json");
        alphabet.save(&path).unwrap();

        let settings = crate::core::config::LayoutSettings::default();
        let (loaded, _) = crate::core::runner::load_alphabet(&path, &settings).unwrap();
        assert_eq!(loaded, alphabet);
    }

    #[test]
    fn test_reload_of_corrupt_file_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.alphabet.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Alphabet::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse alphabet"));
    }
}

#[cfg(test)]
mod glyph_placement_tests {
    use super::fixtures::outline_dump;
    use crate::alphabet::{Alphabet, LoadOptions};
    use crate::geometry::PathInstruction;

    #[test]
    fn test_all_off_curve_contour_is_closed_curve() {
        let (alphabet, _) = Alphabet::from_source(&outline_dump(), LoadOptions::default());
        let c = alphabet.lookup('c').unwrap();
        let instructions = c.contours()[0].instructions();
        assert!(matches!(instructions.first(), Some(PathInstruction::MoveTo { .. })));
        assert_eq!(instructions.last(), Some(&PathInstruction::Close));
        assert_eq!(
            instructions.iter().filter(|i| i.command() == 'q').count(),
            4,
            "one curve per off-curve point"
        );
        assert_eq!(c.width(), 400);
    }

    #[test]
    fn test_repeated_moves_do_not_drift() {
        let (alphabet, _) = Alphabet::from_source(&outline_dump(), LoadOptions::default());
        let mut moved_twice = alphabet.instance('o').unwrap();
        moved_twice.move_to(100, 200);
        moved_twice.move_to(300, 50);

        let mut moved_once = alphabet.instance('o').unwrap();
        moved_once.move_to(300, 50);
        assert_eq!(moved_twice, moved_once);
    }

    #[test]
    fn test_instances_are_isolated() {
        let (alphabet, _) = Alphabet::from_source(&outline_dump(), LoadOptions::default());
        let mut first = alphabet.instance('l').unwrap();
        first.place_at(1_000, 1_000);
        first.set_stroke_width(180);
        first.set_color("rgb(1,2,3)");

        let second = alphabet.instance('l').unwrap();
        assert_eq!(&second, alphabet.lookup('l').unwrap());
        assert_ne!(second, first);
    }
}

#[cfg(test)]
mod ufo_tests {
    use crate::core::config::LayoutSettings;
    use crate::core::runner::load_alphabet;
    use crate::geometry::BoundingBox;

    fn on(x: f64, y: f64) -> norad::ContourPoint {
        norad::ContourPoint::new(x, y, norad::PointType::Line, false, None, None)
    }

    #[test]
    fn test_load_ufo_from_disk() {
        let mut font = norad::Font::new();
        font.font_info.units_per_em = norad::fontinfo::NonNegativeIntegerOrFloat::new(1000.0);

        let mut glyph = norad::Glyph::new("i");
        glyph.codepoints.insert('i');
        glyph.contours.push(norad::Contour::new(
            vec![on(50.0, 0.0), on(150.0, 0.0), on(150.0, 500.0), on(50.0, 500.0)],
            None,
        ));
        font.default_layer_mut().insert_glyph(glyph);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Test.ufo");
        font.save(&path).unwrap();

        let (alphabet, metrics) = load_alphabet(&path, &LayoutSettings::default()).unwrap();
        assert_eq!(metrics.units_per_em, 1000.0);
        let i = alphabet.lookup('i').unwrap();
        assert_eq!(i.bbox(), BoundingBox::new(50, -500, 150, 0), "measured and flipped");
        assert_eq!(i.contours()[0].path_data(), "M 50 0 l 100 0 l 0 -500 l -100 0 Z");
    }
}

#[cfg(test)]
mod layout_pipeline_tests {
    use super::fixtures::outline_dump;
    use crate::alphabet::Alphabet;
    use crate::core::config::LayoutSettings;
    use crate::io::{ImageSampler, SvgDocument};
    use crate::layout::{ColorMode, LayoutEngine};
    use image::{DynamicImage, Rgb, RgbImage};

    fn half_dark_page(settings: &LayoutSettings) -> ImageSampler {
        let (width, height) = settings.pixel_dimensions();
        let img = RgbImage::from_fn(width, height, |_, y| {
            if y < height / 2 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        ImageSampler::from_image(&DynamicImage::ImageRgb8(img), width, height, 1.0)
    }

    #[test]
    fn test_page_is_filled_and_weighted() {
        let settings = LayoutSettings::default();
        let (alphabet, _) = Alphabet::from_source(&outline_dump(), settings.load_options());
        let sampler = half_dark_page(&settings);
        let mut doc =
            SvgDocument::new(settings.page_width_mm, settings.page_height_mm, settings.scale);

        let stats = LayoutEngine::new(&alphabet, &settings).run("loco öl", &sampler, &mut doc);
        assert!(stats.rows > 0);
        assert_eq!(stats.glyphs_skipped, 0);
        assert_eq!(doc.path_count(), stats.glyphs_placed, "every fixture glyph has one contour");

        let svg = doc.render();
        assert!(svg.contains(r#"stroke-width="200""#), "dark half draws wide strokes");
        assert!(svg.contains(r#"stroke-width="50""#), "light half draws thin strokes");
    }

    #[test]
    fn test_short_text_repeats_until_page_is_full() {
        let settings = LayoutSettings::default();
        let (alphabet, _) = Alphabet::from_source(&outline_dump(), settings.load_options());
        let sampler = half_dark_page(&settings);
        let mut doc =
            SvgDocument::new(settings.page_width_mm, settings.page_height_mm, settings.scale);

        let stats = LayoutEngine::new(&alphabet, &settings).run("o", &sampler, &mut doc);
        assert_eq!(stats.rows, 92);
        assert_eq!(stats.glyphs_placed, 92, "one word per row when the text is one word");
    }

    #[test]
    fn test_color_mode_writes_sampled_colors() {
        let settings = LayoutSettings {
            mode: ColorMode::Color,
            ..Default::default()
        };
        let (alphabet, _) = Alphabet::from_source(&outline_dump(), settings.load_options());
        let sampler = half_dark_page(&settings);
        let mut doc =
            SvgDocument::new(settings.page_width_mm, settings.page_height_mm, settings.scale);

        LayoutEngine::new(&alphabet, &settings).run("lol", &sampler, &mut doc);
        let svg = doc.render();
        assert!(svg.contains(r#"stroke="rgb(0,0,0)""#));
        assert!(svg.contains(r#"stroke="rgb(255,255,255)""#));
    }
}
