//! End-to-end generation tests

#[cfg(test)]
mod generation_tests {
    use crate::alphabet::{generate, AlphabetGenerator};
    use crate::core::settings::Settings;
    use crate::expansion::StrokeExpander;
    use crate::geometry::{signed_area, BoundingBox};
    use crate::skeleton::{GLYPH_COUNT, TEMPLATES};
    use crate::style::{get_preset, list_presets, AlphabetStyle, CapStyle, OverrideValue};
    use crate::validation::{feature_vector, validate_glyph, ValidationIssue};

    #[test]
    fn test_generate_26_labeled_glyphs() {
        let alphabet = generate(42).unwrap();
        assert_eq!(alphabet.len(), GLYPH_COUNT);
        let labels: String = alphabet.iter().map(|g| g.label).collect();
        assert_eq!(labels, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        for (i, glyph) in alphabet.iter().enumerate() {
            assert_eq!(glyph.index, i);
            assert_eq!(glyph.template_name, glyph.skeleton.template_name);
        }
    }

    #[test]
    fn test_same_seed_reproduces_outlines() {
        let a = generate(12345).unwrap();
        let b = generate(12345).unwrap();
        for (g1, g2) in a.iter().zip(&b) {
            assert_eq!(g1.template_name, g2.template_name);
            assert_eq!(g1.outline.len(), g2.outline.len(), "glyph {}", g1.label);
            for (p1, p2) in g1.outline.polygons.iter().zip(&g2.outline.polygons) {
                assert_eq!(p1.len(), p2.len());
                for (q1, q2) in p1.iter().zip(p2) {
                    assert!((q1.x - q2.x).abs() < 1e-10 && (q1.y - q2.y).abs() < 1e-10);
                }
            }
        }
    }

    #[test]
    fn test_different_seeds_pick_different_templates() {
        let a = generate(1).unwrap();
        let b = generate(2).unwrap();
        let differing = a
            .iter()
            .zip(&b)
            .filter(|(g1, g2)| g1.template_name != g2.template_name)
            .count();
        assert!(differing > 0, "seeds 1 and 2 chose identical templates");
    }

    #[test]
    fn test_every_glyph_has_an_outline_across_seeds() {
        for seed in [1, 42, 100, 999, 12345] {
            let alphabet = generate(seed).unwrap();
            for glyph in &alphabet {
                assert!(
                    !glyph.outline.is_empty(),
                    "seed {seed}, glyph {} ({}) is empty",
                    glyph.label,
                    glyph.template_name
                );
            }
        }
    }

    #[test]
    fn test_every_preset_fills_every_glyph() {
        let settings = Settings::default();
        for name in list_presets() {
            let alphabet = AlphabetGenerator::new(42, &settings)
                .with_preset(Some(name.as_str()))
                .generate()
                .unwrap();
            assert_eq!(alphabet.len(), GLYPH_COUNT);
            for glyph in &alphabet {
                assert!(
                    !glyph.outline.is_empty(),
                    "preset {name}, glyph {} is empty",
                    glyph.label
                );
            }
        }
    }

    #[test]
    fn test_outlines_are_clean_for_every_preset() {
        let settings = Settings::default();
        for name in list_presets() {
            for seed in 1..=5 {
                let alphabet = AlphabetGenerator::new(seed, &settings)
                    .with_preset(Some(name.as_str()))
                    .generate()
                    .unwrap();
                let expander = StrokeExpander::new(&alphabet.style);
                let min_area = expander.min_contour_area();
                for glyph in &alphabet {
                    let at = format!("{name} seed {seed} glyph {}", glyph.label);
                    for polygon in &glyph.outline.polygons {
                        assert!(signed_area(polygon).abs() >= min_area, "sliver in {at}");
                    }
                    // every segment midpoint of the centre line is ink
                    for stroke in &glyph.skeleton.strokes {
                        let polyline = expander.stroke_polyline(stroke);
                        for w in polyline.windows(2).filter(|w| w[0].distance(w[1]) > 1e-9) {
                            let mid = w[0].midpoint(w[1]);
                            assert!(glyph.outline.contains(mid), "{at}: {mid:?} uninked");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_override_sets_only_that_field() {
        let settings = Settings::default();
        let base = AlphabetGenerator::new(42, &settings).generate().unwrap();
        let overridden = AlphabetGenerator::new(42, &settings)
            .with_overrides(vec![("stroke_width".to_string(), 0.2.into())])
            .generate()
            .unwrap();
        assert_eq!(overridden.style.stroke_width, 0.2);
        let expected = AlphabetStyle {
            stroke_width: 0.2,
            ..base.style.clone()
        };
        assert_eq!(overridden.style, expected);
    }

    #[test]
    fn test_text_override_on_preset() {
        let settings = Settings::default();
        let alphabet = AlphabetGenerator::new(5, &settings)
            .with_preset(Some("flowing"))
            .with_overrides(vec![(
                "cap_style".to_string(),
                OverrideValue::Text("flat".to_string()),
            )])
            .generate()
            .unwrap();
        assert_eq!(alphabet.style.cap_style, CapStyle::Flat);
        let preset = get_preset("flowing").unwrap();
        assert_eq!(alphabet.style.stroke_width, preset.stroke_width);
    }

    #[test]
    fn test_catalog_is_large_enough() {
        assert!(TEMPLATES.len() >= GLYPH_COUNT);
    }

    #[test]
    fn test_reports_match_revalidation() {
        let alphabet = generate(42).unwrap();
        let style = &alphabet.style;
        let reference = BoundingBox::new(0.0, 0.0, style.glyph_width, style.glyph_height());
        let settings = Settings::default();
        for (glyph, report) in alphabet.iter().zip(&alphabet.reports) {
            let again = validate_glyph(glyph, &reference, &settings.validation);
            assert_eq!(&again, report);
            assert!(!report.issues.contains(&ValidationIssue::EmptyOutline));
            let features = feature_vector(glyph);
            assert!(features.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_similar_pairs_are_ordered() {
        let alphabet = generate(42).unwrap();
        for pair in &alphabet.similar_pairs {
            assert!(pair.first < pair.second);
            assert!(pair.second < GLYPH_COUNT);
            assert!(pair.distance < Settings::default().validation.min_distinctiveness);
        }
    }
}

#[cfg(test)]
mod export_tests {
    use crate::alphabet::generate;
    use crate::core::settings::Settings;
    use crate::export::{export_individual, export_sheet};
    use std::fs;

    #[test]
    fn test_individual_export_writes_26_files() {
        let alphabet = generate(42).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let paths = export_individual(&alphabet, dir.path(), &Settings::default().export).unwrap();
        assert_eq!(paths.len(), 26);
        assert!(paths[0].ends_with("glyph_a.svg"));
        for path in &paths {
            let svg = fs::read_to_string(path).unwrap();
            assert!(svg.contains("<svg"), "{}", path.display());
            assert!(svg.contains("<path"), "{}", path.display());
        }
    }

    #[test]
    fn test_sheet_export() {
        let alphabet = generate(42).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.svg");
        export_sheet(&alphabet, &path, &Settings::default().export).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Seed: 42"));
        assert!(!svg.contains("Preset:"));
        assert_eq!(svg.matches("<path").count(), 26);
        for label in 'A'..='Z' {
            assert!(svg.contains(&format!(">{label}</text>")), "label {label}");
        }
    }
}
