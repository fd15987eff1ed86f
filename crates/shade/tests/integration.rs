//! End-to-end behavior of palette application and mode resolution.

use serial_test::serial;
use shade::{
    change_colors, effective_color_mode, is_dark_scheme_preferred, relative_luminance,
    reset_scheme_detector, set_scheme_detector, ColorMode, CssVariables, Headless,
    ModePreference, PaletteBuilder, Platform, Rgb, StyleTarget, SystemPlatform, ThemeConfig,
    BASE_OVERLAY, DARK_OVERLAY, DARK_TARGETS, LIGHT_TARGETS,
};

const EXPECTED_NAMES: [&str; 8] = [
    "--colors-base",
    "--colors-ultra-low",
    "--colors-low",
    "--colors-high",
    "--colors-ultra-high",
    "--colors-top",
    "--colors-dark-overlay",
    "--colors-base-overlay",
];

/// A document root that remembers every write, including repeats.
#[derive(Default)]
struct Document {
    writes: Vec<(String, String)>,
}

impl StyleTarget for Document {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes.push((name.to_string(), value.to_string()));
    }
}

struct Browser {
    document: Option<Document>,
    dark: Option<bool>,
}

impl Platform for Browser {
    fn root_style(&mut self) -> Option<&mut dyn StyleTarget> {
        self.document.as_mut().map(|d| d as &mut dyn StyleTarget)
    }

    fn prefers_dark_scheme(&self) -> Option<bool> {
        self.dark
    }
}

fn palette(base: &str, is_dark: bool) -> Vec<(String, String)> {
    let mut browser = Browser {
        document: Some(Document::default()),
        dark: None,
    };
    change_colors(&mut browser, base, is_dark).unwrap();
    browser.document.unwrap().writes
}

fn suffix(value: &str) -> &str {
    &value[value.len() - 2..]
}

#[test]
fn dark_palette_writes_exactly_eight_properties() {
    let writes = palette("#3366cc", true);
    let names: Vec<_> = writes.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, EXPECTED_NAMES);
}

#[test]
fn overlay_suffixes_in_dark_mode() {
    let writes = palette("#3366cc", true);
    assert_eq!(suffix(&writes[6].1), "f3");
    assert_eq!(suffix(&writes[7].1), "b3");
}

#[test]
fn overlay_suffixes_in_light_mode() {
    let writes = palette("#3366cc", false);
    assert_eq!(writes[6].0, DARK_OVERLAY);
    assert_eq!(suffix(&writes[6].1), "b3");
    assert_eq!(writes[7].0, BASE_OVERLAY);
    assert_eq!(suffix(&writes[7].1), "f3");
}

#[test]
fn overlays_reuse_top_and_base_colors() {
    for is_dark in [true, false] {
        let writes = palette("tomato", is_dark);
        let top = &writes[5].1;
        let base = &writes[0].1;
        assert_eq!(&writes[6].1[..7], top.as_str());
        assert_eq!(&writes[7].1[..7], base.as_str());
    }
}

#[test]
fn palette_colors_track_target_luminance() {
    for (is_dark, targets) in [(true, DARK_TARGETS), (false, LIGHT_TARGETS)] {
        let writes = palette("gray", is_dark);
        for (target, (_, value)) in targets.iter().zip(&writes) {
            let lum = relative_luminance(Rgb::parse(value).unwrap());
            assert!(
                (lum - target.luminance).abs() < 0.01,
                "{} = {} has luminance {}, wanted {}",
                target.name,
                value,
                lum,
                target.luminance
            );
        }
    }
}

#[test]
fn no_document_means_no_writes() {
    let mut browser = Browser {
        document: None,
        dark: Some(true),
    };
    change_colors(&mut browser, "#3366cc", true).unwrap();
    assert!(browser.document.is_none());
    change_colors(&mut Headless, "#3366cc", false).unwrap();
}

#[test]
fn invalid_base_color_propagates() {
    let mut browser = Browser {
        document: Some(Document::default()),
        dark: None,
    };
    assert!(change_colors(&mut browser, "#nothex", true).is_err());
}

#[test]
fn repeated_application_overwrites() {
    let mut platform = SystemPlatform::with_root(CssVariables::new());
    change_colors(&mut platform, "#3366cc", true).unwrap();
    change_colors(&mut platform, "#3366cc", false).unwrap();

    let vars = platform.into_root().unwrap();
    let light = PaletteBuilder::new()
        .build("#3366cc", ColorMode::Light)
        .unwrap();
    assert_eq!(vars, light);
}

#[test]
fn effective_mode_explicit_and_system() {
    let dark = Browser {
        document: None,
        dark: Some(true),
    };
    let light = Browser {
        document: None,
        dark: Some(false),
    };
    let absent = Browser {
        document: None,
        dark: None,
    };

    assert_eq!(effective_color_mode(ModePreference::Light, &dark), ColorMode::Light);
    assert_eq!(effective_color_mode(ModePreference::Dark, &light), ColorMode::Dark);
    assert_eq!(effective_color_mode(ModePreference::System, &dark), ColorMode::Dark);
    assert_eq!(effective_color_mode(ModePreference::System, &light), ColorMode::Light);
    assert_eq!(effective_color_mode(ModePreference::System, &absent), ColorMode::Light);
    assert!(!is_dark_scheme_preferred(&absent));
}

#[test]
#[serial]
fn system_platform_resolves_through_detector() {
    let platform = SystemPlatform::new();

    set_scheme_detector(|| Some(ColorMode::Dark));
    assert_eq!(
        effective_color_mode(ModePreference::System, &platform),
        ColorMode::Dark
    );

    set_scheme_detector(|| None);
    assert_eq!(
        effective_color_mode(ModePreference::System, &platform),
        ColorMode::Light
    );

    reset_scheme_detector();
}

#[test]
fn config_drives_palette() {
    let config = ThemeConfig::from_yaml("base_color: '#3366cc'\nmode: dark\n").unwrap();
    let mode = effective_color_mode(config.mode, &Headless);
    let css = config
        .builder()
        .build(&config.base_color, mode)
        .unwrap()
        .to_css(&config.selector);

    assert!(css.starts_with(":root {\n"));
    for name in EXPECTED_NAMES {
        assert!(css.contains(&format!("  {}: #", name)), "missing {}", name);
    }
    assert!(css.ends_with("}\n"));
}
