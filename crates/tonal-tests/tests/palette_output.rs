//! Palette and scheme output shape

use serde_json::Value;
use tonal_core::scheme::{Mode, scheme};
use tonal_core::{
    Gamut, GamutClass, Hues, Palette, PaletteConfig, Quantization, contrast_matrix,
    peak_chroma_for_hues,
};

fn vivid_palette() -> Palette {
    let hues = Hues::new(200.0, 320.0);
    let config = PaletteConfig {
        swatch_step: 5.0,
        peak_lightness: 0.6,
        peak_chroma: peak_chroma_for_hues(0.6, &hues, Gamut::DisplayP3),
        hues,
    };
    Palette::generate(config, Quantization::default()).unwrap()
}

#[test]
fn test_palette_json_shape() {
    let palette = vivid_palette();
    let json = serde_json::to_value(&palette).unwrap();

    assert_eq!(json["config"]["swatch_step"], 5.0);
    let swatches = json["swatches"].as_array().unwrap();
    assert_eq!(swatches.len(), 21);

    let first = &swatches[0];
    assert_eq!(first["srgb_hex"], "000000");
    assert_eq!(first["gamut"], "sRGB");
    assert_eq!(first["oklch"], serde_json::json!({"l": 0.0, "c": 0.0, "h": 0.0}));

    let classes: Vec<&str> = swatches.iter().filter_map(|s| s["gamut"].as_str()).collect();
    assert!(classes.iter().all(|c| ["sRGB", "Display P3", "Out of Display P3"].contains(c)));
    assert!(classes.contains(&"Display P3"), "{classes:?}");
}

#[test]
fn test_palette_json_roundtrip() {
    let palette = vivid_palette();
    let text = serde_json::to_string_pretty(&palette).unwrap();
    let back: Palette = serde_json::from_str(&text).unwrap();
    assert_eq!(back, palette);
}

#[test]
fn test_peak_swatch_lands_on_p3_boundary() {
    let palette = vivid_palette();
    let peak = &palette.swatches[12];
    assert!((peak.oklch.l - 0.6).abs() < 1e-12);
    assert_eq!(peak.gamut, GamutClass::DisplayP3);
    assert_eq!(peak.p3_oklch, peak.oklch);
    assert!(peak.srgb_oklch.c < peak.oklch.c);
}

#[test]
fn test_hue_sweep_is_forward() {
    let palette = Palette::generate(
        PaletteConfig {
            swatch_step: 10.0,
            peak_lightness: 0.5,
            peak_chroma: 0.05,
            hues: Hues::new(300.0, 60.0),
        },
        Quantization::default(),
    )
    .unwrap();

    let hues: Vec<f64> = palette.swatches[1..10].iter().map(|s| s.oklch.h).collect();
    let unwrapped: Vec<f64> = hues.iter().map(|&h| if h < 300.0 { h + 360.0 } else { h }).collect();
    assert!(unwrapped.windows(2).all(|w| w[0] < w[1]), "{hues:?}");
    assert_eq!(hues[4], 0.0);
}

#[test]
fn test_contrast_matrix_json() {
    let palette = vivid_palette();
    let matrix = contrast_matrix(&palette, Gamut::DisplayP3);
    let json = serde_json::to_value(&matrix).unwrap();
    assert_eq!(json["gamut"], "Display P3");
    let rows = json["values"].as_array().unwrap();
    assert_eq!(rows.len(), palette.len());
    assert!(rows.iter().all(|r| r.as_array().map(Vec::len) == Some(palette.len())));
}

#[test]
fn test_scheme_json() {
    let colors = scheme(&Hues::single(250.0), Mode::Dark);
    let json: Value = serde_json::to_value(&colors).unwrap();
    let first = &json[0];
    assert_eq!(first["role"], "primary");
    assert_eq!(first["token"], "primary");
    assert!(first["swatch"]["srgb_hex"].as_str().is_some_and(|h| h.len() == 6));
}
