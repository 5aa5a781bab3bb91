//! Theme schemes
//!
//! A scheme resolves named UI tokens (`primary`, `onPrimaryContainer`,
//! `surface`, `outline`, ...) to colors. Each [`ThemeRole`] owns a tonal
//! ramp described by a [`RoleConfig`]; each token picks a lightness on
//! its role's ramp, one for light mode and one for dark mode.
//!
//! Dynamic roles follow the seed hue range; static roles (error, warning)
//! keep a fixed hue whatever the seed.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::{Oklch, normalize_hue};
use crate::error::Result;
use crate::math::quantize;
use crate::palette::{
    CHROMA_STEP, HUE_STEP, Hues, LIGHTNESS_STEP, PaletteConfig, Swatch, chroma_for_lightness,
    hue_for_lightness,
};

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

/// Lightness of one token in each mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenLightness {
    /// camelCase token name; `name` stands for the role name
    pub name: &'static str,
    pub light: f64,
    pub dark: f64,
}

impl TokenLightness {
    const fn new(name: &'static str, light: f64, dark: f64) -> Self {
        Self { name, light, dark }
    }

    pub fn get(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Light => self.light,
            Mode::Dark => self.dark,
        }
    }
}

/// Tokens shared by the accent roles
pub static VIVIDS: [TokenLightness; 8] = [
    TokenLightness::new("name", 0.51, 0.89),
    TokenLightness::new("onName", 1.0, 0.18),
    TokenLightness::new("onNameVariant", 0.91, 0.45),
    TokenLightness::new("nameContainer", 0.91, 0.48),
    TokenLightness::new("onNameContainer", 0.26, 0.98),
    TokenLightness::new("onNameContainerVariant", 0.48, 0.89),
    TokenLightness::new("inverseName", 0.47, 0.89),
    TokenLightness::new("onInverseName", 0.98, 0.18),
];

/// Surface tokens
pub static NEUTRALS: [TokenLightness; 9] = [
    TokenLightness::new("surfaceContainerLowest", 1.0, 0.29),
    TokenLightness::new("surface", 0.99, 0.31),
    TokenLightness::new("surfaceContainerLow", 0.97, 0.34),
    TokenLightness::new("surfaceContainer", 0.95, 0.38),
    TokenLightness::new("surfaceContainerHigh", 0.93, 0.43),
    TokenLightness::new("surfaceContainerHighest", 0.91, 0.48),
    TokenLightness::new("onSurface", 0.26, 0.99),
    TokenLightness::new("inverseSurface", 0.3, 0.98),
    TokenLightness::new("onInverseSurface", 0.94, 0.37),
];

/// Outline and surface-variant tokens
pub static NEUTRAL_VARIANTS: [TokenLightness; 4] = [
    TokenLightness::new("surfaceVariant", 0.91, 0.48),
    TokenLightness::new("onSurfaceVariant", 0.44, 0.92),
    TokenLightness::new("outline", 0.6, 0.82),
    TokenLightness::new("outlineVariant", 0.82, 0.6),
];

const PEAK_LIGHTNESS: f64 = 0.6;
const PEAK_CHROMA: f64 = 0.13;

/// Tonal ramp parameters for a role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleConfig {
    pub peak_chroma: f64,
    /// Scales the chroma profile after it is evaluated
    pub peak_chroma_mult: f64,
    pub peak_lightness: f64,
    /// Fixed hue; `None` follows the seed hues
    pub static_hue: Option<f64>,
    /// Degrees added to every hue of the role
    pub hue_shift: f64,
}

impl RoleConfig {
    const fn dynamic(peak_chroma: f64) -> Self {
        Self {
            peak_chroma,
            peak_chroma_mult: 1.0,
            peak_lightness: PEAK_LIGHTNESS,
            static_hue: None,
            hue_shift: 0.0,
        }
    }

    const fn fixed(hue: f64, peak_lightness: f64, peak_chroma: f64) -> Self {
        Self {
            peak_chroma,
            peak_chroma_mult: 1.0,
            peak_lightness,
            static_hue: Some(hue),
            hue_shift: 0.0,
        }
    }

    /// Hue of this role at lightness `l`
    pub fn hue_at(&self, l: f64, hues: &Hues) -> f64 {
        let base = self.static_hue.unwrap_or_else(|| hue_for_lightness(l, hues));
        normalize_hue(base + self.hue_shift)
    }

    /// Chroma of this role at lightness `l`, before quantization
    pub fn chroma_at(&self, l: f64) -> f64 {
        chroma_for_lightness(l, self.peak_lightness, self.peak_chroma) * self.peak_chroma_mult
    }
}

/// Color roles of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeRole {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
    Error,
    Warning,
}

impl ThemeRole {
    pub const ALL: [ThemeRole; 7] = [
        ThemeRole::Primary,
        ThemeRole::Secondary,
        ThemeRole::Tertiary,
        ThemeRole::Neutral,
        ThemeRole::NeutralVariant,
        ThemeRole::Error,
        ThemeRole::Warning,
    ];

    /// camelCase role name
    pub const fn name(&self) -> &'static str {
        match self {
            ThemeRole::Primary => "primary",
            ThemeRole::Secondary => "secondary",
            ThemeRole::Tertiary => "tertiary",
            ThemeRole::Neutral => "neutral",
            ThemeRole::NeutralVariant => "neutralVariant",
            ThemeRole::Error => "error",
            ThemeRole::Warning => "warning",
        }
    }

    pub const fn config(&self) -> RoleConfig {
        match self {
            ThemeRole::Primary => RoleConfig::dynamic(PEAK_CHROMA),
            ThemeRole::Secondary => RoleConfig {
                peak_chroma_mult: 0.25,
                ..RoleConfig::dynamic(PEAK_CHROMA)
            },
            ThemeRole::Tertiary => RoleConfig {
                hue_shift: 120.0,
                ..RoleConfig::dynamic(PEAK_CHROMA)
            },
            ThemeRole::Neutral => RoleConfig::dynamic(0.005),
            ThemeRole::NeutralVariant => RoleConfig::dynamic(0.01),
            ThemeRole::Error => RoleConfig::fixed(29.0, 0.65, 0.297),
            ThemeRole::Warning => RoleConfig::fixed(90.0, 0.87, 0.205),
        }
    }

    /// Tokens this role resolves
    pub fn tokens(&self) -> &'static [TokenLightness] {
        match self {
            ThemeRole::Neutral => &NEUTRALS,
            ThemeRole::NeutralVariant => &NEUTRAL_VARIANTS,
            _ => &VIVIDS,
        }
    }

    /// Whether token names carry the role name in place of `name`
    pub const fn replaces_name(&self) -> bool {
        !matches!(self, ThemeRole::Neutral | ThemeRole::NeutralVariant)
    }

    /// Token name as exposed to callers, e.g. `onNameContainer` →
    /// `onPrimaryContainer`
    pub fn token_name(&self, token: &str) -> String {
        if !self.replaces_name() {
            return token.to_string();
        }
        let role = self.name();
        if let Some(rest) = token.strip_prefix("name") {
            format!("{role}{rest}")
        } else {
            let mut capitalized = role[..1].to_ascii_uppercase();
            capitalized.push_str(&role[1..]);
            token.replacen("Name", &capitalized, 1)
        }
    }
}

impl fmt::Display for ThemeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Palette configuration that draws the full ramp of `role`
///
/// The chroma multiplier is folded into the peak chroma. Static roles get
/// a single-hue range.
pub fn role_palette_config(
    role: ThemeRole,
    hues: &Hues,
    swatch_step: f64,
) -> Result<PaletteConfig> {
    let rc = role.config();
    let hues = match rc.static_hue {
        Some(h) => Hues::single(h + rc.hue_shift),
        None => hues.shifted(rc.hue_shift),
    };
    let config = PaletteConfig {
        swatch_step,
        peak_lightness: rc.peak_lightness,
        peak_chroma: rc.peak_chroma * rc.peak_chroma_mult,
        hues,
    };
    config.validate()?;
    Ok(config)
}

/// A token resolved to a color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeColor {
    pub role: ThemeRole,
    /// camelCase token name with the role substituted in
    pub token: String,
    pub swatch: Swatch,
}

impl SchemeColor {
    /// Kebab-case custom property name, e.g. `--on-primary-container`
    pub fn css_property(&self) -> String {
        let mut out = String::from("--");
        for ch in self.token.chars() {
            if ch.is_ascii_uppercase() {
                out.push('-');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }
}

/// Resolve one token of `role`
///
/// Chroma and hue are taken at the exact table lightness; all three
/// coordinates are then quantized.
pub fn resolve(role: ThemeRole, token: &TokenLightness, hues: &Hues, mode: Mode) -> SchemeColor {
    let rc = role.config();
    let l = token.get(mode);
    let c = quantize(rc.chroma_at(l), CHROMA_STEP);
    let h = normalize_hue(quantize(rc.hue_at(l, hues), HUE_STEP));
    let oklch = Oklch {
        l: quantize(l, LIGHTNESS_STEP),
        c,
        h,
    };
    SchemeColor {
        role,
        token: role.token_name(token.name),
        swatch: Swatch::from_oklch(oklch),
    }
}

/// Every token of every role for seed `hues` in `mode`
pub fn scheme(hues: &Hues, mode: Mode) -> Vec<SchemeColor> {
    let colors: Vec<SchemeColor> = ThemeRole::ALL
        .iter()
        .flat_map(|&role| role.tokens().iter().map(move |t| resolve(role, t, hues, mode)))
        .collect();
    debug!("resolved {} scheme tokens ({mode:?}, hues {hues:?})", colors.len());
    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamut::GamutClass;

    fn find<'a>(colors: &'a [SchemeColor], token: &str) -> &'a SchemeColor {
        colors
            .iter()
            .find(|c| c.token == token)
            .unwrap_or_else(|| panic!("missing token {token}"))
    }

    #[test]
    fn test_token_names() {
        assert_eq!(ThemeRole::Primary.token_name("name"), "primary");
        assert_eq!(ThemeRole::Primary.token_name("onNameContainer"), "onPrimaryContainer");
        assert_eq!(ThemeRole::Error.token_name("inverseName"), "inverseError");
        assert_eq!(ThemeRole::Neutral.token_name("surface"), "surface");
    }

    #[test]
    fn test_css_property() {
        let colors = scheme(&Hues::single(250.0), Mode::Light);
        assert_eq!(find(&colors, "onPrimaryContainer").css_property(), "--on-primary-container");
        assert_eq!(find(&colors, "surface").css_property(), "--surface");
    }

    #[test]
    fn test_scheme_size_and_uniqueness() {
        let colors = scheme(&Hues::new(250.0, 280.0), Mode::Dark);
        assert_eq!(colors.len(), 5 * VIVIDS.len() + NEUTRALS.len() + NEUTRAL_VARIANTS.len());

        let mut names: Vec<&str> = colors.iter().map(|c| c.token.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), colors.len());
    }

    #[test]
    fn test_light_mode_values() {
        let colors = scheme(&Hues::single(250.0), Mode::Light);

        let primary = find(&colors, "primary").swatch.oklch;
        assert!((primary.l - 0.51).abs() < 1e-12);
        assert!((primary.c - 0.1105).abs() <= 0.001);
        assert_eq!(primary.h, 250.0);

        let secondary = find(&colors, "secondary").swatch.oklch;
        assert!((secondary.c - 0.028).abs() < 1e-12);

        let tertiary = find(&colors, "tertiary").swatch.oklch;
        assert_eq!(tertiary.h, 10.0);

        let on_primary = &find(&colors, "onPrimary").swatch;
        assert_eq!(on_primary.srgb_hex, "FFFFFF");
    }

    #[test]
    fn test_static_roles_ignore_seed() {
        for seed in [0.0, 120.0, 300.0] {
            let colors = scheme(&Hues::single(seed), Mode::Light);
            assert_eq!(find(&colors, "error").swatch.oklch.h, 29.0);
            assert_eq!(find(&colors, "warning").swatch.oklch.h, 90.0);
        }
    }

    #[test]
    fn test_modes_differ() {
        let hues = Hues::single(140.0);
        let light = scheme(&hues, Mode::Light);
        let dark = scheme(&hues, Mode::Dark);
        assert!(find(&light, "surface").swatch.oklch.l > find(&dark, "surface").swatch.oklch.l);
        assert!(find(&light, "onSurface").swatch.oklch.l < find(&dark, "onSurface").swatch.oklch.l);
    }

    #[test]
    fn test_neutrals_are_near_grey() {
        let colors = scheme(&Hues::single(30.0), Mode::Light);
        for color in colors.iter().filter(|c| c.role == ThemeRole::Neutral) {
            assert!(color.swatch.oklch.c <= 0.005, "{}: {:?}", color.token, color.swatch.oklch);
            assert_eq!(color.swatch.gamut, GamutClass::Srgb);
        }
    }

    #[test]
    fn test_role_palette_config() {
        let hues = Hues::new(10.0, 40.0);

        let tertiary = role_palette_config(ThemeRole::Tertiary, &hues, 10.0).unwrap();
        assert_eq!(tertiary.hues, Hues::new(130.0, 160.0));

        let secondary = role_palette_config(ThemeRole::Secondary, &hues, 10.0).unwrap();
        assert!((secondary.peak_chroma - 0.0325).abs() < 1e-12);

        let warning = role_palette_config(ThemeRole::Warning, &hues, 10.0).unwrap();
        assert_eq!(warning.hues, Hues::single(90.0));
        assert_eq!(warning.peak_lightness, 0.87);

        assert!(role_palette_config(ThemeRole::Primary, &hues, 0.0).is_err());
    }
}
