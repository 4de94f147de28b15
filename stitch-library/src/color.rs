//! Color space conversions and tone mapping.

use stitch_core::FunctionDef;

/// sRGB decode to linear light.
pub const SRGB_TO_LINEAR: &str = include_str!("color/srgb_to_linear.wgsl");
/// Linear light encode to sRGB.
pub const LINEAR_TO_SRGB: &str = include_str!("color/linear_to_srgb.wgsl");
/// Rec. 709 relative luminance.
pub const LUMINANCE: &str = include_str!("color/luminance.wgsl");
/// RGB to hue/saturation/value.
pub const RGB_TO_HSV: &str = include_str!("color/rgb_to_hsv.wgsl");
/// Hue/saturation/value to RGB.
pub const HSV_TO_RGB: &str = include_str!("color/hsv_to_rgb.wgsl");
/// Saturated RGB for a bare hue.
pub const HUE_TO_RGB: &str = include_str!("color/hue_to_rgb.wgsl");
/// Hue/saturation/lightness to RGB; pulls in `hue_to_rgb`.
pub const HSL_TO_RGB: &str = include_str!("color/hsl_to_rgb.wgsl");
/// Reinhard tone mapping.
pub const TONEMAP_REINHARD: &str = include_str!("color/tonemap_reinhard.wgsl");
/// ACES filmic tone mapping approximation.
pub const TONEMAP_ACES: &str = include_str!("color/tonemap_aces.wgsl");

/// Definition table consumed by the registry builder.
pub const DEFINITIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "srgb_to_linear",
        source: SRGB_TO_LINEAR,
    },
    FunctionDef {
        name: "linear_to_srgb",
        source: LINEAR_TO_SRGB,
    },
    FunctionDef {
        name: "luminance",
        source: LUMINANCE,
    },
    FunctionDef {
        name: "rgb_to_hsv",
        source: RGB_TO_HSV,
    },
    FunctionDef {
        name: "hsv_to_rgb",
        source: HSV_TO_RGB,
    },
    FunctionDef {
        name: "hue_to_rgb",
        source: HUE_TO_RGB,
    },
    FunctionDef {
        name: "hsl_to_rgb",
        source: HSL_TO_RGB,
    },
    FunctionDef {
        name: "tonemap_reinhard",
        source: TONEMAP_REINHARD,
    },
    FunctionDef {
        name: "tonemap_aces",
        source: TONEMAP_ACES,
    },
];
