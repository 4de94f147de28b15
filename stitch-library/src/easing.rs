//! Easing curves over a normalized time parameter `t` in `[0, 1]`.

use stitch_core::FunctionDef;

pub const EASE_IN_QUAD: &str = include_str!("easing/ease_in_quad.wgsl");
pub const EASE_OUT_QUAD: &str = include_str!("easing/ease_out_quad.wgsl");
pub const EASE_IN_OUT_QUAD: &str = include_str!("easing/ease_in_out_quad.wgsl");
pub const EASE_IN_CUBIC: &str = include_str!("easing/ease_in_cubic.wgsl");
pub const EASE_OUT_CUBIC: &str = include_str!("easing/ease_out_cubic.wgsl");
pub const EASE_IN_OUT_CUBIC: &str = include_str!("easing/ease_in_out_cubic.wgsl");
pub const EASE_IN_EXPO: &str = include_str!("easing/ease_in_expo.wgsl");
pub const EASE_OUT_EXPO: &str = include_str!("easing/ease_out_expo.wgsl");
pub const EASE_OUT_BACK: &str = include_str!("easing/ease_out_back.wgsl");
pub const EASE_OUT_ELASTIC: &str = include_str!("easing/ease_out_elastic.wgsl");
pub const EASE_OUT_BOUNCE: &str = include_str!("easing/ease_out_bounce.wgsl");
/// Time-reversed bounce; pulls in `ease_out_bounce`.
pub const EASE_IN_BOUNCE: &str = include_str!("easing/ease_in_bounce.wgsl");

/// Definition table consumed by the registry builder.
pub const DEFINITIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "ease_in_quad",
        source: EASE_IN_QUAD,
    },
    FunctionDef {
        name: "ease_out_quad",
        source: EASE_OUT_QUAD,
    },
    FunctionDef {
        name: "ease_in_out_quad",
        source: EASE_IN_OUT_QUAD,
    },
    FunctionDef {
        name: "ease_in_cubic",
        source: EASE_IN_CUBIC,
    },
    FunctionDef {
        name: "ease_out_cubic",
        source: EASE_OUT_CUBIC,
    },
    FunctionDef {
        name: "ease_in_out_cubic",
        source: EASE_IN_OUT_CUBIC,
    },
    FunctionDef {
        name: "ease_in_expo",
        source: EASE_IN_EXPO,
    },
    FunctionDef {
        name: "ease_out_expo",
        source: EASE_OUT_EXPO,
    },
    FunctionDef {
        name: "ease_out_back",
        source: EASE_OUT_BACK,
    },
    FunctionDef {
        name: "ease_out_elastic",
        source: EASE_OUT_ELASTIC,
    },
    FunctionDef {
        name: "ease_out_bounce",
        source: EASE_OUT_BOUNCE,
    },
    FunctionDef {
        name: "ease_in_bounce",
        source: EASE_IN_BOUNCE,
    },
];
