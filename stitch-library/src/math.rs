//! General-purpose shaping and coordinate helpers.

use stitch_core::FunctionDef;

/// Linear range remap.
pub const REMAP: &str = include_str!("math/remap.wgsl");
/// Range remap clamped to the output interval.
pub const REMAP_CLAMPED: &str = include_str!("math/remap_clamped.wgsl");
/// Clamped linear ramp between two edges.
pub const LINEAR_STEP: &str = include_str!("math/linear_step.wgsl");
/// Quintic step with flat first and second derivatives at the edges.
pub const SMOOTHER_STEP: &str = include_str!("math/smoother_step.wgsl");
/// 2D rotation matrix.
pub const ROTATE2D: &str = include_str!("math/rotate2d.wgsl");
/// 3D rotation matrix about X.
pub const ROTATE_X: &str = include_str!("math/rotate_x.wgsl");
/// 3D rotation matrix about Y.
pub const ROTATE_Y: &str = include_str!("math/rotate_y.wgsl");
/// 3D rotation matrix about Z.
pub const ROTATE_Z: &str = include_str!("math/rotate_z.wgsl");
/// Polar to cartesian conversion.
pub const POLAR_TO_CARTESIAN: &str = include_str!("math/polar_to_cartesian.wgsl");
/// Cartesian to polar conversion.
pub const CARTESIAN_TO_POLAR: &str = include_str!("math/cartesian_to_polar.wgsl");
/// Identity-like curve with a guaranteed minimum near zero.
pub const ALMOST_IDENTITY: &str = include_str!("math/almost_identity.wgsl");
/// Unit triangle wave.
pub const TRIANGLE_WAVE: &str = include_str!("math/triangle_wave.wgsl");

/// Definition table consumed by the registry builder.
pub const DEFINITIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "remap",
        source: REMAP,
    },
    FunctionDef {
        name: "remap_clamped",
        source: REMAP_CLAMPED,
    },
    FunctionDef {
        name: "linear_step",
        source: LINEAR_STEP,
    },
    FunctionDef {
        name: "smoother_step",
        source: SMOOTHER_STEP,
    },
    FunctionDef {
        name: "rotate2d",
        source: ROTATE2D,
    },
    FunctionDef {
        name: "rotate_x",
        source: ROTATE_X,
    },
    FunctionDef {
        name: "rotate_y",
        source: ROTATE_Y,
    },
    FunctionDef {
        name: "rotate_z",
        source: ROTATE_Z,
    },
    FunctionDef {
        name: "polar_to_cartesian",
        source: POLAR_TO_CARTESIAN,
    },
    FunctionDef {
        name: "cartesian_to_polar",
        source: CARTESIAN_TO_POLAR,
    },
    FunctionDef {
        name: "almost_identity",
        source: ALMOST_IDENTITY,
    },
    FunctionDef {
        name: "triangle_wave",
        source: TRIANGLE_WAVE,
    },
];
