//! Procedural noise over 2D and 3D lattices.
//!
//! Every generator here builds on the `hash` category for its lattice
//! randomness, and the fbm variants stack their base noise — the deepest
//! dependency chains in the built-in catalog.

use stitch_core::FunctionDef;

/// 2D value noise in `[0, 1]`.
pub const VALUE_NOISE_2D: &str = include_str!("noise/value_noise_2d.wgsl");
/// 3D value noise in `[0, 1]`.
pub const VALUE_NOISE_3D: &str = include_str!("noise/value_noise_3d.wgsl");
/// 2D gradient (Perlin-style) noise, roughly `[-1, 1]`.
pub const PERLIN_NOISE_2D: &str = include_str!("noise/perlin_noise_2d.wgsl");
/// 3D gradient (Perlin-style) noise, roughly `[-1, 1]`.
pub const PERLIN_NOISE_3D: &str = include_str!("noise/perlin_noise_3d.wgsl");
/// 2D simplex noise, roughly `[-1, 1]`.
pub const SIMPLEX_NOISE_2D: &str = include_str!("noise/simplex_noise_2d.wgsl");
/// Distance to the nearest jittered cell point.
pub const VORONOI_2D: &str = include_str!("noise/voronoi_2d.wgsl");
/// Fractal sum over 2D value noise.
pub const FBM_VALUE_2D: &str = include_str!("noise/fbm_value_2d.wgsl");
/// Fractal sum over 3D value noise.
pub const FBM_VALUE_3D: &str = include_str!("noise/fbm_value_3d.wgsl");
/// Fractal sum over 2D gradient noise.
pub const FBM_PERLIN_2D: &str = include_str!("noise/fbm_perlin_2d.wgsl");

/// Definition table consumed by the registry builder.
pub const DEFINITIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "value_noise_2d",
        source: VALUE_NOISE_2D,
    },
    FunctionDef {
        name: "value_noise_3d",
        source: VALUE_NOISE_3D,
    },
    FunctionDef {
        name: "perlin_noise_2d",
        source: PERLIN_NOISE_2D,
    },
    FunctionDef {
        name: "perlin_noise_3d",
        source: PERLIN_NOISE_3D,
    },
    FunctionDef {
        name: "simplex_noise_2d",
        source: SIMPLEX_NOISE_2D,
    },
    FunctionDef {
        name: "voronoi_2d",
        source: VORONOI_2D,
    },
    FunctionDef {
        name: "fbm_value_2d",
        source: FBM_VALUE_2D,
    },
    FunctionDef {
        name: "fbm_value_3d",
        source: FBM_VALUE_3D,
    },
    FunctionDef {
        name: "fbm_perlin_2d",
        source: FBM_PERLIN_2D,
    },
];
