//! Lighting terms, from classic Blinn-Phong to the Cook-Torrance BRDF.
//!
//! `specular_cook_torrance` is the widest dependency fan in the catalog: it
//! declares three direct dependencies, one of which has a dependency of its
//! own.

use stitch_core::FunctionDef;

/// Lambertian diffuse term.
pub const LAMBERT_DIFFUSE: &str = include_str!("lighting/lambert_diffuse.wgsl");
/// Half-Lambert wrap lighting.
pub const HALF_LAMBERT: &str = include_str!("lighting/half_lambert.wgsl");
/// Blinn-Phong specular highlight.
pub const BLINN_PHONG_SPECULAR: &str = include_str!("lighting/blinn_phong_specular.wgsl");
/// Silhouette rim term.
pub const RIM_FACTOR: &str = include_str!("lighting/rim_factor.wgsl");
/// Schlick Fresnel approximation.
pub const FRESNEL_SCHLICK: &str = include_str!("lighting/fresnel_schlick.wgsl");
/// GGX normal distribution.
pub const DISTRIBUTION_GGX: &str = include_str!("lighting/distribution_ggx.wgsl");
/// Schlick-GGX geometry term for one direction.
pub const GEOMETRY_SCHLICK_GGX: &str = include_str!("lighting/geometry_schlick_ggx.wgsl");
/// Smith geometry term; pulls in `geometry_schlick_ggx`.
pub const GEOMETRY_SMITH: &str = include_str!("lighting/geometry_smith.wgsl");
/// Cook-Torrance specular BRDF; pulls in the D, G and F terms.
pub const SPECULAR_COOK_TORRANCE: &str = include_str!("lighting/specular_cook_torrance.wgsl");

/// Definition table consumed by the registry builder.
pub const DEFINITIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "lambert_diffuse",
        source: LAMBERT_DIFFUSE,
    },
    FunctionDef {
        name: "half_lambert",
        source: HALF_LAMBERT,
    },
    FunctionDef {
        name: "blinn_phong_specular",
        source: BLINN_PHONG_SPECULAR,
    },
    FunctionDef {
        name: "rim_factor",
        source: RIM_FACTOR,
    },
    FunctionDef {
        name: "fresnel_schlick",
        source: FRESNEL_SCHLICK,
    },
    FunctionDef {
        name: "distribution_ggx",
        source: DISTRIBUTION_GGX,
    },
    FunctionDef {
        name: "geometry_schlick_ggx",
        source: GEOMETRY_SCHLICK_GGX,
    },
    FunctionDef {
        name: "geometry_smith",
        source: GEOMETRY_SMITH,
    },
    FunctionDef {
        name: "specular_cook_torrance",
        source: SPECULAR_COOK_TORRANCE,
    },
];
