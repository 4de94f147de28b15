//! Built-in catalog of WGSL shader function fragments.
//!
//! Each function lives in its own `.wgsl` file, embedded at compile time,
//! and is exposed three ways: as a named string constant, as a row in its
//! category's `DEFINITIONS` table, and through the registry built by
//! [`registry`]. Fragments contain only `fn` definitions — no module-scope
//! declarations — so any subset assembles into a single WGSL module without
//! symbol collisions.
//!
//! Functions that call other catalog functions declare it with a
//! `// requires:` marker line; the resolver in `stitch-core` walks those
//! declarations to emit dependencies ahead of their dependents.

/// Color space conversions and tone mapping.
pub mod color;
/// Easing curves.
pub mod easing;
/// Coordinate hashing.
pub mod hash;
/// Lighting terms and BRDF pieces.
pub mod lighting;
/// Shaping and coordinate helpers.
pub mod math;
/// Procedural noise.
pub mod noise;
/// 2D signed distance fields and operators.
pub mod sdf;

use stitch_core::{Category, RegistryError, ShaderRegistry};

/// Every category of the built-in catalog, in registration order.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "hash",
        functions: hash::DEFINITIONS,
    },
    Category {
        name: "math",
        functions: math::DEFINITIONS,
    },
    Category {
        name: "easing",
        functions: easing::DEFINITIONS,
    },
    Category {
        name: "noise",
        functions: noise::DEFINITIONS,
    },
    Category {
        name: "color",
        functions: color::DEFINITIONS,
    },
    Category {
        name: "sdf",
        functions: sdf::DEFINITIONS,
    },
    Category {
        name: "lighting",
        functions: lighting::DEFINITIONS,
    },
];

/// Builds a registry over the built-in catalog.
///
/// # Errors
///
/// Returns [`RegistryError::DuplicateName`] if the catalog tables ever end
/// up defining the same function twice — a data defect, caught here rather
/// than silently shadowed.
pub fn registry() -> Result<ShaderRegistry, RegistryError> {
    ShaderRegistry::from_categories(CATEGORIES)
}
