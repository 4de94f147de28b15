//! Coordinate hashing: cheap, deterministic pseudo-random values.
//!
//! The float hashes follow the sine-free fract construction; the integer
//! hashes are PCG permutations. Everything here is dependency-free, which
//! makes this category the leaf layer of the noise fragments.

use stitch_core::FunctionDef;

/// One-round PCG permutation of a single 32-bit word.
pub const PCG_HASH: &str = include_str!("hash/pcg_hash.wgsl");
/// Two-dimensional PCG permutation.
pub const PCG2D: &str = include_str!("hash/pcg2d.wgsl");
/// Three-dimensional PCG permutation.
pub const PCG3D: &str = include_str!("hash/pcg3d.wgsl");
/// Scalar hash in `[0, 1)`.
pub const HASH11: &str = include_str!("hash/hash11.wgsl");
/// 2D coordinate to a single hash value in `[0, 1)`.
pub const HASH21: &str = include_str!("hash/hash21.wgsl");
/// 3D coordinate to a single hash value in `[0, 1)`.
pub const HASH31: &str = include_str!("hash/hash31.wgsl");
/// 2D coordinate to a 2D hash vector.
pub const HASH22: &str = include_str!("hash/hash22.wgsl");
/// 3D coordinate to a 3D hash vector.
pub const HASH33: &str = include_str!("hash/hash33.wgsl");

/// Definition table consumed by the registry builder.
pub const DEFINITIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "pcg_hash",
        source: PCG_HASH,
    },
    FunctionDef {
        name: "pcg2d",
        source: PCG2D,
    },
    FunctionDef {
        name: "pcg3d",
        source: PCG3D,
    },
    FunctionDef {
        name: "hash11",
        source: HASH11,
    },
    FunctionDef {
        name: "hash21",
        source: HASH21,
    },
    FunctionDef {
        name: "hash31",
        source: HASH31,
    },
    FunctionDef {
        name: "hash22",
        source: HASH22,
    },
    FunctionDef {
        name: "hash33",
        source: HASH33,
    },
];
