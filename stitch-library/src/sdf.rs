//! 2D signed distance fields and combining operators.

use stitch_core::FunctionDef;

pub const SD_CIRCLE: &str = include_str!("sdf/sd_circle.wgsl");
pub const SD_BOX: &str = include_str!("sdf/sd_box.wgsl");
/// Rounded box; pulls in `sd_box`.
pub const SD_ROUNDED_BOX: &str = include_str!("sdf/sd_rounded_box.wgsl");
pub const SD_SEGMENT: &str = include_str!("sdf/sd_segment.wgsl");
pub const SD_HEXAGON: &str = include_str!("sdf/sd_hexagon.wgsl");
pub const SD_EQUILATERAL_TRIANGLE: &str = include_str!("sdf/sd_equilateral_triangle.wgsl");
pub const OP_UNION: &str = include_str!("sdf/op_union.wgsl");
pub const OP_SUBTRACTION: &str = include_str!("sdf/op_subtraction.wgsl");
pub const OP_INTERSECTION: &str = include_str!("sdf/op_intersection.wgsl");
pub const OP_SMOOTH_UNION: &str = include_str!("sdf/op_smooth_union.wgsl");
pub const OP_SMOOTH_SUBTRACTION: &str = include_str!("sdf/op_smooth_subtraction.wgsl");
pub const OP_SMOOTH_INTERSECTION: &str = include_str!("sdf/op_smooth_intersection.wgsl");
pub const OP_ONION: &str = include_str!("sdf/op_onion.wgsl");

/// Definition table consumed by the registry builder.
pub const DEFINITIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "sd_circle",
        source: SD_CIRCLE,
    },
    FunctionDef {
        name: "sd_box",
        source: SD_BOX,
    },
    FunctionDef {
        name: "sd_rounded_box",
        source: SD_ROUNDED_BOX,
    },
    FunctionDef {
        name: "sd_segment",
        source: SD_SEGMENT,
    },
    FunctionDef {
        name: "sd_hexagon",
        source: SD_HEXAGON,
    },
    FunctionDef {
        name: "sd_equilateral_triangle",
        source: SD_EQUILATERAL_TRIANGLE,
    },
    FunctionDef {
        name: "op_union",
        source: OP_UNION,
    },
    FunctionDef {
        name: "op_subtraction",
        source: OP_SUBTRACTION,
    },
    FunctionDef {
        name: "op_intersection",
        source: OP_INTERSECTION,
    },
    FunctionDef {
        name: "op_smooth_union",
        source: OP_SMOOTH_UNION,
    },
    FunctionDef {
        name: "op_smooth_subtraction",
        source: OP_SMOOTH_SUBTRACTION,
    },
    FunctionDef {
        name: "op_smooth_intersection",
        source: OP_SMOOTH_INTERSECTION,
    },
    FunctionDef {
        name: "op_onion",
        source: OP_ONION,
    },
];
