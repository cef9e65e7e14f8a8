//! keel-math: deterministic linear algebra for real-time transform pipelines.
//!
//! Value types ([`Vec2`]/[`Vec3`]/[`Vec4`], column-major [`Mat4`], [`Quat`])
//! with plain `f32` arithmetic so results round identically on every target.
//! Rotation conversions share one set of conventions: radians everywhere,
//! XYZ Tait-Bryan Euler order, column vectors on the right.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::similar_names,
    clippy::trivially_copy_pass_by_ref
)]

use std::f32::consts::TAU;

mod error;
mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use error::MathError;
pub use mat4::Mat4;
pub use quat::Quat;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Compares `|a - b| < eps`.
///
/// The guard used wherever a negligible element changes a code path, e.g.
/// homogeneous `w` checks before decomposition.
pub fn epsilon_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
