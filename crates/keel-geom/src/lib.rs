// SPDX-License-Identifier: Apache-2.0

//! keel-geom: the TRS transform aggregate and the decompose/recompose engine.
//!
//! [`Transform`] holds a translate/rotate/scale triple; `to_mat4` recomposes
//! it into a column-major matrix and [`Transform::from_mat4`] splits such a
//! matrix back apart. Both directions share the conventions of `keel-math`:
//! radians, XYZ Tait-Bryan Euler order, column vectors.
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
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::similar_names,
    clippy::trivially_copy_pass_by_ref
)]

mod decompose;
mod transform;

pub use decompose::DecomposeError;
pub use transform::Transform;
