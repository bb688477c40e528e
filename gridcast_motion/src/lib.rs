// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridcast Motion: explicit interpolation for animated UI scalars.
//!
//! Animation here is a plain state machine rather than a value that changes
//! behind the caller's back. Each [`AnimatedScalar`] stores where it started,
//! where it is going, when it started and the [`Transition`] it follows. Reading
//! the animated value always takes the current [`FrameTime`], so the host's
//! frame loop stays in charge of time and tests can step it deterministically.
//!
//! Retargeting an in-flight scalar starts the new transition from the value it
//! has *now*, never from the old target, which keeps motion continuous when
//! inputs arrive faster than transitions finish.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use gridcast_motion::{AnimatedScalar, Easing, FrameTime, Transition};
//!
//! let linear = Transition::new(Duration::from_millis(100)).with_easing(Easing::Linear);
//! let mut x = AnimatedScalar::new(0.0);
//!
//! x.retarget(10.0, FrameTime::from_millis(0), linear);
//! assert_eq!(x.value_at(FrameTime::from_millis(50)), 5.0);
//!
//! // Retarget halfway: the new transition starts from 5.0.
//! x.retarget(0.0, FrameTime::from_millis(50), linear);
//! assert_eq!(x.value_at(FrameTime::from_millis(50)), 5.0);
//! assert_eq!(x.value_at(FrameTime::from_millis(150)), 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod clock;
mod easing;
mod scalar;

pub use clock::FrameTime;
pub use easing::Easing;
pub use scalar::{AnimatedScalar, Transition};
