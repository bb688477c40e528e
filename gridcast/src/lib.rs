// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridcast: a headless controller for television program guides.
//!
//! A guide is a grid of channels (rows) by time (columns). The user moves focus
//! between program cells; the guide scrolls so that the focused cell stays
//! centered, and only rows near the viewport are rendered at full detail.
//!
//! [`GuideController`] owns the guide and sits between three host subsystems:
//!
//! - the **layout pass** reports the container size via
//!   [`GuideController::on_layout`],
//! - the **input layer** reports focus changes via [`GuideController::on_focus`]
//!   (or [`GuideController::focus_program`]) and [`GuideController::on_blur`],
//! - the **renderer** reads a [`GuideFrame`] (or the individual
//!   [`GuideController::transform`] and [`GuideController::row_visibility`]
//!   queries) once per frame.
//!
//! Guide data is validated when it is handed over ([`GuideData::new`]) and is
//! immutable afterwards.
//!
//! ## Minimal example
//!
//! ```rust
//! use gridcast::{
//!     ChannelBuilder, GuideConfig, GuideController, GuideData, MINUTE_MS, ValidationPolicy,
//! };
//! use gridcast_motion::FrameTime;
//!
//! let origin = 1_709_114_400_000;
//! let channels = (0..10)
//!     .map(|i| {
//!         ChannelBuilder::new(format!("Channel {}", i + 1), origin)
//!             .program("News", 30 * MINUTE_MS)
//!             .program("Film", 120 * MINUTE_MS)
//!             .build()
//!     })
//!     .collect();
//! let data = GuideData::new(channels, ValidationPolicy::Strict).unwrap();
//!
//! let mut guide = GuideController::new(data, GuideConfig::default(), origin);
//! guide.on_layout(600.0, 800.0);
//! guide.focus_program(5, 1, FrameTime::from_millis(0));
//!
//! let frame = guide.frame(FrameTime::from_millis(16));
//! assert!(frame.rows[5].visibility.in_view);
//! assert!(guide.is_animating(FrameTime::from_millis(16)));
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`GuideConfig`] and the
//!   guide data model.
//! - `tracing`: emits `tracing` events for focus handling, layout changes and
//!   data repairs.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod data;
mod error;
mod frame;
mod model;

pub use config::{GuideConfig, Resolution};
pub use controller::{FocusedCell, GuideController};
pub use data::{GuideData, ValidationPolicy};
pub use error::GuideDataError;
pub use frame::{CellFrame, GuideFrame, RowDetail, RowFrame, RowVisibility};
pub use model::{Channel, ChannelBuilder, Program};

pub use gridcast_camera::Transform;
pub use gridcast_layout::{MINUTE_MS, Timestamp, VisibleRange};
