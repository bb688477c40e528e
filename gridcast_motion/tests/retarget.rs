// Copyright 2025 the Gridcast Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuity of retargeted animations.
//!
//! However often a scalar is retargeted, the value read at the retarget frame
//! must equal the value read just before it, and values must stay between the
//! extremes of all positions visited so far (the curves never overshoot).

use core::time::Duration;

use gridcast_motion::{AnimatedScalar, Easing, FrameTime, Transition};
use proptest::prelude::*;

fn easing() -> impl Strategy<Value = Easing> {
    prop_oneof![
        Just(Easing::Linear),
        Just(Easing::EaseIn),
        Just(Easing::EaseOut),
        Just(Easing::EaseInOut),
        Just(Easing::EaseOutCubic),
    ]
}

proptest! {
    #[test]
    fn retarget_never_jumps(
        steps in prop::collection::vec((0_u64..400, -50.0_f64..50.0), 1..12),
        easing in easing(),
        duration_ms in 1_u64..500,
    ) {
        let transition = Transition::new(Duration::from_millis(duration_ms)).with_easing(easing);
        let mut scalar = AnimatedScalar::new(0.0);
        let mut now = FrameTime::ZERO;
        let mut lo = 0.0_f64;
        let mut hi = 0.0_f64;

        for (gap, target) in steps {
            now = now + Duration::from_millis(gap);
            let before = scalar.value_at(now);
            scalar.retarget(target, now, transition);
            let after = scalar.value_at(now);
            prop_assert!((before - after).abs() < 1e-9, "jump from {before} to {after}");

            lo = lo.min(target);
            hi = hi.max(target);
            let mid = scalar.value_at(now + Duration::from_millis(duration_ms / 2));
            prop_assert!(mid >= lo - 1e-9 && mid <= hi + 1e-9, "{mid} outside [{lo}, {hi}]");
        }

        let settled = scalar.value_at(now + Duration::from_millis(duration_ms));
        prop_assert_eq!(settled, scalar.target());
    }
}

#[test]
fn rapid_retargets_track_latest_target() {
    let transition = Transition::default();
    let mut scalar = AnimatedScalar::new(0.0);
    for (i, target) in [1.0, 2.0, 3.0, 4.0].into_iter().enumerate() {
        scalar.retarget(target, FrameTime::from_millis(16 * i as u64), transition);
    }
    let end = FrameTime::from_millis(48) + Transition::DEFAULT_DURATION;
    assert_eq!(scalar.value_at(end), 4.0);
}
