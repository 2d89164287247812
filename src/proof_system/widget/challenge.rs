// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The challenge-power accumulator threaded through every widget call.
//!
//! Each widget consumes a declared number of powers of the quotient
//! challenge `alpha` and of the opening-batch challenge `nu`. The
//! accumulator is an explicit value, passed in and returned, so the ordering
//! dependency is visible in every signature; the orchestrator alone advances
//! it between widget calls and cross-checks the value every widget returns.
//! A widget that consumes more or fewer powers than it declares would
//! silently desynchronize every widget after it on both sides of the
//! protocol, which is why a schedule mismatch aborts the round instead of
//! degrading.

use crate::error::Error;
use dusk_bls12_381::BlsScalar;

/// The algebraic state shared by prover and verifier widgets: the running
/// power of the quotient-composition challenge and of the opening-batch
/// challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeAccumulator {
    /// The power of `alpha` assigned to the current widget.
    pub alpha_base: BlsScalar,
    /// The quotient challenge `alpha` itself.
    pub alpha_step: BlsScalar,
    /// The power of `nu` assigned to the current widget's openings.
    pub nu_base: BlsScalar,
    /// The opening-batch challenge `nu` itself.
    pub nu_step: BlsScalar,
    /// The power of `nu` reserved for the linearization polynomial.
    pub linear_nu: BlsScalar,
}

impl ChallengeAccumulator {
    /// Accumulator state at the start of the quotient round, before the
    /// opening challenge exists.
    pub fn from_alpha(alpha: BlsScalar) -> ChallengeAccumulator {
        ChallengeAccumulator {
            alpha_base: alpha,
            alpha_step: alpha,
            nu_base: BlsScalar::one(),
            nu_step: BlsScalar::one(),
            linear_nu: BlsScalar::one(),
        }
    }

    /// Extends the accumulator with the opening-batch challenge once it has
    /// been squeezed from the transcript.
    pub fn with_opening_challenge(
        self,
        nu_base: BlsScalar,
        nu_step: BlsScalar,
        linear_nu: BlsScalar,
    ) -> ChallengeAccumulator {
        ChallengeAccumulator {
            nu_base,
            nu_step,
            linear_nu,
            ..self
        }
    }

    /// Raises `alpha_base` by `arity` steps.
    pub fn advance_alpha(&self, arity: usize) -> ChallengeAccumulator {
        let mut next = *self;
        for _ in 0..arity {
            next.alpha_base *= next.alpha_step;
        }
        next
    }

    /// Raises `nu_base` by `arity` steps.
    pub fn advance_nu(&self, arity: usize) -> ChallengeAccumulator {
        let mut next = *self;
        for _ in 0..arity {
            next.nu_base *= next.nu_step;
        }
        next
    }

    /// Advances `alpha_base` by `arity` steps and checks the base the widget
    /// returned against the schedule.
    pub(crate) fn expect_alpha_advance(
        &self,
        arity: usize,
        returned: &BlsScalar,
        widget: &'static str,
    ) -> Result<ChallengeAccumulator, Error> {
        let next = self.advance_alpha(arity);
        if next.alpha_base != *returned {
            return Err(Error::ChallengeScheduleViolation { widget });
        }
        Ok(next)
    }

    /// Advances `nu_base` by `arity` steps and checks the base the widget
    /// returned against the schedule.
    pub(crate) fn expect_nu_advance(
        &self,
        arity: usize,
        returned: &BlsScalar,
        widget: &'static str,
    ) -> Result<ChallengeAccumulator, Error> {
        let next = self.advance_nu(arity);
        if next.nu_base != *returned {
            return Err(Error::ChallengeScheduleViolation { widget });
        }
        Ok(next)
    }

    /// Advances both bases by the widget's declared arities and checks the
    /// accumulator the widget returned against the schedule.
    pub(crate) fn expect_advance(
        &self,
        alpha_arity: usize,
        nu_arity: usize,
        returned: &ChallengeAccumulator,
        widget: &'static str,
    ) -> Result<ChallengeAccumulator, Error> {
        let next = self.advance_alpha(alpha_arity).advance_nu(nu_arity);
        if next.alpha_base != returned.alpha_base
            || next.nu_base != returned.nu_base
        {
            return Err(Error::ChallengeScheduleViolation { widget });
        }
        Ok(next)
    }
}

/// Assigns accumulator states to a list of widgets sequentially from their
/// declared alpha arities.
///
/// Entry `i` is the state widget `i` runs with; the final entry is the state
/// after every widget. Alpha powers must be assigned by this sequential
/// pre-pass before any widget arithmetic runs in parallel: field addition
/// commutes, the power assignment does not.
pub(crate) fn alpha_schedule(
    start: ChallengeAccumulator,
    arities: &[usize],
) -> Vec<ChallengeAccumulator> {
    let mut schedule = Vec::with_capacity(arities.len() + 1);
    schedule.push(start);
    for arity in arities {
        let last = schedule.last().copied().unwrap();
        schedule.push(last.advance_alpha(*arity));
    }
    schedule
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn advance_alpha_raises_by_arity() {
        let alpha = BlsScalar::from(3);
        let acc = ChallengeAccumulator::from_alpha(alpha);

        let next = acc.advance_alpha(4);
        assert_eq!(next.alpha_base, alpha.pow(&[5, 0, 0, 0]));
        // The step never moves.
        assert_eq!(next.alpha_step, alpha);
    }

    #[test]
    fn schedule_is_deterministic() {
        let start = ChallengeAccumulator::from_alpha(BlsScalar::from(7))
            .with_opening_challenge(
                BlsScalar::from(11),
                BlsScalar::from(11),
                BlsScalar::from(11),
            );
        let arities = [1, 4, 2, 1];

        let first = alpha_schedule(start, &arities);
        let second = alpha_schedule(start, &arities);
        assert_eq!(first, second);

        // Entry i+1 is entry i advanced by arities[i].
        for (i, arity) in arities.iter().enumerate() {
            assert_eq!(first[i + 1], first[i].advance_alpha(*arity));
        }
    }

    #[test]
    fn schedule_mismatch_is_a_fault() {
        let acc = ChallengeAccumulator::from_alpha(BlsScalar::from(5));
        let wrong = acc.advance_alpha(2).alpha_base;

        let result = acc.expect_alpha_advance(1, &wrong, "test-widget");
        assert_eq!(
            result,
            Err(Error::ChallengeScheduleViolation {
                widget: "test-widget"
            })
        );
    }
}
