// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The widget contracts every gate family implements.
//!
//! A gate family ships as a pair: a [`ProverWidget`] that knows how to fold
//! its constraint into the quotient, linearization and opening polynomials,
//! and a [`VerifierWidget`] produced at preprocessing time that holds the
//! public selector commitments and mirrors the prover's challenge-power
//! advancement when it feeds the batched multiscalar multiplication.
//!
//! For a given circuit the verifier widget list, its capability sets and its
//! per-widget arities must be identical to the prover widget list, in the
//! same order. A mismatched configuration makes every proof rejectable at
//! best; the challenge schedule cross-checks in the orchestrator turn the
//! detectable cases into loud faults.

pub mod arithmetic;
pub mod capability;
pub mod challenge;
pub mod range;

pub use arithmetic::{ArithmeticVerifier, ArithmeticWidget};
pub use capability::{CapabilitySet, Dependency, Feature};
pub use challenge::ChallengeAccumulator;
pub use range::{RangeVerifier, RangeWidget};

use crate::commitment_scheme::kzg10::{CommitKey, Commitment};
use crate::error::Error;
use crate::fft::{EvaluationDomain, Polynomial};
use crate::proof_system::circuit_state::CircuitFftState;
use crate::transcript::Transcript;
use dusk_bls12_381::{BlsScalar, G1Affine};

/// The prover-side contract of a gate family.
///
/// All methods take the challenge accumulator by reference and return the
/// advanced base; the orchestrator owns the advancement and cross-checks the
/// returned value against the widget's declared arity.
pub trait ProverWidget {
    /// A short name identifying the widget in faults.
    fn name(&self) -> &'static str;

    /// The widget's immutable capability declaration.
    fn capability(&self) -> &CapabilitySet;

    /// Number of quotient-challenge powers this widget consumes.
    fn challenge_arity(&self) -> usize;

    /// Number of opening-batch challenge powers this widget consumes.
    fn opening_arity(&self) -> usize {
        0
    }

    /// Adds this widget's gate constraint, evaluated pointwise over the
    /// extended domain and scaled by `alpha_base`, into the quotient buffer
    /// owned by `state`. Returns the next `alpha_base`.
    ///
    /// The circuit state must supply every shifted evaluation this widget's
    /// capability set declares, and the widget must have been reset for the
    /// state's domain; either violation is a usage fault.
    fn compute_quotient_contribution(
        &self,
        challenge: &ChallengeAccumulator,
        transcript: &Transcript,
        state: &mut CircuitFftState,
    ) -> Result<BlsScalar, Error>;

    /// Adds this widget's share of the linearization polynomial `r(X)` into
    /// `lin_poly`. Returns the next `alpha_base`.
    fn compute_linear_contribution(
        &self,
        challenge: &ChallengeAccumulator,
        transcript: &Transcript,
        domain: &EvaluationDomain,
        lin_poly: &mut Polynomial,
    ) -> Result<BlsScalar, Error>;

    /// Folds this widget's extra polynomials-to-be-opened into the batched
    /// opening polynomials using `nu_base`-scaled powers. Returns the next
    /// `nu_base`.
    ///
    /// The default contributes nothing: a fully linearized gate has no
    /// selector of its own to open.
    fn compute_opening_poly_contribution(
        &self,
        challenge: &ChallengeAccumulator,
        _transcript: &Transcript,
        _opening_poly: &mut Polynomial,
        _shifted_opening_poly: &mut Polynomial,
        _domain: &EvaluationDomain,
    ) -> Result<BlsScalar, Error> {
        Ok(challenge.nu_base)
    }

    /// Appends widget-specific public values (e.g. selector evaluations at
    /// the challenge point) to the transcript. Called by the orchestrator
    /// before the opening round, so the verifier can read the same values.
    ///
    /// The default discloses nothing.
    fn compute_transcript_elements(
        &self,
        _transcript: &mut Transcript,
        _state: &CircuitFftState,
        _domain: &EvaluationDomain,
    ) -> Result<(), Error> {
        Ok(())
    }

    /// Commits to this widget's selector polynomials and returns the paired
    /// verifier widget holding those commitments and a copy of this
    /// widget's capability set. Setup-time only.
    fn compute_preprocessed_commitments(
        &self,
        domain: &EvaluationDomain,
        commit_key: &CommitKey,
    ) -> Result<Box<dyn VerifierWidget>, Error>;

    /// Rebuilds any domain-sized selector scratch. Must be called whenever
    /// the evaluation domain changes before the widget is reused.
    fn reset(&mut self, domain: &EvaluationDomain) -> Result<(), Error>;
}

/// The verifier-side contract of a gate family, holding the preprocessed
/// public commitments produced by its paired [`ProverWidget`].
pub trait VerifierWidget {
    /// A short name identifying the widget in faults.
    fn name(&self) -> &'static str;

    /// The widget's immutable capability declaration.
    fn capability(&self) -> &CapabilitySet;

    /// Number of quotient-challenge powers this widget consumes.
    fn challenge_arity(&self) -> usize;

    /// Number of opening-batch challenge powers this widget consumes.
    fn opening_arity(&self) -> usize {
        0
    }

    /// The ordered sequence of public selector commitments.
    fn instance(&self) -> Vec<Commitment>;

    /// Clones the widget, instance commitments included.
    ///
    /// Clones carry the full commitment sequence together with the
    /// capability set; a clone that dropped the instance would verify
    /// nothing while looking configured.
    fn clone_widget(&self) -> Box<dyn VerifierWidget>;

    /// Sanity-checks that every stored commitment lies on the curve.
    ///
    /// The identity point is permitted: an all-zero selector polynomial is a
    /// legitimate circuit configuration and commits to the identity.
    fn verify_instance_commitments(&self) -> bool {
        self.instance()
            .iter()
            .all(|c| bool::from(c.0.is_on_curve()) || bool::from(c.0.is_identity()))
    }

    /// Appends this widget's (point, scalar) pairs to the shared multiscalar
    /// multiplication inputs and returns the advanced accumulator, mirroring
    /// the prover's alpha/nu advancement exactly.
    fn append_scalar_multiplication_inputs(
        &self,
        challenge: ChallengeAccumulator,
        transcript: &Transcript,
        points: &mut Vec<G1Affine>,
        scalars: &mut Vec<BlsScalar>,
    ) -> Result<ChallengeAccumulator, Error>;

    /// Folds this widget's expected opening evaluations into the batch
    /// evaluation scalar. Returns the next `nu_base`.
    ///
    /// The default contributes nothing, matching the prover-side default of
    /// [`ProverWidget::compute_opening_poly_contribution`].
    fn compute_batch_evaluation_contribution(
        &self,
        _batch_eval: &mut BlsScalar,
        nu_base: &BlsScalar,
        _transcript: &Transcript,
    ) -> Result<BlsScalar, Error> {
        Ok(*nu_base)
    }

    /// Adds this widget's share of the quotient-polynomial evaluation
    /// reconstruction. The default is the identity: a gate whose constraint
    /// vanishes entirely under the linearization trick contributes nothing
    /// and leaves `alpha_base` unchanged.
    fn compute_quotient_evaluation_contribution(
        &self,
        alpha_base: &BlsScalar,
        _transcript: &Transcript,
        _quotient_eval: &mut BlsScalar,
    ) -> Result<BlsScalar, Error> {
        Ok(*alpha_base)
    }
}
