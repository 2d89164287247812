// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Verifier-side widget orchestration.

use crate::commitment_scheme::kzg10::{Commitment, OpeningKey};
use crate::error::Error;
use crate::fft::EvaluationDomain;
use crate::proof_system::circuit_state::Wire;
use crate::proof_system::proof::Proof;
use crate::proof_system::widget::{
    ChallengeAccumulator, Dependency, VerifierWidget,
};
use crate::proof_system::BASE_OPENINGS;
use crate::transcript::Transcript;
use crate::util;
use dusk_bls12_381::{
    multiscalar_mul::msm_variable_base, BlsScalar, G1Affine, G1Projective,
};

/// Drives the mirrored list of [`VerifierWidget`]s across a verification.
///
/// For a given circuit, the widget list, its capability sets and its
/// per-widget arities must be identical to the prover list used to build the
/// proof. The verifier replays the prover's transcript, accumulates a single
/// multiscalar multiplication and a single batch-evaluation scalar across
/// all widgets, and accepts iff the final batched opening check holds.
#[allow(missing_debug_implementations)]
pub struct Verifier {
    widgets: Vec<Box<dyn VerifierWidget>>,
    domain: EvaluationDomain,
    preprocessed_transcript: Transcript,
}

impl Verifier {
    /// Builds a verifier from an ordered widget list for circuits with up to
    /// `num_gates` gates.
    pub fn new(
        label: &'static [u8],
        num_gates: usize,
        widgets: Vec<Box<dyn VerifierWidget>>,
    ) -> Result<Verifier, Error> {
        Ok(Verifier::with_widgets(
            label,
            EvaluationDomain::new(num_gates)?,
            widgets,
        ))
    }

    pub(crate) fn with_widgets(
        label: &'static [u8],
        domain: EvaluationDomain,
        widgets: Vec<Box<dyn VerifierWidget>>,
    ) -> Verifier {
        let mut transcript = Transcript::new(label);
        transcript.circuit_domain_sep(domain.size() as u64);
        for widget in widgets.iter() {
            for commitment in widget.instance() {
                transcript.append_commitment(b"selector", &commitment);
            }
        }

        Verifier {
            widgets,
            domain,
            preprocessed_transcript: transcript,
        }
    }

    /// The ordered widget list.
    pub fn widgets(&self) -> &[Box<dyn VerifierWidget>] {
        &self.widgets
    }

    /// Consumes the verifier, returning its widget list.
    pub fn into_widgets(self) -> Vec<Box<dyn VerifierWidget>> {
        self.widgets
    }

    pub(crate) fn preprocessed_transcript(&self) -> &Transcript {
        &self.preprocessed_transcript
    }

    /// The shifted-wire dependencies of the widget list, in canonical order.
    fn shifted_dependencies(&self) -> Vec<Dependency> {
        Dependency::ALL
            .iter()
            .copied()
            .filter(|dep| {
                self.widgets
                    .iter()
                    .any(|w| w.capability().has_dependency(*dep))
            })
            .collect()
    }

    /// Performs the verification of a [`Proof`].
    ///
    /// An invalid proof yields [`Error::ProofVerificationError`]; it is an
    /// expected outcome when processing untrusted data, not a fault.
    pub fn verify(
        &self,
        proof: &Proof,
        opening_key: &OpeningKey,
    ) -> Result<(), Error> {
        let domain = &self.domain;

        // Corrupted setup data never reaches the pairing check.
        for widget in self.widgets.iter() {
            if !widget.verify_instance_commitments() {
                return Err(Error::ProofVerificationError);
            }
        }

        // Replay the prover's view of the transcript, so both sides derive
        // the same challenges.
        let mut transcript = self.preprocessed_transcript.clone();
        transcript.append_commitment(b"w_l", &proof.a_comm);
        transcript.append_commitment(b"w_r", &proof.b_comm);
        transcript.append_commitment(b"w_o", &proof.c_comm);
        transcript.append_commitment(b"w_4", &proof.d_comm);

        let alpha = transcript.challenge_scalar(b"alpha");

        transcript.append_commitment(b"t", &proof.t_comm);
        let z_challenge = transcript.challenge_scalar(b"z_challenge");

        transcript.append_scalar(b"a_eval", &proof.evaluations.a_eval);
        transcript.append_scalar(b"b_eval", &proof.evaluations.b_eval);
        transcript.append_scalar(b"c_eval", &proof.evaluations.c_eval);
        transcript.append_scalar(b"d_eval", &proof.evaluations.d_eval);
        for &(label, eval) in proof.evaluations.aux_evals.iter() {
            transcript.append_scalar(label, &eval);
        }
        transcript.append_scalar(b"r_eval", &proof.evaluations.r_poly_eval);

        // Reconstruct the quotient evaluation at the challenge point from
        // the linearization evaluation plus whatever the widgets' constraints
        // left outside the linearization trick.
        let z_h_eval = domain.evaluate_vanishing_polynomial(&z_challenge);
        let z_h_inv = z_h_eval.invert();
        if bool::from(z_h_inv.is_none()) {
            return Err(Error::ProofVerificationError);
        }
        let mut quotient_eval = BlsScalar::zero();
        let mut alpha_base = alpha;
        for widget in self.widgets.iter() {
            alpha_base = widget.compute_quotient_evaluation_contribution(
                &alpha_base,
                &transcript,
                &mut quotient_eval,
            )?;
        }
        let t_eval = (proof.evaluations.r_poly_eval + quotient_eval)
            * z_h_inv.unwrap();

        let nu = transcript.challenge_scalar(b"nu_challenge");
        let nu_powers = util::powers_of(&nu, BASE_OPENINGS);

        // Accumulate the single batched multiscalar multiplication: the
        // quotient and wire commitments with their nu powers, then every
        // widget's linearization and opening terms under the shared
        // challenge schedule.
        let mut points: Vec<G1Affine> = Vec::new();
        let mut scalars: Vec<BlsScalar> = Vec::new();

        points.push(proof.t_comm.0);
        scalars.push(BlsScalar::one());
        points.push(proof.a_comm.0);
        scalars.push(nu_powers[2]);
        points.push(proof.b_comm.0);
        scalars.push(nu_powers[3]);
        points.push(proof.c_comm.0);
        scalars.push(nu_powers[4]);
        points.push(proof.d_comm.0);
        scalars.push(nu_powers[5]);

        let mut acc = ChallengeAccumulator::from_alpha(alpha)
            .with_opening_challenge(
                nu_powers[BASE_OPENINGS],
                nu,
                nu_powers[1],
            );
        for widget in self.widgets.iter() {
            let returned = widget.append_scalar_multiplication_inputs(
                acc,
                &transcript,
                &mut points,
                &mut scalars,
            )?;
            acc = acc.expect_advance(
                widget.challenge_arity(),
                widget.opening_arity(),
                &returned,
                widget.name(),
            )?;
        }

        // The matching batch-evaluation scalar.
        let mut batch_eval = t_eval
            + nu_powers[1] * proof.evaluations.r_poly_eval
            + nu_powers[2] * proof.evaluations.a_eval
            + nu_powers[3] * proof.evaluations.b_eval
            + nu_powers[4] * proof.evaluations.c_eval
            + nu_powers[5] * proof.evaluations.d_eval;
        let mut nu_base = nu_powers[BASE_OPENINGS];
        for widget in self.widgets.iter() {
            let returned = widget.compute_batch_evaluation_contribution(
                &mut batch_eval,
                &nu_base,
                &transcript,
            )?;
            let mut expected = nu_base;
            for _ in 0..widget.opening_arity() {
                expected *= nu;
            }
            if returned != expected {
                return Err(Error::ChallengeScheduleViolation {
                    widget: widget.name(),
                });
            }
            nu_base = expected;
        }

        // The shifted openings, gathered separately: their terms carry the
        // aggregation challenge, which is drawn only after the opening
        // commitments join the transcript.
        let mut shifted_points: Vec<G1Affine> = Vec::new();
        let mut shifted_scalars: Vec<BlsScalar> = Vec::new();
        let mut shifted_batch_eval = BlsScalar::zero();
        let mut nu_base = acc.nu_base;
        for dep in self.shifted_dependencies() {
            let comm = self.wire_commitment(proof, Wire::from(dep));
            let eval = transcript.get_element(dep.shifted_eval_label())?;

            shifted_points.push(comm.0);
            shifted_scalars.push(nu_base);
            shifted_batch_eval += nu_base * eval;
            nu_base *= nu;
        }

        transcript.append_commitment(b"w_z", &proof.w_z_comm);
        transcript.append_commitment(b"w_z_w", &proof.w_z_w_comm);
        let u = transcript.challenge_scalar(b"aggregate_challenge");

        // Close the multiscalar multiplication with the aggregated shifted
        // group, the evaluation-point terms of the two opening witnesses and
        // the batched evaluation.
        for (point, scalar) in
            shifted_points.into_iter().zip(shifted_scalars)
        {
            points.push(point);
            scalars.push(u * scalar);
        }
        points.push(proof.w_z_comm.0);
        scalars.push(z_challenge);
        points.push(proof.w_z_w_comm.0);
        scalars.push(u * z_challenge * domain.group_gen());

        batch_eval += u * shifted_batch_eval;
        points.push(opening_key.g);
        scalars.push(-batch_eval);

        let msm_result = msm_variable_base(&points, &scalars);
        let witnesses =
            G1Projective::from(proof.w_z_comm.0) + proof.w_z_w_comm.0 * u;

        match opening_key
            .batch_opening_check(msm_result.into(), witnesses.into())
        {
            true => Ok(()),
            false => Err(Error::ProofVerificationError),
        }
    }

    fn wire_commitment(&self, proof: &Proof, wire: Wire) -> Commitment {
        match wire {
            Wire::Left => proof.a_comm,
            Wire::Right => proof.b_comm,
            Wire::Output => proof.c_comm,
            Wire::Fourth => proof.d_comm,
        }
    }
}
