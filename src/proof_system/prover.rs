// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Prover-side widget orchestration.

use crate::commitment_scheme::kzg10::CommitKey;
use crate::error::Error;
use crate::fft::{EvaluationDomain, Polynomial};
use crate::proof_system::circuit_state::{CircuitFftState, Wire};
use crate::proof_system::proof::{Proof, ProofEvaluations};
use crate::proof_system::verifier::Verifier;
use crate::proof_system::widget::challenge::{self, ChallengeAccumulator};
use crate::proof_system::widget::{Dependency, ProverWidget};
use crate::proof_system::BASE_OPENINGS;
use crate::transcript::Transcript;
use crate::util;
use dusk_bls12_381::BlsScalar;

/// Drives an ordered list of [`ProverWidget`]s across a proving round.
///
/// The orchestrator owns the canonical widget order, the phase ordering
/// (quotient, then linearization, then opening, with the transcript
/// challenges drawn at fixed points in between), and the challenge-power
/// accumulator; it performs no gate-specific algebra itself. A widget that
/// advances the accumulator outside its declared arity aborts the round.
#[allow(missing_debug_implementations)]
pub struct Prover {
    label: &'static [u8],
    widgets: Vec<Box<dyn ProverWidget>>,
    domain: EvaluationDomain,
    /// Stores the messages exchanged during the preprocessing stage. This is
    /// copied each time we make a proof.
    preprocessed_transcript: Transcript,
}

impl Prover {
    /// Creates a new `Prover` for circuits with up to `num_gates` gates.
    pub fn new(label: &'static [u8], num_gates: usize) -> Result<Prover, Error> {
        Ok(Prover {
            label,
            widgets: Vec::new(),
            domain: EvaluationDomain::new(num_gates)?,
            preprocessed_transcript: Transcript::new(label),
        })
    }

    /// Appends a widget to the canonical widget order. The verifier must be
    /// built from the same widgets in the same order.
    pub fn add_widget(&mut self, widget: Box<dyn ProverWidget>) {
        self.widgets.push(widget);
    }

    /// The ordered widget list.
    pub fn widgets(&self) -> &[Box<dyn ProverWidget>] {
        &self.widgets
    }

    /// The evaluation domain the circuit is proved over.
    pub fn domain(&self) -> &EvaluationDomain {
        &self.domain
    }

    /// Resets every widget for the active domain, commits every widget's
    /// selector polynomials and returns the paired [`Verifier`].
    ///
    /// The verifier's transcript is seeded with the instance commitments in
    /// widget order; the prover keeps an identical copy, so both sides
    /// derive the same challenges.
    pub fn preprocess(&mut self, commit_key: &CommitKey) -> Result<Verifier, Error> {
        for widget in self.widgets.iter_mut() {
            widget.reset(&self.domain)?;
        }

        let verifier_widgets = self
            .widgets
            .iter()
            .map(|w| w.compute_preprocessed_commitments(&self.domain, commit_key))
            .collect::<Result<Vec<_>, Error>>()?;

        let verifier =
            Verifier::with_widgets(self.label, self.domain, verifier_widgets);
        self.preprocessed_transcript = verifier.preprocessed_transcript().clone();
        Ok(verifier)
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

    /// Creates a [`Proof`] that the four witness wires satisfy every gate
    /// constraint of the widget list.
    ///
    /// [`Prover::preprocess`] must have run first, so the widgets carry
    /// scratch for the active domain and the transcript is seeded with the
    /// instance commitments.
    pub fn prove(
        &self,
        commit_key: &CommitKey,
        a_w: &[BlsScalar],
        b_w: &[BlsScalar],
        c_w: &[BlsScalar],
        d_w: &[BlsScalar],
    ) -> Result<Proof, Error> {
        let domain = &self.domain;
        let mut transcript = self.preprocessed_transcript.clone();

        let shifts = self.shifted_dependencies();
        let mut state =
            CircuitFftState::new(*domain, [a_w, b_w, c_w, d_w], &shifts)?;

        // Round 1: commit to the witness wires.
        let a_comm = commit_key.commit(state.wire_poly(Wire::Left))?;
        let b_comm = commit_key.commit(state.wire_poly(Wire::Right))?;
        let c_comm = commit_key.commit(state.wire_poly(Wire::Output))?;
        let d_comm = commit_key.commit(state.wire_poly(Wire::Fourth))?;

        transcript.append_commitment(b"w_l", &a_comm);
        transcript.append_commitment(b"w_r", &b_comm);
        transcript.append_commitment(b"w_o", &c_comm);
        transcript.append_commitment(b"w_4", &d_comm);

        // Round 2: compute the quotient polynomial. The alpha powers are
        // assigned to widgets by a sequential pre-pass; only then may the
        // per-widget arithmetic run (internally) in parallel.
        let alpha = transcript.challenge_scalar(b"alpha");
        let arities: Vec<_> =
            self.widgets.iter().map(|w| w.challenge_arity()).collect();
        let schedule = challenge::alpha_schedule(
            ChallengeAccumulator::from_alpha(alpha),
            &arities,
        );

        for (widget, window) in self.widgets.iter().zip(schedule.windows(2)) {
            let returned = widget.compute_quotient_contribution(
                &window[0],
                &transcript,
                &mut state,
            )?;
            window[0].expect_alpha_advance(
                widget.challenge_arity(),
                &returned,
                widget.name(),
            )?;
        }

        let t_poly = state.quotient_poly();
        let t_comm = commit_key.commit(&t_poly)?;
        transcript.append_commitment(b"t", &t_comm);

        // Round 3: disclose the evaluations at the challenge point: the wire
        // evaluations, then the shifted wire evaluations the widget list
        // depends on, then every widget's own elements.
        let z_challenge = transcript.challenge_scalar(b"z_challenge");
        let shifted_z = z_challenge * domain.group_gen();

        let a_eval = state.wire_poly(Wire::Left).evaluate(&z_challenge);
        let b_eval = state.wire_poly(Wire::Right).evaluate(&z_challenge);
        let c_eval = state.wire_poly(Wire::Output).evaluate(&z_challenge);
        let d_eval = state.wire_poly(Wire::Fourth).evaluate(&z_challenge);

        transcript.append_scalar(b"a_eval", &a_eval);
        transcript.append_scalar(b"b_eval", &b_eval);
        transcript.append_scalar(b"c_eval", &c_eval);
        transcript.append_scalar(b"d_eval", &d_eval);

        let aux_mark = transcript.num_elements();
        for dep in shifts.iter() {
            let eval =
                state.wire_poly(Wire::from(*dep)).evaluate(&shifted_z);
            transcript.append_scalar(dep.shifted_eval_label(), &eval);
        }
        for widget in self.widgets.iter() {
            widget.compute_transcript_elements(&mut transcript, &state, domain)?;
        }
        let aux_evals = transcript.elements_from(aux_mark).to_vec();

        // Round 4: compute the linearization polynomial, re-running the same
        // alpha schedule as the quotient round.
        let mut lin_poly = Polynomial::zero();
        for (widget, window) in self.widgets.iter().zip(schedule.windows(2)) {
            let returned = widget.compute_linear_contribution(
                &window[0],
                &transcript,
                domain,
                &mut lin_poly,
            )?;
            window[0].expect_alpha_advance(
                widget.challenge_arity(),
                &returned,
                widget.name(),
            )?;
        }

        let r_poly_eval = lin_poly.evaluate(&z_challenge);
        transcript.append_scalar(b"r_eval", &r_poly_eval);

        // Round 5: fold every polynomial to be opened into the two batched
        // opening polynomials. The orchestrator folds the quotient, the
        // linearization polynomial and the wires; widgets fold their own
        // extras; the shifted wires close the sequence.
        let nu = transcript.challenge_scalar(b"nu_challenge");
        let nu_powers = util::powers_of(&nu, BASE_OPENINGS);

        let mut opening_poly = t_poly;
        opening_poly += (nu_powers[1], &lin_poly);
        opening_poly += (nu_powers[2], state.wire_poly(Wire::Left));
        opening_poly += (nu_powers[3], state.wire_poly(Wire::Right));
        opening_poly += (nu_powers[4], state.wire_poly(Wire::Output));
        opening_poly += (nu_powers[5], state.wire_poly(Wire::Fourth));

        let mut shifted_opening_poly = Polynomial::zero();
        let mut acc = ChallengeAccumulator::from_alpha(alpha)
            .with_opening_challenge(nu_powers[BASE_OPENINGS], nu, nu_powers[1]);
        for widget in self.widgets.iter() {
            let returned = widget.compute_opening_poly_contribution(
                &acc,
                &transcript,
                &mut opening_poly,
                &mut shifted_opening_poly,
                domain,
            )?;
            acc = acc.expect_nu_advance(
                widget.opening_arity(),
                &returned,
                widget.name(),
            )?;
        }
        for dep in shifts.iter() {
            shifted_opening_poly +=
                (acc.nu_base, state.wire_poly(Wire::from(*dep)));
            acc = acc.advance_nu(1);
        }

        // The opening witnesses: Ruffini division discards exactly the
        // batched evaluation, so no explicit subtraction is needed.
        let w_z_comm = commit_key.commit(&opening_poly.ruffini(z_challenge))?;
        let w_z_w_comm =
            commit_key.commit(&shifted_opening_poly.ruffini(shifted_z))?;

        transcript.append_commitment(b"w_z", &w_z_comm);
        transcript.append_commitment(b"w_z_w", &w_z_w_comm);

        Ok(Proof {
            a_comm,
            b_comm,
            c_comm,
            d_comm,
            t_comm,
            w_z_comm,
            w_z_w_comm,
            evaluations: ProofEvaluations {
                a_eval,
                b_eval,
                c_eval,
                d_eval,
                r_poly_eval,
                aux_evals,
            },
        })
    }
}
