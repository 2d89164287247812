// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The base-4 range gate. A row constrains the accumulators
//! `a, b, c, d, d_next` to differ by one base-4 digit each:
//! `Delta(c - 4d) + Delta(b - 4c) * alpha + Delta(a - 4b) * alpha^2 +
//! Delta(d_next - 4a) * alpha^3`, scaled by `q_range`, where
//! `Delta(f) = f(f-1)(f-2)(f-3)` vanishes exactly on quads.
//!
//! The `d_next` term reads the fourth wire at the next trace row, so the
//! widget declares the fourth-wire-shifted dependency; the orchestrator
//! precomputes the shifted table and opens the fourth wire at the shifted
//! evaluation point on its behalf. The gate is fully linearized and opens no
//! polynomial of its own, so the default opening and batch-evaluation
//! contributions apply.

mod proverkey;
mod verifierkey;

pub use verifierkey::RangeVerifier;

use proverkey::ProverKey;

use crate::commitment_scheme::kzg10::CommitKey;
use crate::error::Error;
use crate::fft::{EvaluationDomain, Evaluations, Polynomial};
use crate::proof_system::circuit_state::{CircuitFftState, Wire};
use crate::proof_system::widget::arithmetic::selector_poly;
use crate::proof_system::widget::{
    CapabilitySet, ChallengeAccumulator, Dependency, Feature, ProverWidget,
    VerifierWidget,
};
use crate::transcript::Transcript;
use dusk_bls12_381::BlsScalar;
use rayon::prelude::*;

/// Prover-side widget for the range gate.
#[derive(Debug, Clone)]
pub struct RangeWidget {
    capability: CapabilitySet,
    q_range: Vec<BlsScalar>,
    key: Option<ProverKey>,
}

impl RangeWidget {
    /// Builds the widget from the per-gate range selector assignment.
    pub fn new(q_range: Vec<BlsScalar>) -> RangeWidget {
        RangeWidget {
            capability: CapabilitySet::standard()
                .with_dependency(Dependency::FourthWireShifted)
                .with_feature(Feature::TurboArithmetic),
            q_range,
            key: None,
        }
    }

    fn key(&self, state_domain_size: usize) -> Result<&ProverKey, Error> {
        match &self.key {
            Some(key) if key.domain_size == state_domain_size => Ok(key),
            _ => Err(Error::WidgetNotReset {
                widget: self.name(),
            }),
        }
    }
}

impl ProverWidget for RangeWidget {
    fn name(&self) -> &'static str {
        "range"
    }

    fn capability(&self) -> &CapabilitySet {
        &self.capability
    }

    fn challenge_arity(&self) -> usize {
        // One power per quad decomposition check.
        4
    }

    fn compute_quotient_contribution(
        &self,
        challenge: &ChallengeAccumulator,
        _transcript: &Transcript,
        state: &mut CircuitFftState,
    ) -> Result<BlsScalar, Error> {
        let key = self.key(state.domain().size())?;
        let alpha_base = challenge.alpha_base;
        let alpha = challenge.alpha_step;

        let terms: Result<Vec<BlsScalar>, Error> = {
            let state = &*state;
            (0..state.coset_size())
                .into_par_iter()
                .map(|i| {
                    let w_l_i = state.wire_eval(Wire::Left, i);
                    let w_r_i = state.wire_eval(Wire::Right, i);
                    let w_o_i = state.wire_eval(Wire::Output, i);
                    let w_4_i = state.wire_eval(Wire::Fourth, i);
                    let w_4_i_next = state.wire_next_eval(Wire::Fourth, i)?;
                    Ok(key.compute_quotient_i(
                        i,
                        &alpha,
                        &w_l_i,
                        &w_r_i,
                        &w_o_i,
                        &w_4_i,
                        &w_4_i_next,
                    ) * alpha_base)
                })
                .collect()
        };
        state.add_quotient_contribution(&terms?);

        Ok(challenge.advance_alpha(self.challenge_arity()).alpha_base)
    }

    fn compute_linear_contribution(
        &self,
        challenge: &ChallengeAccumulator,
        transcript: &Transcript,
        domain: &EvaluationDomain,
        lin_poly: &mut Polynomial,
    ) -> Result<BlsScalar, Error> {
        let key = self.key(domain.size())?;
        let a_eval = transcript.get_element(b"a_eval")?;
        let b_eval = transcript.get_element(b"b_eval")?;
        let c_eval = transcript.get_element(b"c_eval")?;
        let d_eval = transcript.get_element(b"d_eval")?;
        let d_next_eval = transcript.get_element(b"d_next_eval")?;

        let contribution = key.compute_linearisation(
            &challenge.alpha_step,
            &a_eval,
            &b_eval,
            &c_eval,
            &d_eval,
            &d_next_eval,
        );
        *lin_poly += (challenge.alpha_base, &contribution);

        Ok(challenge.advance_alpha(self.challenge_arity()).alpha_base)
    }

    fn compute_preprocessed_commitments(
        &self,
        domain: &EvaluationDomain,
        commit_key: &CommitKey,
    ) -> Result<Box<dyn VerifierWidget>, Error> {
        let q_range = selector_poly(domain, &self.q_range)?;

        Ok(Box::new(RangeVerifier {
            capability: self.capability,
            q_range: commit_key.commit(&q_range)?,
        }))
    }

    fn reset(&mut self, domain: &EvaluationDomain) -> Result<(), Error> {
        let coset_domain = EvaluationDomain::new(8 * domain.size())?;
        let q_range = selector_poly(domain, &self.q_range)?;

        let evals = Evaluations::from_vec_and_domain(
            coset_domain.coset_fft(&q_range),
            coset_domain,
        );
        self.key = Some(ProverKey {
            q_range: (q_range, evals),
            domain_size: domain.size(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_fourth_wire_shift_is_a_fault() {
        let domain = EvaluationDomain::new(4).unwrap();
        let wires = vec![BlsScalar::zero(); 4];
        // The circuit state is built without any shifted tables, against
        // the widget's declared dependency.
        let mut state = CircuitFftState::new(
            domain,
            [&wires, &wires, &wires, &wires],
            &[],
        )
        .unwrap();

        let mut widget = RangeWidget::new(vec![BlsScalar::one()]);
        widget.reset(&domain).unwrap();

        let challenge = ChallengeAccumulator::from_alpha(BlsScalar::from(2));
        let transcript = Transcript::new(b"test");
        let result = widget.compute_quotient_contribution(
            &challenge,
            &transcript,
            &mut state,
        );
        assert_eq!(
            result,
            Err(Error::MissingShiftedWitness { wire: Wire::Fourth })
        );
    }

    #[test]
    fn declares_fourth_wire_dependency() {
        let widget = RangeWidget::new(vec![]);
        assert!(widget
            .capability()
            .has_dependency(Dependency::FourthWireShifted));
        assert!(!widget
            .capability()
            .has_dependency(Dependency::LeftWireShifted));
        assert!(widget.capability().has_feature(Feature::TurboArithmetic));
    }
}
