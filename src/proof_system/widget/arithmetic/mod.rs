// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The arithmetic gate:
//! `(q_m * w_l * w_r + q_l * w_l + q_r * w_r + q_o * w_o + q_c) * q_arith = 0`.
//!
//! The gate-type selector `q_arith` switches the constraint on per row, so
//! rows occupied by other gate families leave it zero. The constraint is
//! fully linearized; the only polynomial this widget opens itself is
//! `q_arith`, whose evaluation at the challenge point it discloses so the
//! verifier can scale the linearization commitment terms with it.

mod proverkey;
mod verifierkey;

pub use verifierkey::ArithmeticVerifier;

use proverkey::ProverKey;

use crate::commitment_scheme::kzg10::CommitKey;
use crate::error::Error;
use crate::fft::{EvaluationDomain, Evaluations, Polynomial};
use crate::proof_system::circuit_state::{CircuitFftState, Wire};
use crate::proof_system::widget::{
    CapabilitySet, ChallengeAccumulator, Feature, ProverWidget, VerifierWidget,
};
use crate::transcript::Transcript;
use dusk_bls12_381::BlsScalar;
use rayon::prelude::*;

/// Prover-side widget for the arithmetic gate.
#[derive(Debug, Clone)]
pub struct ArithmeticWidget {
    capability: CapabilitySet,
    q_m: Vec<BlsScalar>,
    q_l: Vec<BlsScalar>,
    q_r: Vec<BlsScalar>,
    q_o: Vec<BlsScalar>,
    q_c: Vec<BlsScalar>,
    q_arith: Vec<BlsScalar>,
    key: Option<ProverKey>,
}

impl ArithmeticWidget {
    /// Builds the widget from the per-gate selector assignments. Columns
    /// shorter than the evaluation domain are padded with zeros.
    pub fn new(
        q_m: Vec<BlsScalar>,
        q_l: Vec<BlsScalar>,
        q_r: Vec<BlsScalar>,
        q_o: Vec<BlsScalar>,
        q_c: Vec<BlsScalar>,
        q_arith: Vec<BlsScalar>,
    ) -> ArithmeticWidget {
        ArithmeticWidget {
            capability: CapabilitySet::standard()
                .with_feature(Feature::ExtendedArithmetic),
            q_m,
            q_l,
            q_r,
            q_o,
            q_c,
            q_arith,
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

    fn selector_polys(
        &self,
        domain: &EvaluationDomain,
    ) -> Result<[Polynomial; 6], Error> {
        let columns = [
            &self.q_m, &self.q_l, &self.q_r, &self.q_o, &self.q_c,
            &self.q_arith,
        ];
        let mut polys: [Polynomial; 6] = Default::default();
        for (poly, column) in polys.iter_mut().zip(columns.iter()) {
            *poly = selector_poly(domain, column)?;
        }
        Ok(polys)
    }
}

impl ProverWidget for ArithmeticWidget {
    fn name(&self) -> &'static str {
        "arithmetic"
    }

    fn capability(&self) -> &CapabilitySet {
        &self.capability
    }

    fn challenge_arity(&self) -> usize {
        1
    }

    fn opening_arity(&self) -> usize {
        1
    }

    fn compute_quotient_contribution(
        &self,
        challenge: &ChallengeAccumulator,
        _transcript: &Transcript,
        state: &mut CircuitFftState,
    ) -> Result<BlsScalar, Error> {
        let key = self.key(state.domain().size())?;
        let alpha_base = challenge.alpha_base;

        let terms: Vec<BlsScalar> = {
            let state = &*state;
            (0..state.coset_size())
                .into_par_iter()
                .map(|i| {
                    let w_l_i = state.wire_eval(Wire::Left, i);
                    let w_r_i = state.wire_eval(Wire::Right, i);
                    let w_o_i = state.wire_eval(Wire::Output, i);
                    key.compute_quotient_i(i, &w_l_i, &w_r_i, &w_o_i)
                        * alpha_base
                })
                .collect()
        };
        state.add_quotient_contribution(&terms);

        Ok(challenge.alpha_base * challenge.alpha_step)
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
        let q_arith_eval = transcript.get_element(b"q_arith_eval")?;

        let contribution =
            key.compute_linearisation(&a_eval, &b_eval, &c_eval, &q_arith_eval);
        *lin_poly += (challenge.alpha_base, &contribution);

        Ok(challenge.alpha_base * challenge.alpha_step)
    }

    fn compute_opening_poly_contribution(
        &self,
        challenge: &ChallengeAccumulator,
        _transcript: &Transcript,
        opening_poly: &mut Polynomial,
        _shifted_opening_poly: &mut Polynomial,
        domain: &EvaluationDomain,
    ) -> Result<BlsScalar, Error> {
        let key = self.key(domain.size())?;
        *opening_poly += (challenge.nu_base, &key.q_arith.0);

        Ok(challenge.nu_base * challenge.nu_step)
    }

    fn compute_transcript_elements(
        &self,
        transcript: &mut Transcript,
        _state: &CircuitFftState,
        domain: &EvaluationDomain,
    ) -> Result<(), Error> {
        let key = self.key(domain.size())?;
        let z_challenge = transcript.get_element(b"z_challenge")?;

        let q_arith_eval = key.q_arith.0.evaluate(&z_challenge);
        transcript.append_scalar(b"q_arith_eval", &q_arith_eval);
        Ok(())
    }

    fn compute_preprocessed_commitments(
        &self,
        domain: &EvaluationDomain,
        commit_key: &CommitKey,
    ) -> Result<Box<dyn VerifierWidget>, Error> {
        let [q_m, q_l, q_r, q_o, q_c, q_arith] = self.selector_polys(domain)?;

        Ok(Box::new(ArithmeticVerifier {
            capability: self.capability,
            q_m: commit_key.commit(&q_m)?,
            q_l: commit_key.commit(&q_l)?,
            q_r: commit_key.commit(&q_r)?,
            q_o: commit_key.commit(&q_o)?,
            q_c: commit_key.commit(&q_c)?,
            q_arith: commit_key.commit(&q_arith)?,
        }))
    }

    fn reset(&mut self, domain: &EvaluationDomain) -> Result<(), Error> {
        let coset_domain = EvaluationDomain::new(8 * domain.size())?;
        let [q_m, q_l, q_r, q_o, q_c, q_arith] = self.selector_polys(domain)?;

        let extend = |poly: Polynomial| {
            let evals = Evaluations::from_vec_and_domain(
                coset_domain.coset_fft(&poly),
                coset_domain,
            );
            (poly, evals)
        };

        self.key = Some(ProverKey {
            q_m: extend(q_m),
            q_l: extend(q_l),
            q_r: extend(q_r),
            q_o: extend(q_o),
            q_c: extend(q_c),
            q_arith: extend(q_arith),
            domain_size: domain.size(),
        });
        Ok(())
    }
}

/// Interpolates a selector column over the domain, padding with zeros.
pub(crate) fn selector_poly(
    domain: &EvaluationDomain,
    column: &[BlsScalar],
) -> Result<Polynomial, Error> {
    if column.len() > domain.size() {
        return Err(Error::InvalidCircuitSize(column.len(), domain.size()));
    }
    Ok(Polynomial::from_coefficients_vec(domain.ifft(column)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::proof_system::widget::capability::Dependency;

    fn widget() -> ArithmeticWidget {
        // One multiplication gate: 3 * 2 - 6 = 0.
        ArithmeticWidget::new(
            vec![BlsScalar::one()],
            vec![],
            vec![],
            vec![-BlsScalar::one()],
            vec![],
            vec![BlsScalar::one()],
        )
    }

    #[test]
    fn quotient_before_reset_is_a_fault() {
        let domain = EvaluationDomain::new(4).unwrap();
        let wires = vec![BlsScalar::zero(); 4];
        let mut state = CircuitFftState::new(
            domain,
            [&wires, &wires, &wires, &wires],
            &[],
        )
        .unwrap();

        let widget = widget();
        let challenge = ChallengeAccumulator::from_alpha(BlsScalar::from(2));
        let transcript = Transcript::new(b"test");
        let result = widget.compute_quotient_contribution(
            &challenge,
            &transcript,
            &mut state,
        );
        assert_eq!(
            result,
            Err(Error::WidgetNotReset {
                widget: "arithmetic"
            })
        );
    }

    #[test]
    fn stale_scratch_is_a_fault() {
        let domain = EvaluationDomain::new(4).unwrap();
        let other_domain = EvaluationDomain::new(16).unwrap();
        let wires = vec![BlsScalar::zero(); 4];
        let mut state = CircuitFftState::new(
            domain,
            [&wires, &wires, &wires, &wires],
            &[],
        )
        .unwrap();

        let mut widget = widget();
        widget.reset(&other_domain).unwrap();

        let challenge = ChallengeAccumulator::from_alpha(BlsScalar::from(2));
        let transcript = Transcript::new(b"test");
        let result = widget.compute_quotient_contribution(
            &challenge,
            &transcript,
            &mut state,
        );
        assert_eq!(
            result,
            Err(Error::WidgetNotReset {
                widget: "arithmetic"
            })
        );
    }

    #[test]
    fn declares_no_shifted_dependencies() {
        let widget = widget();
        for dep in Dependency::ALL.iter() {
            assert!(!widget.capability().has_dependency(*dep));
        }
        assert!(widget.capability().has_feature(Feature::ExtendedArithmetic));
    }

    // A satisfying assignment makes the gate constraint vanish on every
    // domain point; breaking one gate's output leaves it nonzero there.
    #[test]
    fn gate_constraint_vanishes_on_satisfying_assignment() {
        let n = 4;
        let domain = EvaluationDomain::new(n).unwrap();

        // Gates: 3 * 2 = 6 and 4 + 5 = 9.
        let q_m = vec![BlsScalar::one(), BlsScalar::zero()];
        let q_l = vec![BlsScalar::zero(), BlsScalar::one()];
        let q_r = vec![BlsScalar::zero(), BlsScalar::one()];
        let q_o = vec![-BlsScalar::one(), -BlsScalar::one()];
        let q_c = vec![];
        let q_arith = vec![BlsScalar::one(), BlsScalar::one()];

        let a = vec![BlsScalar::from(3), BlsScalar::from(4)];
        let b = vec![BlsScalar::from(2), BlsScalar::from(5)];
        let c = vec![BlsScalar::from(6), BlsScalar::from(9)];

        let mut widget = ArithmeticWidget::new(q_m, q_l, q_r, q_o, q_c, q_arith);
        widget.reset(&domain).unwrap();
        let key = widget.key(n).unwrap();

        let pad = |col: &[BlsScalar]| {
            let mut col = col.to_vec();
            col.resize(n, BlsScalar::zero());
            col
        };
        let (a, b, mut c) = (pad(&a), pad(&b), pad(&c));

        // Evaluate the gate directly over the circuit domain.
        let gate_at = |a: &[BlsScalar], b: &[BlsScalar], c: &[BlsScalar], i: usize| {
            let q = |col: &(Polynomial, Evaluations), i: usize| {
                col.0.evaluate(&domain.elements().nth(i).unwrap())
            };
            (a[i] * b[i] * q(&key.q_m, i)
                + a[i] * q(&key.q_l, i)
                + b[i] * q(&key.q_r, i)
                + c[i] * q(&key.q_o, i)
                + q(&key.q_c, i))
                * q(&key.q_arith, i)
        };

        for i in 0..n {
            assert_eq!(gate_at(&a, &b, &c, i), BlsScalar::zero());
        }

        // Violate the first gate.
        c[0] = BlsScalar::from(7);
        assert_ne!(gate_at(&a, &b, &c, 0), BlsScalar::zero());
        for i in 1..n {
            assert_eq!(gate_at(&a, &b, &c, i), BlsScalar::zero());
        }
    }
}
