// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The per-round FFT view of the circuit witness.
//!
//! Widgets evaluate their gate constraints pointwise over a coset of an
//! extended domain eight times the circuit size, which is large enough for
//! every gate shipped here (the range gate multiplies four wire factors).
//! The state owns the shared quotient accumulation buffer; widgets add their
//! alpha-scaled constraint evaluations into it and never retain the borrow
//! beyond one call.

use crate::error::Error;
use crate::fft::{EvaluationDomain, Polynomial};
use crate::proof_system::widget::capability::Dependency;
use crate::util;
use dusk_bls12_381::BlsScalar;
use itertools::izip;

/// The witness wires of the arithmetization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wire {
    /// The left input wire.
    Left,
    /// The right input wire.
    Right,
    /// The output wire.
    Output,
    /// The fourth advice wire.
    Fourth,
}

impl Wire {
    fn index(self) -> usize {
        match self {
            Wire::Left => 0,
            Wire::Right => 1,
            Wire::Output => 2,
            Wire::Fourth => 3,
        }
    }
}

impl From<Dependency> for Wire {
    fn from(dependency: Dependency) -> Wire {
        match dependency {
            Dependency::LeftWireShifted => Wire::Left,
            Dependency::RightWireShifted => Wire::Right,
            Dependency::OutputWireShifted => Wire::Output,
            Dependency::FourthWireShifted => Wire::Fourth,
        }
    }
}

// The extended domain is eight times the circuit domain, so the evaluation
// at the next circuit-domain position sits eight slots further.
const COSET_BLOWUP: usize = 8;

/// Witness polynomials and their coset evaluations for one proving round,
/// together with the shared quotient accumulation buffer.
#[derive(Debug)]
pub struct CircuitFftState {
    domain: EvaluationDomain,
    coset_domain: EvaluationDomain,
    wire_polys: [Polynomial; 4],
    wire_evals: [Vec<BlsScalar>; 4],
    shifted: [bool; 4],
    quotient: Vec<BlsScalar>,
    v_h_coset_inv: Vec<BlsScalar>,
}

impl CircuitFftState {
    /// Builds the FFT view of the four witness wires over `domain`.
    ///
    /// Shifted evaluation tables are precomputed only for the wires named in
    /// `shifts`; the orchestrator derives that list from the union of the
    /// widgets' declared dependencies.
    pub fn new(
        domain: EvaluationDomain,
        wires: [&[BlsScalar]; 4],
        shifts: &[Dependency],
    ) -> Result<CircuitFftState, Error> {
        let n = domain.size();
        let coset_domain = EvaluationDomain::new(COSET_BLOWUP * n)?;

        let mut shifted = [false; 4];
        for dep in shifts {
            shifted[Wire::from(*dep).index()] = true;
        }

        let mut wire_polys: [Polynomial; 4] = Default::default();
        let mut wire_evals: [Vec<BlsScalar>; 4] = Default::default();
        for (i, wire) in wires.iter().enumerate() {
            if wire.len() > n {
                return Err(Error::InvalidCircuitSize(wire.len(), n));
            }
            let mut padded = wire.to_vec();
            padded.resize(n, BlsScalar::zero());

            let poly = Polynomial::from_coefficients_vec(domain.ifft(&padded));
            let mut evals = coset_domain.coset_fft(&poly);
            if shifted[i] {
                for j in 0..COSET_BLOWUP {
                    let wrap = evals[j];
                    evals.push(wrap);
                }
            }
            wire_polys[i] = poly;
            wire_evals[i] = evals;
        }

        // The vanishing polynomial never vanishes on the coset, so the
        // elementwise inverses exist.
        let mut v_h_coset_inv = coset_domain
            .compute_vanishing_poly_over_coset(n as u64)
            .evals;
        util::batch_inversion(&mut v_h_coset_inv);

        Ok(CircuitFftState {
            domain,
            coset_domain,
            wire_polys,
            wire_evals,
            shifted,
            quotient: vec![BlsScalar::zero(); COSET_BLOWUP * n],
            v_h_coset_inv,
        })
    }

    /// The circuit's evaluation domain.
    pub fn domain(&self) -> &EvaluationDomain {
        &self.domain
    }

    /// Number of evaluation points in the extended coset domain.
    pub fn coset_size(&self) -> usize {
        self.coset_domain.size()
    }

    /// The coset evaluation of a wire at extended-domain position `i`.
    pub fn wire_eval(&self, wire: Wire, i: usize) -> BlsScalar {
        self.wire_evals[wire.index()][i]
    }

    /// The coset evaluation of a wire at the position one circuit-domain
    /// step after `i`.
    ///
    /// Fails when the wire's shifted table was not requested at
    /// construction: silently reading a wrong value here would corrupt the
    /// quotient without any detectable symptom.
    pub fn wire_next_eval(&self, wire: Wire, i: usize) -> Result<BlsScalar, Error> {
        if !self.shifted[wire.index()] {
            return Err(Error::MissingShiftedWitness { wire });
        }
        Ok(self.wire_evals[wire.index()][i + COSET_BLOWUP])
    }

    /// The coefficient form of a wire polynomial.
    pub fn wire_poly(&self, wire: Wire) -> &Polynomial {
        &self.wire_polys[wire.index()]
    }

    /// Adds a widget's constraint evaluations into the shared quotient
    /// buffer. `terms` must cover the full extended domain.
    pub fn add_quotient_contribution(&mut self, terms: &[BlsScalar]) {
        debug_assert_eq!(terms.len(), self.quotient.len());
        for (q, t) in self.quotient.iter_mut().zip(terms) {
            *q += t;
        }
    }

    /// Divides the accumulated constraint evaluations by the vanishing
    /// polynomial over the coset and returns the quotient in coefficient
    /// form.
    pub(crate) fn quotient_poly(&self) -> Polynomial {
        let quotient: Vec<_> = izip!(&self.quotient, &self.v_h_coset_inv)
            .map(|(numerator, v_h_inv)| numerator * v_h_inv)
            .collect();

        Polynomial::from_coefficients_vec(self.coset_domain.coset_ifft(&quotient))
    }
}
