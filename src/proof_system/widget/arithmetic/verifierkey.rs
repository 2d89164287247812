// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::commitment_scheme::kzg10::Commitment;
use crate::error::Error;
use crate::proof_system::widget::{
    CapabilitySet, ChallengeAccumulator, VerifierWidget,
};
use crate::transcript::Transcript;
use dusk_bls12_381::{BlsScalar, G1Affine};

/// Verifier-side widget for the arithmetic gate, holding the preprocessed
/// selector commitments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticVerifier {
    pub(crate) capability: CapabilitySet,
    pub(crate) q_m: Commitment,
    pub(crate) q_l: Commitment,
    pub(crate) q_r: Commitment,
    pub(crate) q_o: Commitment,
    pub(crate) q_c: Commitment,
    pub(crate) q_arith: Commitment,
}

impl VerifierWidget for ArithmeticVerifier {
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

    fn instance(&self) -> Vec<Commitment> {
        vec![
            self.q_m, self.q_l, self.q_r, self.q_o, self.q_c, self.q_arith,
        ]
    }

    fn clone_widget(&self) -> Box<dyn VerifierWidget> {
        Box::new(*self)
    }

    fn append_scalar_multiplication_inputs(
        &self,
        challenge: ChallengeAccumulator,
        transcript: &Transcript,
        points: &mut Vec<G1Affine>,
        scalars: &mut Vec<BlsScalar>,
    ) -> Result<ChallengeAccumulator, Error> {
        let a_eval = transcript.get_element(b"a_eval")?;
        let b_eval = transcript.get_element(b"b_eval")?;
        let c_eval = transcript.get_element(b"c_eval")?;
        let q_arith_eval = transcript.get_element(b"q_arith_eval")?;

        // The linearization commitment terms, mirroring the prover's
        // `compute_linearisation` with the nu power reserved for `r(X)`.
        let lin = challenge.alpha_base * challenge.linear_nu * q_arith_eval;

        scalars.push(a_eval * b_eval * lin);
        points.push(self.q_m.0);

        scalars.push(a_eval * lin);
        points.push(self.q_l.0);

        scalars.push(b_eval * lin);
        points.push(self.q_r.0);

        scalars.push(c_eval * lin);
        points.push(self.q_o.0);

        scalars.push(lin);
        points.push(self.q_c.0);

        // The widget's own opening of q_arith at the challenge point.
        scalars.push(challenge.nu_base);
        points.push(self.q_arith.0);

        Ok(challenge.advance_alpha(1).advance_nu(1))
    }

    fn compute_batch_evaluation_contribution(
        &self,
        batch_eval: &mut BlsScalar,
        nu_base: &BlsScalar,
        transcript: &Transcript,
    ) -> Result<BlsScalar, Error> {
        let q_arith_eval = transcript.get_element(b"q_arith_eval")?;
        let nu_step = transcript.get_element(b"nu_challenge")?;

        *batch_eval += nu_base * q_arith_eval;
        Ok(nu_base * nu_step)
    }
}
