// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use super::proverkey::range_combination;
use crate::commitment_scheme::kzg10::Commitment;
use crate::error::Error;
use crate::proof_system::widget::{
    CapabilitySet, ChallengeAccumulator, VerifierWidget,
};
use crate::transcript::Transcript;
use dusk_bls12_381::{BlsScalar, G1Affine};

/// Verifier-side widget for the range gate, holding the preprocessed
/// selector commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeVerifier {
    pub(crate) capability: CapabilitySet,
    pub(crate) q_range: Commitment,
}

impl VerifierWidget for RangeVerifier {
    fn name(&self) -> &'static str {
        "range"
    }

    fn capability(&self) -> &CapabilitySet {
        &self.capability
    }

    fn challenge_arity(&self) -> usize {
        4
    }

    fn instance(&self) -> Vec<Commitment> {
        vec![self.q_range]
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
        let d_eval = transcript.get_element(b"d_eval")?;
        let d_next_eval = transcript.get_element(b"d_next_eval")?;

        let t = range_combination(
            &challenge.alpha_step,
            &a_eval,
            &b_eval,
            &c_eval,
            &d_eval,
            &d_next_eval,
        );

        scalars.push(t * challenge.alpha_base * challenge.linear_nu);
        points.push(self.q_range.0);

        Ok(challenge.advance_alpha(self.challenge_arity()))
    }
}
