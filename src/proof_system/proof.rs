// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! A Proof stores the commitments and disclosed evaluations that univocally
//! identify a proof of some statement.

use crate::commitment_scheme::kzg10::Commitment;
use dusk_bls12_381::BlsScalar;

/// A Proof is a composition of `Commitment`s to the witness, quotient and
/// opening polynomials as well as the disclosed evaluations at the challenge
/// point.
///
/// Serialization of the proof object belongs to the surrounding service
/// layer, not to this core.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Proof {
    /// Commitment to the witness polynomial for the left wires.
    pub a_comm: Commitment,
    /// Commitment to the witness polynomial for the right wires.
    pub b_comm: Commitment,
    /// Commitment to the witness polynomial for the output wires.
    pub c_comm: Commitment,
    /// Commitment to the witness polynomial for the fourth wires.
    pub d_comm: Commitment,

    /// Commitment to the quotient polynomial.
    pub t_comm: Commitment,

    /// Commitment to the opening polynomial at the evaluation challenge.
    pub w_z_comm: Commitment,
    /// Commitment to the opening polynomial at the shifted evaluation
    /// challenge.
    pub w_z_w_comm: Commitment,

    /// Subset of all of the evaluations added to the proof.
    pub evaluations: ProofEvaluations,
}

/// The evaluations the prover disclosed at the challenge point.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct ProofEvaluations {
    /// Evaluation of the left witness polynomial.
    pub a_eval: BlsScalar,
    /// Evaluation of the right witness polynomial.
    pub b_eval: BlsScalar,
    /// Evaluation of the output witness polynomial.
    pub c_eval: BlsScalar,
    /// Evaluation of the fourth witness polynomial.
    pub d_eval: BlsScalar,
    /// Evaluation of the linearization polynomial.
    pub r_poly_eval: BlsScalar,
    /// Labeled evaluations disclosed after the wire evaluations: the shifted
    /// wire evaluations the widget list depends on, followed by every
    /// widget's own transcript elements, in widget order.
    pub aux_evals: Vec<(&'static [u8], BlsScalar)>,
}
