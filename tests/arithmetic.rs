// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod common;

use common::{arithmetic_circuit, prove_and_pair, setup_params};
use plonk_widgets::prelude::*;

const N: usize = 4;

#[test]
fn satisfying_assignment_verifies() {
    let (ck, ok) = setup_params(N);
    let (widget, witness) = arithmetic_circuit();

    let (proof, verifier) =
        prove_and_pair(b"arith", N, vec![Box::new(widget)], &witness, &ck);
    assert!(verifier.verify(&proof, &ok).is_ok());
}

#[test]
fn violated_gate_is_rejected() {
    let (ck, ok) = setup_params(N);
    let (widget, mut witness) = arithmetic_circuit();

    // Break the multiplication gate's output: 3 * 2 != 7.
    witness.c[0] = BlsScalar::from(7);

    let (proof, verifier) =
        prove_and_pair(b"arith", N, vec![Box::new(widget)], &witness, &ck);
    assert_eq!(
        verifier.verify(&proof, &ok),
        Err(Error::ProofVerificationError)
    );
}

#[test]
fn all_zero_selectors_are_a_valid_circuit() {
    let (ck, ok) = setup_params(N);

    // Every selector column zero: the gate is satisfied by any witness and
    // every instance commitment is the identity point.
    let widget = ArithmeticWidget::new(
        vec![],
        vec![],
        vec![],
        vec![],
        vec![],
        vec![],
    );
    let witness = common::Witness {
        a: vec![BlsScalar::from(17)],
        b: vec![BlsScalar::from(23)],
        c: vec![BlsScalar::from(42)],
        d: vec![],
    };

    let (proof, verifier) =
        prove_and_pair(b"arith", N, vec![Box::new(widget)], &witness, &ck);

    for widget in verifier.widgets() {
        assert!(widget.verify_instance_commitments());
        for commitment in widget.instance() {
            assert_eq!(commitment, Commitment::default());
        }
    }
    assert!(verifier.verify(&proof, &ok).is_ok());
}

#[test]
fn tampered_wire_commitment_is_rejected() {
    let (ck, ok) = setup_params(N);
    let (widget, witness) = arithmetic_circuit();

    let (mut proof, verifier) =
        prove_and_pair(b"arith", N, vec![Box::new(widget)], &witness, &ck);
    proof.a_comm = proof.b_comm;

    assert_eq!(
        verifier.verify(&proof, &ok),
        Err(Error::ProofVerificationError)
    );
}

#[test]
fn tampered_evaluation_is_rejected() {
    let (ck, ok) = setup_params(N);
    let (widget, witness) = arithmetic_circuit();

    let (mut proof, verifier) =
        prove_and_pair(b"arith", N, vec![Box::new(widget)], &witness, &ck);
    proof.evaluations.a_eval += BlsScalar::one();

    assert_eq!(
        verifier.verify(&proof, &ok),
        Err(Error::ProofVerificationError)
    );
}
