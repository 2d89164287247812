// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use plonk_widgets::prelude::*;

/// Public parameters large enough for circuits over a domain of `n` gates:
/// the quotient polynomial lives on the 8n extended domain.
pub fn setup_params(n: usize) -> (CommitKey, OpeningKey) {
    let pp = PublicParameters::setup(8 * n, &mut rand::thread_rng())
        .expect("srs setup failed");
    pp.trim(8 * n).expect("srs trim failed")
}

/// The four witness columns of a circuit.
pub struct Witness {
    pub a: Vec<BlsScalar>,
    pub b: Vec<BlsScalar>,
    pub c: Vec<BlsScalar>,
    pub d: Vec<BlsScalar>,
}

/// A two-gate arithmetic circuit: `3 * 2 = 6` and `4 + 5 = 9`.
pub fn arithmetic_circuit() -> (ArithmeticWidget, Witness) {
    let widget = ArithmeticWidget::new(
        // q_m, q_l, q_r, q_o, q_c, q_arith
        vec![BlsScalar::one(), BlsScalar::zero()],
        vec![BlsScalar::zero(), BlsScalar::one()],
        vec![BlsScalar::zero(), BlsScalar::one()],
        vec![-BlsScalar::one(), -BlsScalar::one()],
        vec![],
        vec![BlsScalar::one(), BlsScalar::one()],
    );
    let witness = Witness {
        a: vec![BlsScalar::from(3), BlsScalar::from(4)],
        b: vec![BlsScalar::from(2), BlsScalar::from(5)],
        c: vec![BlsScalar::from(6), BlsScalar::from(9)],
        d: vec![],
    };
    (widget, witness)
}

/// A single range gate on row 0 checking the base-4 accumulator chain
/// `1 -> 6 -> 27 -> 109 -> 438`.
pub fn range_circuit() -> (RangeWidget, Witness) {
    let widget = RangeWidget::new(vec![BlsScalar::one()]);
    let witness = Witness {
        a: vec![BlsScalar::from(109)],
        b: vec![BlsScalar::from(27)],
        c: vec![BlsScalar::from(6)],
        // d_next of row 0 is d on row 1.
        d: vec![BlsScalar::from(1), BlsScalar::from(438)],
    };
    (widget, witness)
}

/// Arithmetic gates on rows 0-1 and a range gate on row 2, sharing the four
/// witness columns.
pub fn mixed_circuit() -> (ArithmeticWidget, RangeWidget, Witness) {
    let arithmetic = ArithmeticWidget::new(
        vec![BlsScalar::one(), BlsScalar::zero()],
        vec![BlsScalar::zero(), BlsScalar::one()],
        vec![BlsScalar::zero(), BlsScalar::one()],
        vec![-BlsScalar::one(), -BlsScalar::one()],
        vec![],
        vec![BlsScalar::one(), BlsScalar::one()],
    );
    let range = RangeWidget::new(vec![
        BlsScalar::zero(),
        BlsScalar::zero(),
        BlsScalar::one(),
    ]);
    let witness = Witness {
        a: vec![
            BlsScalar::from(3),
            BlsScalar::from(4),
            BlsScalar::from(109),
            BlsScalar::zero(),
        ],
        b: vec![
            BlsScalar::from(2),
            BlsScalar::from(5),
            BlsScalar::from(27),
            BlsScalar::zero(),
        ],
        c: vec![
            BlsScalar::from(6),
            BlsScalar::from(9),
            BlsScalar::from(6),
            BlsScalar::zero(),
        ],
        d: vec![
            BlsScalar::zero(),
            BlsScalar::zero(),
            BlsScalar::from(1),
            BlsScalar::from(438),
        ],
    };
    (arithmetic, range, witness)
}

/// Proves `witness` against the widget list and returns the proof together
/// with the paired verifier.
pub fn prove_and_pair(
    label: &'static [u8],
    n: usize,
    widgets: Vec<Box<dyn ProverWidget>>,
    witness: &Witness,
    commit_key: &CommitKey,
) -> (Proof, Verifier) {
    let mut prover = Prover::new(label, n).expect("domain construction failed");
    for widget in widgets {
        prover.add_widget(widget);
    }
    let verifier = prover.preprocess(commit_key).expect("preprocess failed");
    let proof = prover
        .prove(commit_key, &witness.a, &witness.b, &witness.c, &witness.d)
        .expect("proving failed");
    (proof, verifier)
}
