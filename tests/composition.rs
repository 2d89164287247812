// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! End-to-end properties of widget composition: a verifier built by
//! preprocessing mirrors the prover widget for widget, and any divergence
//! in the widget list rejects the proof.

mod common;

use common::{mixed_circuit, prove_and_pair, setup_params};
use plonk_widgets::prelude::*;

const N: usize = 4;

#[test]
fn mirrored_widget_lists_verify() {
    let (ck, ok) = setup_params(N);
    let (arithmetic, range, witness) = mixed_circuit();

    let (proof, verifier) = prove_and_pair(
        b"mixed",
        N,
        vec![Box::new(arithmetic), Box::new(range)],
        &witness,
        &ck,
    );
    assert!(verifier.verify(&proof, &ok).is_ok());
}

#[test]
fn proving_is_deterministic() {
    let (ck, _) = setup_params(N);
    let (arithmetic, range, witness) = mixed_circuit();

    let mut prover = Prover::new(b"mixed", N).unwrap();
    prover.add_widget(Box::new(arithmetic));
    prover.add_widget(Box::new(range));
    prover.preprocess(&ck).unwrap();

    // The challenge-power schedule, and with it the whole proof, is a
    // deterministic function of the widget list and the witness.
    let first = prover
        .prove(&ck, &witness.a, &witness.b, &witness.c, &witness.d)
        .unwrap();
    let second = prover
        .prove(&ck, &witness.a, &witness.b, &witness.c, &witness.d)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn reordered_verifier_widgets_reject() {
    let (ck, ok) = setup_params(N);
    let (arithmetic, range, witness) = mixed_circuit();

    let (proof, verifier) = prove_and_pair(
        b"mixed",
        N,
        vec![Box::new(arithmetic), Box::new(range)],
        &witness,
        &ck,
    );

    let mut widgets = verifier.into_widgets();
    widgets.reverse();
    let reordered = Verifier::new(b"mixed", N, widgets).unwrap();

    assert!(reordered.verify(&proof, &ok).is_err());
}

#[test]
fn omitted_verifier_widget_rejects() {
    let (ck, ok) = setup_params(N);
    let (arithmetic, range, witness) = mixed_circuit();

    let (proof, verifier) = prove_and_pair(
        b"mixed",
        N,
        vec![Box::new(arithmetic), Box::new(range)],
        &witness,
        &ck,
    );

    let mut widgets = verifier.into_widgets();
    widgets.truncate(1);
    let truncated = Verifier::new(b"mixed", N, widgets).unwrap();

    assert!(truncated.verify(&proof, &ok).is_err());
}

#[test]
fn cloned_verifier_widgets_still_verify() {
    let (ck, ok) = setup_params(N);
    let (arithmetic, range, witness) = mixed_circuit();

    let (proof, verifier) = prove_and_pair(
        b"mixed",
        N,
        vec![Box::new(arithmetic), Box::new(range)],
        &witness,
        &ck,
    );

    // Clones carry the full instance-commitment sequence, so a verifier
    // rebuilt from clones is indistinguishable from the original.
    let clones: Vec<_> =
        verifier.widgets().iter().map(|w| w.clone_widget()).collect();
    let rebuilt = Verifier::new(b"mixed", N, clones).unwrap();

    assert!(rebuilt.verify(&proof, &ok).is_ok());
}

#[test]
fn widget_list_must_match_across_proofs() {
    let (ck, ok) = setup_params(N);

    // A verifier preprocessed from a different selector assignment rejects
    // the proof even though the widget types match.
    let (arithmetic, range, witness) = mixed_circuit();
    let (proof, _) = prove_and_pair(
        b"mixed",
        N,
        vec![Box::new(arithmetic), Box::new(range)],
        &witness,
        &ck,
    );

    let other_arithmetic = ArithmeticWidget::new(
        vec![BlsScalar::one()],
        vec![],
        vec![],
        vec![-BlsScalar::one()],
        vec![BlsScalar::one()],
        vec![BlsScalar::one()],
    );
    let other_range = RangeWidget::new(vec![BlsScalar::one()]);

    let mut prover = Prover::new(b"mixed", N).unwrap();
    prover.add_widget(Box::new(other_arithmetic));
    prover.add_widget(Box::new(other_range));
    let other_verifier = prover.preprocess(&ck).unwrap();

    assert!(other_verifier.verify(&proof, &ok).is_err());
}
