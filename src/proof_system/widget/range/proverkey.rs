// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::fft::{Evaluations, Polynomial};
use dusk_bls12_381::BlsScalar;

/// Domain-sized selector scratch for the range gate, rebuilt on every
/// `reset`.
#[derive(Debug, Eq, PartialEq, Clone)]
pub(crate) struct ProverKey {
    pub(crate) q_range: (Polynomial, Evaluations),
    pub(crate) domain_size: usize,
}

impl ProverKey {
    pub(crate) fn compute_quotient_i(
        &self,
        index: usize,
        alpha: &BlsScalar,
        w_l_i: &BlsScalar,
        w_r_i: &BlsScalar,
        w_o_i: &BlsScalar,
        w_4_i: &BlsScalar,
        w_4_i_next: &BlsScalar,
    ) -> BlsScalar {
        let four = BlsScalar::from(4);
        let q_range_i = &self.q_range.1[index];

        let alpha_sq = alpha.square();
        let alpha_cu = alpha_sq * alpha;

        // Delta([c(X) - 4 * d(X)]) + Delta([b(X) - 4 * c(X)]) * alpha
        // + Delta([a(X) - 4 * b(X)]) * alpha^2
        // + Delta([d(Xg) - 4 * a(X)]) * alpha^3, all scaled by Q_Range(X)
        let b_1 = delta(w_o_i - four * w_4_i);
        let b_2 = delta(w_r_i - four * w_o_i) * alpha;
        let b_3 = delta(w_l_i - four * w_r_i) * alpha_sq;
        let b_4 = delta(w_4_i_next - four * w_l_i) * alpha_cu;
        (b_1 + b_2 + b_3 + b_4) * q_range_i
    }

    pub(crate) fn compute_linearisation(
        &self,
        alpha: &BlsScalar,
        a_eval: &BlsScalar,
        b_eval: &BlsScalar,
        c_eval: &BlsScalar,
        d_eval: &BlsScalar,
        d_next_eval: &BlsScalar,
    ) -> Polynomial {
        let q_range_poly = &self.q_range.0;

        let t = range_combination(
            alpha,
            a_eval,
            b_eval,
            c_eval,
            d_eval,
            d_next_eval,
        );
        q_range_poly * &t
    }
}

/// The alpha-power combination of the four quad decomposition checks.
pub(crate) fn range_combination(
    alpha: &BlsScalar,
    a_eval: &BlsScalar,
    b_eval: &BlsScalar,
    c_eval: &BlsScalar,
    d_eval: &BlsScalar,
    d_next_eval: &BlsScalar,
) -> BlsScalar {
    let four = BlsScalar::from(4);
    let alpha_sq = alpha.square();
    let alpha_cu = alpha_sq * alpha;

    let b_1 = delta(c_eval - four * d_eval);
    let b_2 = delta(b_eval - four * c_eval) * alpha;
    let b_3 = delta(a_eval - four * b_eval) * alpha_sq;
    let b_4 = delta(d_next_eval - four * a_eval) * alpha_cu;
    b_1 + b_2 + b_3 + b_4
}

// Computes f(f-1)(f-2)(f-3)
pub(crate) fn delta(f: BlsScalar) -> BlsScalar {
    let f_1 = f - BlsScalar::one();
    let f_2 = f - BlsScalar::from(2);
    let f_3 = f - BlsScalar::from(3);
    f * f_1 * f_2 * f_3
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn delta_vanishes_on_quads() {
        for quad in 0..4u64 {
            assert_eq!(delta(BlsScalar::from(quad)), BlsScalar::zero());
        }
        assert_ne!(delta(BlsScalar::from(4)), BlsScalar::zero());
        assert_ne!(delta(-BlsScalar::one()), BlsScalar::zero());
    }
}
