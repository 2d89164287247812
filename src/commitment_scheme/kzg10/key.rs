// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use super::Commitment;
use crate::error::Error;
use crate::fft::Polynomial;
use dusk_bls12_381::{
    multi_miller_loop, multiscalar_mul::msm_variable_base, G1Affine, G2Affine,
    G2Prepared, Gt,
};

/// CommitKey is used to commit to a polynomial which is bounded by the
/// max_degree parameter specified when building the public parameters.
#[derive(Debug, Clone)]
pub struct CommitKey {
    /// Group elements of the form `{ \beta^i G }`, where `i` ranges from 0
    /// to `degree`.
    pub(crate) powers_of_g: Vec<G1Affine>,
}

impl CommitKey {
    /// Returns the maximum degree polynomial that you can commit to.
    pub fn max_degree(&self) -> usize {
        self.powers_of_g.len() - 1
    }

    /// Truncates the commit key to a lower max degree.
    pub(crate) fn truncate(&self, mut truncated_degree: usize) -> Result<CommitKey, Error> {
        if truncated_degree == 1 {
            truncated_degree += 1;
        }
        // Check that the truncated degree is not zero
        if truncated_degree == 0 {
            return Err(Error::TruncatedDegreeIsZero);
        }
        // Check that max degree is less than truncated degree
        if truncated_degree > self.max_degree() {
            return Err(Error::TruncatedDegreeTooLarge);
        }

        let truncated_powers = Self {
            powers_of_g: self.powers_of_g[..=truncated_degree].to_vec(),
        };
        Ok(truncated_powers)
    }

    /// Commits to a polynomial bounded by the max degree of the commit key.
    ///
    /// The zero polynomial commits to the identity point: an all-zero
    /// selector column is a legitimate circuit configuration.
    pub fn commit(&self, polynomial: &Polynomial) -> Result<Commitment, Error> {
        if polynomial.is_zero() {
            return Ok(Commitment::default());
        }
        // Check whether we can safely commit to this polynomial
        if polynomial.degree() > self.max_degree() {
            return Err(Error::PolynomialDegreeTooLarge);
        }

        // Compute commitment
        Ok(Commitment::from(msm_variable_base(
            &self.powers_of_g,
            &polynomial.coeffs,
        )))
    }
}

/// OpeningKey is used to verify opening proofs made about a committed
/// polynomial.
#[derive(Debug, Clone)]
pub struct OpeningKey {
    /// The generator of G1.
    pub(crate) g: G1Affine,
    /// The generator of G2.
    pub(crate) h: G2Affine,
    /// \beta times the above generator of G2.
    pub(crate) beta_h: G2Affine,
    /// The generator of G2, prepared for use in pairings.
    pub(crate) prepared_h: G2Prepared,
    /// \beta times the above generator of G2, prepared for use in pairings.
    pub(crate) prepared_beta_h: G2Prepared,
}

impl OpeningKey {
    /// Checks the batched KZG opening identity
    /// `e(witnesses, beta * H) == e(msm_result, H)`
    /// where `msm_result` already folds the committed polynomials, the
    /// claimed evaluations and the evaluation-point terms.
    ///
    /// Returns `true` iff the two-pairing product is the identity element.
    pub(crate) fn batch_opening_check(
        &self,
        msm_result: G1Affine,
        witnesses: G1Affine,
    ) -> bool {
        let pairing = multi_miller_loop(&[
            (&-witnesses, &self.prepared_beta_h),
            (&msm_result, &self.prepared_h),
        ])
        .final_exponentiation();

        pairing == Gt::identity()
    }
}

#[cfg(test)]
mod test {
    use super::super::PublicParameters;
    use super::*;
    use crate::util;
    use dusk_bls12_381::{BlsScalar, G1Projective};

    // Commit to a random polynomial, open it at a point with a Ruffini
    // witness and run the witness through the batched pairing identity.
    #[test]
    fn test_commit_and_open_single_polynomial() {
        let mut rng = rand::thread_rng();
        let degree = 25;
        let pp = PublicParameters::setup(degree, &mut rng).unwrap();
        let (ck, vk) = pp.trim(degree).unwrap();

        let coeffs: Vec<_> = (0..=degree)
            .map(|_| util::random_scalar(&mut rng))
            .collect();
        let poly = Polynomial::from_coefficients_vec(coeffs);
        let point = BlsScalar::from(10);
        let value = poly.evaluate(&point);

        let commitment = ck.commit(&poly).unwrap();
        let witness_poly = poly.ruffini(point);
        let witness = ck.commit(&witness_poly).unwrap();

        // msm_result = commitment - value * G + point * witness
        let msm_result: G1Affine = (G1Projective::from(commitment.0)
            - (vk.g * value)
            + (witness.0 * point))
            .into();

        assert!(vk.batch_opening_check(msm_result, witness.0));
    }

    #[test]
    fn test_commit_zero_polynomial_is_identity() {
        let mut rng = rand::thread_rng();
        let pp = PublicParameters::setup(8, &mut rng).unwrap();
        let (ck, _) = pp.trim(8).unwrap();

        let commitment = ck.commit(&Polynomial::zero()).unwrap();
        assert_eq!(commitment, Commitment::default());
    }

    #[test]
    fn test_commit_degree_too_large() {
        let mut rng = rand::thread_rng();
        let pp = PublicParameters::setup(4, &mut rng).unwrap();
        let (ck, _) = pp.trim(4).unwrap();

        let coeffs: Vec<_> = (0..=16)
            .map(|_| util::random_scalar(&mut rng))
            .collect();
        let poly = Polynomial::from_coefficients_vec(coeffs);
        assert_eq!(ck.commit(&poly), Err(Error::PolynomialDegreeTooLarge));
    }
}
