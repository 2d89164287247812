// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! In PLONK-style SNARKs we need to calculate a quotient polynomial over a
//! target polynomial with roots at distinct points associated with each
//! constraint of the constraint system. In order to be efficient, we choose
//! these roots to be the powers of a 2^n root of unity in the field. This
//! allows us to perform polynomial operations in O(n) by performing an
//! O(n log n) FFT over such a domain.

use crate::error::Error;
use crate::fft::Evaluations;
use dusk_bls12_381::{BlsScalar, GENERATOR, ROOT_OF_UNITY, TWO_ADACITY};

/// Defines a domain over which finite field (I)FFTs can be performed. Works
/// only for fields that have a large multiplicative subgroup of size that is
/// a power-of-2.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EvaluationDomain {
    /// The size of the domain.
    pub(crate) size: u64,
    /// `log_2(self.size)`.
    pub(crate) log_size_of_group: u32,
    /// Inverse of the size in the field.
    pub(crate) size_inv: BlsScalar,
    /// A generator of the subgroup.
    pub(crate) group_gen: BlsScalar,
    /// Inverse of the generator of the subgroup.
    pub(crate) group_gen_inv: BlsScalar,
    /// Multiplicative generator of the finite field, inverted.
    pub(crate) generator_inv: BlsScalar,
}

impl EvaluationDomain {
    /// Construct a domain that is large enough for evaluations of a
    /// polynomial having `num_coeffs` coefficients.
    pub fn new(num_coeffs: usize) -> Result<Self, Error> {
        // Compute the size of our evaluation domain
        let size = num_coeffs.next_power_of_two() as u64;
        let log_size_of_group = size.trailing_zeros();

        if log_size_of_group >= TWO_ADACITY {
            return Err(Error::InvalidEvalDomainSize {
                log_size_of_group,
                adacity: TWO_ADACITY,
            });
        }

        // Compute the generator for the multiplicative subgroup.
        // It should be the 2^(log_size_of_group) root of unity.
        let mut group_gen = ROOT_OF_UNITY;
        for _ in log_size_of_group..TWO_ADACITY {
            group_gen = group_gen.square();
        }
        let size_as_field_element = BlsScalar::from(size);

        Ok(EvaluationDomain {
            size,
            log_size_of_group,
            size_inv: size_as_field_element.invert().unwrap(),
            group_gen,
            group_gen_inv: group_gen.invert().unwrap(),
            generator_inv: GENERATOR.invert().unwrap(),
        })
    }

    /// Return the size of `self`.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// The generator of the multiplicative subgroup this domain is built
    /// over.
    pub fn group_gen(&self) -> BlsScalar {
        self.group_gen
    }

    /// Compute an FFT.
    pub(crate) fn fft(&self, coeffs: &[BlsScalar]) -> Vec<BlsScalar> {
        let mut coeffs = coeffs.to_vec();
        self.fft_in_place(&mut coeffs);
        coeffs
    }

    /// Compute an FFT, modifying the vector in place.
    pub(crate) fn fft_in_place(&self, coeffs: &mut Vec<BlsScalar>) {
        coeffs.resize(self.size(), BlsScalar::zero());
        serial_fft(coeffs, self.group_gen, self.log_size_of_group)
    }

    /// Compute an IFFT.
    pub(crate) fn ifft(&self, evals: &[BlsScalar]) -> Vec<BlsScalar> {
        let mut evals = evals.to_vec();
        self.ifft_in_place(&mut evals);
        evals
    }

    /// Compute an IFFT, modifying the vector in place.
    pub(crate) fn ifft_in_place(&self, evals: &mut Vec<BlsScalar>) {
        evals.resize(self.size(), BlsScalar::zero());
        serial_fft(evals, self.group_gen_inv, self.log_size_of_group);
        evals.iter_mut().for_each(|e| *e *= &self.size_inv);
    }

    /// Compute an FFT over a coset of the domain.
    pub(crate) fn coset_fft(&self, coeffs: &[BlsScalar]) -> Vec<BlsScalar> {
        let mut coeffs = coeffs.to_vec();
        distribute_powers(&mut coeffs, GENERATOR);
        self.fft_in_place(&mut coeffs);
        coeffs
    }

    /// Compute an IFFT over a coset of the domain, modifying the input vector
    /// in place.
    pub(crate) fn coset_ifft(&self, evals: &[BlsScalar]) -> Vec<BlsScalar> {
        let mut evals = evals.to_vec();
        self.ifft_in_place(&mut evals);
        distribute_powers(&mut evals, self.generator_inv);
        evals
    }

    /// Evaluate the vanishing polynomial of this domain,
    /// `z(X) = X^size - 1`, at the point `tau`.
    pub(crate) fn evaluate_vanishing_polynomial(&self, tau: &BlsScalar) -> BlsScalar {
        tau.pow(&[self.size, 0, 0, 0]) - BlsScalar::one()
    }

    /// Given that the domain size is `D`, this function computes the `D`
    /// evaluation points for the vanishing polynomial of degree `n` over a
    /// coset of the domain.
    pub(crate) fn compute_vanishing_poly_over_coset(
        &self,            // domain to evaluate over
        poly_degree: u64, // degree of the vanishing polynomial
    ) -> Evaluations {
        assert!((self.size() as u64) > poly_degree);
        let coset_gen = GENERATOR.pow(&[poly_degree, 0, 0, 0]);
        let v_h: Vec<_> = (0..self.size())
            .map(|i| {
                (coset_gen * self.group_gen.pow(&[poly_degree * i as u64, 0, 0, 0]))
                    - BlsScalar::one()
            })
            .collect();
        Evaluations::from_vec_and_domain(v_h, *self)
    }

    /// Return an iterator over the elements of the domain.
    pub fn elements(&self) -> Elements {
        Elements {
            cur_elem: BlsScalar::one(),
            cur_pow: 0,
            domain: *self,
        }
    }
}

/// An iterator over the elements of an [`EvaluationDomain`].
#[derive(Debug)]
pub struct Elements {
    cur_elem: BlsScalar,
    cur_pow: u64,
    domain: EvaluationDomain,
}

impl Iterator for Elements {
    type Item = BlsScalar;
    fn next(&mut self) -> Option<BlsScalar> {
        if self.cur_pow == self.domain.size {
            None
        } else {
            let cur_elem = self.cur_elem;
            self.cur_elem *= &self.domain.group_gen;
            self.cur_pow += 1;
            Some(cur_elem)
        }
    }
}

// Multiplies the i-th coefficient by g^i.
fn distribute_powers(coeffs: &mut [BlsScalar], g: BlsScalar) {
    let mut pow = BlsScalar::one();
    coeffs.iter_mut().for_each(|c| {
        *c *= &pow;
        pow *= &g;
    })
}

fn serial_fft(a: &mut [BlsScalar], omega: BlsScalar, log_n: u32) {
    #[inline]
    fn bitreverse(mut n: u32, l: u32) -> u32 {
        let mut r = 0;
        for _ in 0..l {
            r = (r << 1) | (n & 1);
            n >>= 1;
        }
        r
    }

    let n = a.len() as u32;
    assert_eq!(n, 1 << log_n);

    for k in 0..n {
        let rk = bitreverse(k, log_n);
        if k < rk {
            a.swap(rk as usize, k as usize);
        }
    }

    let mut m = 1;
    for _ in 0..log_n {
        let w_m = omega.pow(&[u64::from(n / (2 * m)), 0, 0, 0]);

        let mut k = 0;
        while k < n {
            let mut w = BlsScalar::one();
            for j in 0..m {
                let mut t = a[(k + j + m) as usize];
                t *= &w;
                let mut tmp = a[(k + j) as usize];
                tmp -= &t;
                a[(k + j + m) as usize] = tmp;
                a[(k + j) as usize] += &t;
                w *= &w_m;
            }

            k += 2 * m;
        }

        m *= 2;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fft::Polynomial;

    #[test]
    fn fft_ifft_identity() {
        let domain = EvaluationDomain::new(8).unwrap();
        let coeffs: Vec<_> = (0..8u64).map(BlsScalar::from).collect();

        let evals = domain.fft(&coeffs);
        assert_eq!(domain.ifft(&evals), coeffs);
    }

    #[test]
    fn fft_matches_naive_evaluation() {
        let domain = EvaluationDomain::new(4).unwrap();
        let poly = Polynomial::from_coefficients_vec(
            (1..5u64).map(BlsScalar::from).collect(),
        );

        let evals = domain.fft(&poly);
        for (eval, point) in evals.iter().zip(domain.elements()) {
            assert_eq!(*eval, poly.evaluate(&point));
        }
    }

    #[test]
    fn vanishing_polynomial_is_zero_on_domain() {
        let domain = EvaluationDomain::new(16).unwrap();
        for point in domain.elements() {
            assert_eq!(
                domain.evaluate_vanishing_polynomial(&point),
                BlsScalar::zero()
            );
        }
    }

    #[test]
    fn vanishing_polynomial_over_coset_matches_direct_evaluation() {
        let domain = EvaluationDomain::new(4).unwrap();
        let domain_8n = EvaluationDomain::new(32).unwrap();
        let v_h = domain_8n.compute_vanishing_poly_over_coset(domain.size);

        for (i, point) in domain_8n.elements().enumerate() {
            assert_eq!(
                v_h[i],
                domain.evaluate_vanishing_polynomial(&(GENERATOR * point))
            );
        }
    }
}
