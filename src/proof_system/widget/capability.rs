// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Capability declarations for widgets.
//!
//! A widget declares, once, at construction time, which shifted wire
//! evaluations it needs from the circuit state and which arithmetization
//! variant it implements. The orchestrator reads the declarations to decide
//! which shifted evaluation tables to precompute and which wires to open at
//! the shifted evaluation point; it never inspects a widget's algebra.

/// A shifted (cyclically rotated) wire evaluation a widget may require from
/// the circuit state.
///
/// Gates that relate a value to its neighbour in the execution trace read
/// the wire polynomial at the next domain position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// The left wire evaluated at the next domain position.
    LeftWireShifted,
    /// The right wire evaluated at the next domain position.
    RightWireShifted,
    /// The output wire evaluated at the next domain position.
    OutputWireShifted,
    /// The fourth advice wire evaluated at the next domain position.
    FourthWireShifted,
}

impl Dependency {
    /// Every dependency, in the canonical order shared by prover and
    /// verifier. Shifted openings are folded in exactly this order.
    pub(crate) const ALL: [Dependency; 4] = [
        Dependency::LeftWireShifted,
        Dependency::RightWireShifted,
        Dependency::OutputWireShifted,
        Dependency::FourthWireShifted,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Dependency::LeftWireShifted => 0,
            Dependency::RightWireShifted => 1,
            Dependency::OutputWireShifted => 2,
            Dependency::FourthWireShifted => 3,
        }
    }

    /// Transcript label under which the corresponding shifted wire
    /// evaluation is disclosed.
    pub(crate) fn shifted_eval_label(self) -> &'static [u8] {
        match self {
            Dependency::LeftWireShifted => b"a_next_eval",
            Dependency::RightWireShifted => b"b_next_eval",
            Dependency::OutputWireShifted => b"c_next_eval",
            Dependency::FourthWireShifted => b"d_next_eval",
        }
    }
}

/// The arithmetization variant a widget implements. The empty feature set is
/// the standard arithmetization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Extended arithmetic gates beyond the plain fan-in-2 form.
    ExtendedArithmetic,
    /// Boolean-constraint selectors.
    BoolSelectors,
    /// Hash-function gate selectors.
    HashSelectors,
    /// Elliptic-curve-point gate selectors.
    CurvePointSelectors,
    /// The turbo arithmetization with the fourth advice wire.
    TurboArithmetic,
}

impl Feature {
    fn index(self) -> usize {
        match self {
            Feature::ExtendedArithmetic => 0,
            Feature::BoolSelectors => 1,
            Feature::HashSelectors => 2,
            Feature::CurvePointSelectors => 3,
            Feature::TurboArithmetic => 4,
        }
    }
}

/// An immutable, per-widget declaration of required shifted wire evaluations
/// and implemented arithmetization features.
///
/// Built once when the widget is constructed; there is deliberately no way
/// to mutate it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet {
    dependencies: [bool; 4],
    features: [bool; 5],
}

impl CapabilitySet {
    /// The standard arithmetization with no shifted-wire dependencies.
    pub fn standard() -> CapabilitySet {
        CapabilitySet::default()
    }

    /// Declares a shifted-wire dependency. Construction-time only.
    pub fn with_dependency(mut self, dependency: Dependency) -> CapabilitySet {
        self.dependencies[dependency.index()] = true;
        self
    }

    /// Declares an arithmetization feature. Construction-time only.
    pub fn with_feature(mut self, feature: Feature) -> CapabilitySet {
        self.features[feature.index()] = true;
        self
    }

    /// Whether this widget requires the given shifted wire evaluation.
    pub fn has_dependency(&self, dependency: Dependency) -> bool {
        self.dependencies[dependency.index()]
    }

    /// Whether this widget implements the given arithmetization feature.
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features[feature.index()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn standard_set_declares_nothing() {
        let caps = CapabilitySet::standard();
        for dep in Dependency::ALL.iter() {
            assert!(!caps.has_dependency(*dep));
        }
        assert!(!caps.has_feature(Feature::TurboArithmetic));
    }

    #[test]
    fn declared_flags_are_queryable() {
        let caps = CapabilitySet::standard()
            .with_dependency(Dependency::FourthWireShifted)
            .with_feature(Feature::TurboArithmetic);

        assert!(caps.has_dependency(Dependency::FourthWireShifted));
        assert!(!caps.has_dependency(Dependency::LeftWireShifted));
        assert!(caps.has_feature(Feature::TurboArithmetic));
        assert!(!caps.has_feature(Feature::BoolSelectors));
    }

    #[test]
    fn feature_flags_combine_independently() {
        let caps = CapabilitySet::standard()
            .with_feature(Feature::ExtendedArithmetic)
            .with_feature(Feature::CurvePointSelectors);

        assert!(caps.has_feature(Feature::ExtendedArithmetic));
        assert!(caps.has_feature(Feature::CurvePointSelectors));
        assert!(!caps.has_feature(Feature::HashSelectors));
    }
}
