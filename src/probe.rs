// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compile-time capability probe.
//!
//! `has_capability!(Type: Trait)` answers "does `Type` implement `Trait`?"
//! without constructing a value. It exists for *negative* assertions: a
//! one-pass sequence should never silently become random-access.
//!
//! The trick: an inherent associated const on `Probe<T>` that only exists
//! when `T: Trait`, shadowing a trait const that always says `false`. Method
//! resolution prefers the inherent item when its bounds hold and falls back to
//! the trait otherwise. The answer is only meaningful for concrete types; on a
//! generic parameter the bound is judged against the parameter's declared
//! bounds.
//!
//! ```
//! use collection_laws::containers::IterSequence;
//! use collection_laws::{has_capability, BidirectionalCollection, Sequence};
//!
//! type Countdown = IterSequence<std::iter::Rev<std::ops::Range<u8>>>;
//!
//! const IS_SEQUENCE: bool = has_capability!(Countdown: Sequence);
//! assert!(IS_SEQUENCE);
//! assert!(!has_capability!(Countdown: BidirectionalCollection));
//! ```

use std::fmt;

use serde::Serialize;

/// `true` if the type implements the trait, evaluated at compile time.
#[macro_export]
macro_rules! has_capability {
    ($ty:ty : $capability:path) => {{
        trait Lacks {
            const HAS: bool = false;
        }
        impl<T: ?Sized> Lacks for T {}

        #[allow(dead_code)]
        struct Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        #[allow(dead_code)]
        impl<T: ?Sized + $capability> Probe<T> {
            const HAS: bool = true;
        }

        <Probe<$ty>>::HAS
    }};
}

/// Every capability of the hierarchy a concrete type implements.
#[macro_export]
macro_rules! capabilities_of {
    ($ty:ty) => {{
        let mut set = $crate::probe::CapabilitySet::empty();
        if $crate::has_capability!($ty: $crate::collection::Sequence) {
            set = set.with($crate::probe::Capability::Sequence);
        }
        if $crate::has_capability!($ty: $crate::collection::Collection) {
            set = set.with($crate::probe::Capability::Collection);
        }
        if $crate::has_capability!($ty: $crate::collection::BidirectionalCollection) {
            set = set.with($crate::probe::Capability::Bidirectional);
        }
        if $crate::has_capability!($ty: $crate::collection::RandomAccessCollection) {
            set = set.with($crate::probe::Capability::RandomAccess);
        }
        if $crate::has_capability!($ty: $crate::collection::MutableCollection) {
            set = set.with($crate::probe::Capability::Mutable);
        }
        set
    }};
}

/// One rung (or the mutable side branch) of the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Sequence,
    Collection,
    Bidirectional,
    RandomAccess,
    Mutable,
}

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::Sequence,
        Capability::Collection,
        Capability::Bidirectional,
        Capability::RandomAccess,
        Capability::Mutable,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Capability::Sequence => "sequence",
            Capability::Collection => "collection",
            Capability::Bidirectional => "bidirectional",
            Capability::RandomAccess => "random-access",
            Capability::Mutable => "mutable",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Small bit set of [`Capability`] flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability.bit())
    }

    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.contains(*capability))
    }

    /// Strongest capability on the read-side chain (ignores `Mutable`).
    pub fn strongest_read_capability(self) -> Option<Capability> {
        [
            Capability::RandomAccess,
            Capability::Bidirectional,
            Capability::Collection,
            Capability::Sequence,
        ]
        .into_iter()
        .find(|capability| self.contains(*capability))
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl Serialize for CapabilitySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Capability::as_str).collect();
        write!(f, "[{}]", names.join(", "))
    }
}
