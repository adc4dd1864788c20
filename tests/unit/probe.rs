//! Capability probe, including the negative cases.

use super::common::{Reviving, SteppingReversed};
use collection_laws::containers::{CharView, IterSequence, Reversed};
use collection_laws::{
    capabilities_of, has_capability, BidirectionalCollection, Capability, Collection,
    Instrumented, MutableCollection, RandomAccessCollection, Sequence,
};

#[test]
fn test_one_pass_sequence_fails_bidirectional_and_random_access() {
    assert!(has_capability!(Reviving: Sequence));
    assert!(!has_capability!(Reviving: Collection));
    assert!(!has_capability!(Reviving: BidirectionalCollection));
    assert!(!has_capability!(Reviving: RandomAccessCollection));

    type Numbers = IterSequence<std::ops::Range<u32>>;
    assert!(!has_capability!(Numbers: BidirectionalCollection));
    assert!(!has_capability!(Numbers: RandomAccessCollection));
}

#[test]
fn test_adapters_inherit_capabilities_from_base() {
    let over_chars = capabilities_of!(Reversed<CharView<'static>>);
    assert!(over_chars.contains(Capability::Bidirectional));
    assert!(!over_chars.contains(Capability::RandomAccess));
    assert!(!over_chars.contains(Capability::Mutable));

    let over_vec = capabilities_of!(Reversed<Instrumented<Vec<u8>>>);
    assert_eq!(
        over_vec.strongest_read_capability(),
        Some(Capability::RandomAccess)
    );
    assert!(over_vec.contains(Capability::Mutable));
}

#[test]
fn test_probe_trusts_declarations_not_behavior() {
    // Claims random access while stepping; only the ledger can tell.
    assert!(has_capability!(SteppingReversed<Vec<u8>>: RandomAccessCollection));
    assert!(!has_capability!(SteppingReversed<Vec<u8>>: MutableCollection));
}
