use std::collections::BTreeSet;

use face_bitset::Bitset;
use proptest::prelude::*;

const FACE_LENGTH: usize = 4;
const CAPACITY: usize = FACE_LENGTH * 64;

fn bitset_strategy() -> impl Strategy<Value = Bitset> {
    prop::collection::vec(any::<u64>(), FACE_LENGTH).prop_map(|limbs| Bitset::from_limbs(&limbs))
}

fn sparse_bitset_strategy() -> impl Strategy<Value = Bitset> {
    prop::collection::btree_set(0..CAPACITY, 0..32)
        .prop_map(|indices| Bitset::from_indices(FACE_LENGTH, indices).unwrap())
}

proptest! {
    #[test]
    fn insert_then_remove(bitset in bitset_strategy(), n in 0..CAPACITY) {
        let mut bitset = bitset;
        bitset.insert(n).unwrap();
        prop_assert!(bitset.contains(n).unwrap());
        bitset.remove(n).unwrap();
        prop_assert!(!bitset.contains(n).unwrap());
    }

    #[test]
    fn insert_and_remove_are_idempotent(bitset in bitset_strategy(), n in 0..CAPACITY) {
        let mut once = bitset.clone();
        let mut twice = bitset.clone();
        once.insert(n).unwrap();
        twice.insert(n).unwrap();
        twice.insert(n).unwrap();
        prop_assert_eq!(&once, &twice);

        once.remove(n).unwrap();
        twice.remove(n).unwrap();
        twice.remove(n).unwrap();
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn only_one_limb_changes(bitset in bitset_strategy(), n in 0..CAPACITY) {
        let mut changed = bitset.clone();
        changed.insert(n).unwrap();
        for (i, (a, b)) in bitset.limbs().iter().zip(changed.limbs()).enumerate() {
            if i != n / 64 {
                prop_assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn iteration_matches_membership(bitset in bitset_strategy()) {
        let members: Vec<usize> = bitset.iter().collect();
        let expected: Vec<usize> = (0..CAPACITY)
            .filter(|&n| bitset.contains(n).unwrap())
            .collect();
        prop_assert_eq!(&members, &expected);
        prop_assert!(members.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(members.len(), bitset.count());
    }

    #[test]
    fn next_set_is_smallest(bitset in sparse_bitset_strategy(), n in 0..CAPACITY + 64) {
        match bitset.next_set(n) {
            Some(k) => {
                prop_assert!(k >= n && k < CAPACITY);
                prop_assert!(bitset.contains(k).unwrap());
                prop_assert!((n..k).all(|i| !bitset.contains(i).unwrap()));
            }
            None => {
                prop_assert!((n.min(CAPACITY)..CAPACITY).all(|i| !bitset.contains(i).unwrap()));
            }
        }
    }

    #[test]
    fn scan_past_capacity_is_absent(bitset in bitset_strategy(), extra in 0usize..1000) {
        prop_assert_eq!(bitset.next_set(CAPACITY + extra), None);
    }

    #[test]
    fn intersection_count_bounded(a in bitset_strategy(), b in bitset_strategy()) {
        let both = a.intersection(&b).unwrap();
        prop_assert!(both.count() <= a.count().min(b.count()));
        prop_assert!(both.is_subset(&a).unwrap());
        prop_assert!(both.is_subset(&b).unwrap());
    }

    #[test]
    fn absorption(a in bitset_strategy(), b in bitset_strategy()) {
        let absorbed = a.union(&a.intersection(&b).unwrap()).unwrap();
        prop_assert!(absorbed.equals(&a).unwrap());
    }

    #[test]
    fn matches_btree_set(
        a in prop::collection::btree_set(0..CAPACITY, 0..64),
        b in prop::collection::btree_set(0..CAPACITY, 0..64),
    ) {
        let sa = Bitset::from_indices(FACE_LENGTH, a.iter().copied()).unwrap();
        let sb = Bitset::from_indices(FACE_LENGTH, b.iter().copied()).unwrap();

        let union: BTreeSet<usize> = a.union(&b).copied().collect();
        let inter: BTreeSet<usize> = a.intersection(&b).copied().collect();
        let diff: BTreeSet<usize> = a.difference(&b).copied().collect();
        let sym: BTreeSet<usize> = a.symmetric_difference(&b).copied().collect();

        prop_assert_eq!(sa.union(&sb).unwrap().iter().collect::<BTreeSet<_>>(), union);
        prop_assert_eq!(sa.intersection(&sb).unwrap().iter().collect::<BTreeSet<_>>(), inter);
        prop_assert_eq!(sa.difference(&sb).unwrap().iter().collect::<BTreeSet<_>>(), diff);
        prop_assert_eq!(sa.symmetric_difference(&sb).unwrap().iter().collect::<BTreeSet<_>>(), sym);
        prop_assert_eq!(sa.is_subset(&sb).unwrap(), a.is_subset(&b));
        prop_assert_eq!(sa.is_disjoint(&sb).unwrap(), a.is_disjoint(&b));

        let a_sorted: Vec<usize> = a.iter().copied().collect();
        let b_sorted: Vec<usize> = b.iter().copied().collect();
        prop_assert_eq!(sa.lex_cmp(&sb).unwrap(), a_sorted.cmp(&b_sorted));
    }

    #[test]
    fn complement_partitions_capacity(a in bitset_strategy()) {
        let not_a = a.complement();
        prop_assert!(a.is_disjoint(&not_a).unwrap());
        prop_assert_eq!(a.count() + not_a.count(), CAPACITY);
    }

    #[test]
    fn text_form_round_trips(a in bitset_strategy()) {
        let parsed: Bitset = a.to_string().parse().unwrap();
        prop_assert_eq!(parsed, a);
    }
}
