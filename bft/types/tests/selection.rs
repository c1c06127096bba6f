use bft_types::{Addr, Hash160, HashExt, Validator};

/// One round of the accumulator rotation owned by the validator set: every
/// validator accrues its voting power, the highest accumulator proposes and
/// pays back the total power.
fn next_proposer(set: &mut [Validator]) -> Addr {
    let total_power = set.iter().map(|v| v.voting_power() as i64).sum::<i64>();

    for validator in set.iter_mut() {
        *validator.accum_mut() += validator.voting_power() as i64;
    }

    let proposer = Validator::highest_accum(set.iter())
        .map(Validator::address)
        .unwrap();

    for validator in set.iter_mut() {
        if validator.address() == proposer {
            *validator.accum_mut() -= total_power;
        }
    }

    proposer
}

fn merkle_leaves(set: &[Validator]) -> Vec<Hash160> {
    set.iter().map(Validator::hash).collect()
}

#[test]
fn proposers_rotate_in_proportion_to_power() {
    let mut set = vec![
        Validator::mock(1, 1, 0),
        Validator::mock(2, 2, 0),
        Validator::mock(3, 3, 0),
    ];

    let proposers = (0..6).map(|_| next_proposer(&mut set)).collect::<Vec<_>>();

    assert_eq!(proposers, [3, 2, 1, 3, 2, 3].map(Addr::mock));

    // After a full cycle the accumulators are back where they started.
    assert!(set.iter().all(|v| v.accum() == 0));
}

#[test]
fn independent_nodes_agree_on_the_leader() {
    let canonical = vec![
        Validator::mock(5, 10, 0),
        Validator::mock(1, 10, 0),
        Validator::mock(9, 10, 0),
        Validator::mock(3, 10, 0),
    ];

    // Two nodes hold the same set but scan it in different orders.
    let mut node_a = canonical.iter().map(Validator::copy).collect::<Vec<_>>();
    let mut node_b = canonical.iter().rev().map(Validator::copy).collect::<Vec<_>>();

    for _ in 0..20 {
        assert_eq!(next_proposer(&mut node_a), next_proposer(&mut node_b));
    }

    // Selection ran on copies; the canonical entries are untouched.
    assert!(canonical.iter().all(|v| v.accum() == 0));
}

#[test]
fn set_commitment_tracks_accumulators() {
    let mut set = vec![Validator::mock(1, 1, 0), Validator::mock(2, 1, 0)];

    let before = merkle_leaves(&set);
    assert_eq!(before, merkle_leaves(&set));

    next_proposer(&mut set);
    let after = merkle_leaves(&set);

    assert_ne!(before, after);

    // A node that decodes the set from the wire commits to the same leaves.
    let decoded = set
        .iter()
        .map(|v| Validator::decode(&v.encode()).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(merkle_leaves(&decoded), after);

    // Leaves are the RIPEMD-160 of the canonical encoding.
    assert_eq!(after[0], set[0].encode().hash160());
}
