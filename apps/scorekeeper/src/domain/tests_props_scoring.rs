//! Property tests for the score formula and the bid-sum check (pure domain).

use proptest::prelude::*;

use crate::domain::bidding::{validate_bids, BidVerdict, Entry};
use crate::domain::scoring::round_score;
use crate::domain::test_gens;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: an exact bid always scores 10 + 2 * bid.
    #[test]
    fn prop_exact_bid_score(bid in 0u16..=1000) {
        prop_assert_eq!(round_score(bid, bid), 10 + 2 * i32::from(bid));
    }

    /// Property: a missed bid scores -2 * (bid - achieved).
    #[test]
    fn prop_missed_bid_score(base in 0u16..=1000, miss in 1u16..=1000, over in any::<bool>()) {
        let (bid, achieved) = if over { (base + miss, base) } else { (base, base + miss) };
        let expected = -2 * (i32::from(bid) - i32::from(achieved));
        prop_assert_eq!(round_score(bid, achieved), expected);
    }

    /// Property: a missed bid always scores below hitting the achieved count
    /// exactly.
    #[test]
    fn prop_miss_scores_below_exact(achieved in 0u16..=50, miss in 1u16..=50) {
        prop_assert!(round_score(achieved + miss, achieved) < round_score(achieved, achieved));
        prop_assert!(round_score(achieved, achieved + miss) < round_score(achieved + miss, achieved + miss));
    }

    /// Property: a full bid set summing to the target is always rejected.
    #[test]
    fn prop_sum_equal_to_target_is_invalid(
        (target, bids) in (1u8..=13, 3usize..=7)
            .prop_flat_map(|(t, n)| (Just(t), test_gens::bids_summing_to(n, t)))
    ) {
        let entries: Vec<Entry> = bids.iter().copied().map(Some).collect();
        let verdict = validate_bids(target, &entries);
        prop_assert_eq!(verdict, BidVerdict::Invalid { target, sum: u32::from(target) });
        prop_assert!(!verdict.is_valid());
        prop_assert_eq!(verdict.reason(), Some("bid sum equals target"));
    }

    /// Property: any other full bid set is valid.
    #[test]
    fn prop_sum_other_than_target_is_valid(
        (target, bids) in (1u8..=13, 3usize..=7)
            .prop_flat_map(|(t, n)| (Just(t), test_gens::legal_bids(n, t)))
    ) {
        let entries: Vec<Entry> = bids.iter().copied().map(Some).collect();
        prop_assert_eq!(validate_bids(target, &entries), BidVerdict::Valid);
    }

    /// Property: a single unset bid suppresses the check entirely.
    #[test]
    fn prop_unset_bid_never_blocks(
        (target, bids, hole) in (1u8..=13, 3usize..=7)
            .prop_flat_map(|(t, n)| (Just(t), test_gens::bids_summing_to(n, t), 0..n))
    ) {
        let mut entries: Vec<Entry> = bids.iter().copied().map(Some).collect();
        entries[hole] = None;
        let verdict = validate_bids(target, &entries);
        prop_assert_eq!(verdict, BidVerdict::Incomplete);
        prop_assert!(verdict.is_valid());
        prop_assert_eq!(verdict.reason(), None);
    }
}
