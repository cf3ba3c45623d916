/// Bonus for hitting a bid exactly, before the per-unit reward.
pub const EXACT_BID_BONUS: i32 = 10;

/// Points per unit of bid (exact) or of miss (otherwise).
pub const POINTS_PER_UNIT: i32 = 2;

/// Round score for one player.
///
/// An exact bid earns `10 + 2 * bid`. Otherwise the score is
/// `-2 * (bid - achieved)`: overshooting the achieved count costs points,
/// achieving more than the bid earns them.
pub fn round_score(bid: u16, achieved: u16) -> i32 {
    let bid = i32::from(bid);
    let achieved = i32::from(achieved);
    if bid == achieved {
        EXACT_BID_BONUS + POINTS_PER_UNIT * bid
    } else {
        -POINTS_PER_UNIT * (bid - achieved)
    }
}
