use std::sync::LazyLock;

use regex::Regex;

/// Rank for connection descriptors that cannot be parsed.
/// Sorts after every real hop count, so unknown nodes end up last in
/// ascending order and first in descending order.
pub const UNKNOWN_HOPS: u64 = u64::MAX;

static DIRECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bdirect\b").unwrap());
static HOPS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+hop").unwrap());

/// Maps a free text connection descriptor like "Direct" or "3 hops away"
/// to a numeric rank, or `0` if the node is directly reachable.
pub fn numeric_hops(hops_away: &str) -> u64 {
    if DIRECT.is_match(hops_away) {
        return 0;
    }
    if let Some(caps) = HOPS.captures(hops_away)
        && let Ok(n) = caps[1].parse()
    {
        return n;
    }
    UNKNOWN_HOPS
}
