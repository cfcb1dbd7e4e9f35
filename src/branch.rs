//! Per-branch round key derivation.
//!
//! Every branch of the post-fork tail runs the same round tweakeys, except
//! for one byte range: the branch index is XORed into column 2, which keeps
//! the eight branches from collapsing into identical streams.

use crate::aes::Block;

/// Derive the round key for branch `i` from a round tweakey.
///
/// `i` ranges over `1..=8`; branch 0 is never produced, since XORing zero
/// into column 2 would leave the tweakey unchanged and collide with the
/// trunk. The eight output branches are indexed `0..8`, so branch `k` in the
/// output always uses `branch_key(round_tweakey, k + 1)`.
pub fn branch_key(round_tweakey: &Block, i: u8) -> Block {
    let mut rk = *round_tweakey;
    for b in &mut rk[8..12] {
        *b ^= i;
    }
    rk
}
