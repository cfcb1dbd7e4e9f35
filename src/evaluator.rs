//! The mIFI evaluator: trunk, fork, branch tails, feed-forward mask.
//!
//! This ties the [tweakey schedule](crate::tweakey), the [AES round
//! primitive](crate::aes), and [branch key derivation](crate::branch)
//! together into the one function this crate exists to provide.

use crate::{
    aes::{self, Block, ZERO},
    branch::branch_key,
    tweakey,
};

/// Number of parallel branches ButterKnife expands each message into.
pub const BRANCHES: usize = 8;

/// Expand a 128-bit message into 1024 bits of pseudorandom output, under a
/// 128-bit tweak and a 128-bit key.
///
/// Output byte layout: branch `i` occupies `output[16*i .. 16*i + 16]`.
///
/// This function is total: every byte value is a valid input, and it always
/// succeeds. It performs no I/O and allocates nothing; all intermediate
/// state lives on the stack.
pub fn eval(message: &Block, tweak: &Block, key: &Block) -> [u8; 16 * BRANCHES] {
    let round_tweakey = tweakey::schedule(tweak, key);

    // Trunk: whitening, rounds 1..=6, then a full round with a zero key that
    // closes the trunk. Round tweakey 7 is not an AES round key here: it is
    // consumed below as the first per-branch round key.
    let mut state = *message;
    aes::add_round_key(&mut state, &round_tweakey[0]);
    for rk in &round_tweakey[1..=6] {
        aes::aes_round(&mut state, rk);
    }
    aes::aes_round(&mut state, &ZERO);

    // Fork: the trunk's output seeds every branch and is reused verbatim as
    // the final feed-forward mask.
    let fork = state;
    let mut branches = [fork; BRANCHES];

    for (i, branch) in branches.iter_mut().enumerate() {
        let bk = branch_key(&round_tweakey[7], i as u8 + 1);
        aes::add_round_key(branch, &bk);
    }

    for rk in &round_tweakey[8..=14] {
        for (i, branch) in branches.iter_mut().enumerate() {
            let bk = branch_key(rk, i as u8 + 1);
            aes::aes_round(branch, &bk);
        }
    }

    for branch in &mut branches {
        aes::aes_round(branch, &ZERO);
    }

    let mut output = [0u8; 16 * BRANCHES];
    for (i, branch) in branches.iter().enumerate() {
        let bk = branch_key(&round_tweakey[15], i as u8 + 1);
        let out = &mut output[16 * i..16 * i + 16];
        out.copy_from_slice(branch);
        out.iter_mut()
            .zip(bk.iter().zip(fork.iter()))
            .for_each(|(o, (k, f))| *o ^= k ^ f);
    }
    output
}
