//! Deoxys-BC is a tweakable block cipher built on the AES round function,
//! with a tweakey schedule that mixes a tweak and a key into the same
//! structure.
//!
//! A "tweakey" is the concatenation of a tweak and a key, here two 128-bit
//! halves TK1 (from the tweak) and TK2 (from the key). Each round, a round
//! tweakey is assembled from the current `(TK1, TK2)` plus two fixed
//! constants, and then the halves are updated for the next round:
//!
//! - **H permutation.** A fixed byte-position shuffle, applied to both TK1
//!   and TK2 every round. It spreads each tweakey byte across a different
//!   round-tweakey position over time, so no single input byte keeps
//!   influencing the same output position.
//! - **G LFSR.** A small per-byte linear feedback shift register, applied to
//!   TK1 only (with alpha = 2; TK2's alpha = 1 is the identity for this
//!   instantiation, so TK2 is permuted but never shifted). Without it, the
//!   permutation alone would eventually cycle TK1 back through positions it
//!   had already occupied, in a way an attacker could predict.
//!
//! [This crate's schedule](crate::tweakey) runs this process forward for 16
//! rounds and keeps every round tweakey, rather than recomputing one round
//! key at a time the way a streaming cipher would: the whole schedule is
//! small enough to sit on the stack for the duration of one evaluation.
