//! masked Iterate-Fork-Iterate (mIFI) is a design paradigm for turning a
//! single iterated cipher into many independent pseudorandom outputs without
//! paying for a separate key schedule per output.
//!
//! The construction has three phases:
//!
//! # Iterate (trunk)
//!
//! The message is driven through a shared sequence of rounds under a shared
//! round-key schedule. Every output branch sees the exact same trunk
//! trajectory; this is where the cost of the construction is amortized
//! across branches.
//!
//! # Fork
//!
//! The trunk's final state is copied, once per branch. From here the
//! branches evolve independently.
//!
//! # Iterate (branches) and mask
//!
//! Each branch is driven through its own further rounds, under round keys
//! that differ from every other branch in some easily-derived way (here, one
//! byte range of the round key). When a branch is done, the original fork
//! state is XORed back into it. This feed-forward mask is what keeps the
//! construction from reducing to "encrypt the same thing eight times under
//! eight close tweaks": even if a branch's post-fork rounds were somehow
//! invertible, recovering the branch's internal state would not recover the
//! trunk's output directly, since the emitted value is masked.
//!
//! The parallel branches are the reason mIFI is attractive on real hardware:
//! [branches](crate::eval) map directly onto wide SIMD or pipelined AES
//! lanes, since they share no data dependency once forked.
