//! Merkle membership commitments.
//!
//! A member set is committed to as a single 32-byte root; eligibility of one
//! member is shown with the ordered list of sibling hashes from its leaf up
//! to the root. Sibling pairs are sorted byte-wise before hashing, so a
//! proof carries no left/right positioning and verification is a plain fold.
//!
//! Hash function: SHA-256. Leaves hash the raw member bytes, inner nodes
//! hash the concatenation of the sorted pair. A node without a sibling is
//! promoted to the next level unchanged.

use cosmwasm_std::HexBinary;
use sha2::{Digest, Sha256};
use thiserror::Error;

pub const HASH_SIZE: usize = 32;

pub type Hash = [u8; HASH_SIZE];

#[derive(Error, Debug, PartialEq)]
pub enum MerkleError {
    #[error("member set is empty")]
    EmptyMemberSet {},

    #[error("member is not part of the committed set")]
    MemberNotFound {},
}

/// Hash a single member into its leaf.
pub fn hash_leaf(member: &[u8]) -> Hash {
    Sha256::digest(member).into()
}

/// Hash two sibling nodes into their parent. The pair is sorted before
/// hashing, so the result does not depend on which side each node was on.
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Sha256::new();
    hasher.update(lo);
    hasher.update(hi);
    hasher.finalize().into()
}

/// Verify that `member` is part of the set committed to by `root`.
///
/// Recomputes the leaf hash, folds the proof with the sorted-pair rule and
/// compares against the root. A mismatch is a normal `false`, never an
/// error; malformed digests (wrong length) also verify as `false`.
pub fn verify(member: &[u8], proof: &[HexBinary], root: &HexBinary) -> bool {
    if root.len() != HASH_SIZE {
        return false;
    }
    let mut node = hash_leaf(member);
    for sibling in proof {
        let sibling: Hash = match sibling.as_slice().try_into() {
            Ok(hash) => hash,
            Err(_) => return false,
        };
        node = hash_pair(&node, &sibling);
    }
    node.as_slice() == root.as_slice()
}

/// A merkle tree over a fixed member set, kept level by level so that
/// per-member proofs can be read off directly.
///
/// Level 0 holds the leaf hashes in insertion order; the last level holds
/// the single root.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Build a tree over the given members. Errors on an empty set.
    pub fn new<I, M>(members: I) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = M>,
        M: AsRef<[u8]>,
    {
        let leaves: Vec<Hash> = members
            .into_iter()
            .map(|member| hash_leaf(member.as_ref()))
            .collect();
        if leaves.is_empty() {
            return Err(MerkleError::EmptyMemberSet {});
        }

        let mut levels = vec![leaves];
        while levels.last().map_or(false, |level| level.len() > 1) {
            let current = levels.last().map(Vec::as_slice).unwrap_or_default();
            let mut next = Vec::with_capacity((current.len() + 1) / 2);
            for pair in current.chunks(2) {
                match pair {
                    [left, right] => next.push(hash_pair(left, right)),
                    [odd] => next.push(*odd),
                    _ => {}
                }
            }
            levels.push(next);
        }
        Ok(MerkleTree { levels })
    }

    /// The committed root.
    pub fn root(&self) -> HexBinary {
        // new() guarantees a non-empty final level
        let root = self.levels.last().and_then(|level| level.first());
        root.map(|hash| HexBinary::from(hash.as_slice()))
            .unwrap_or_default()
    }

    /// The ordered sibling path for one member, leaf to root.
    pub fn proof_of(&self, member: &[u8]) -> Result<Vec<HexBinary>, MerkleError> {
        let leaf = hash_leaf(member);
        let mut index = self.levels[0]
            .iter()
            .position(|candidate| *candidate == leaf)
            .ok_or(MerkleError::MemberNotFound {})?;

        let mut proof = Vec::new();
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = index ^ 1;
            if sibling < level.len() {
                proof.push(HexBinary::from(level[sibling].as_slice()));
            }
            index /= 2;
        }
        Ok(proof)
    }

    /// Number of committed members (leaves).
    pub fn len(&self) -> usize {
        self.levels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
