#![forbid(unsafe_code)]

//! `kintree` is a headless family-tree resolution engine.
//!
//! It takes the flat person-record collection a family-network backend
//! returns (people with optional mother/father/spouse references and a
//! generation number) and resolves that graph into a deterministic,
//! de-duplicated, generation-ordered layout structure. Rendering, fetching
//! and session scoping are the caller's business; this crate is a pure
//! transform.
//!
//! ```
//! let payload = r#"[
//!   {"personId": "P1", "generation": 1, "firstName": "Arjun",
//!    "gender": "M", "spouseId": "P2"},
//!   {"personId": "P2", "generation": 1, "firstName": "Meera",
//!    "gender": "F", "spouseId": "P1"}
//! ]"#;
//!
//! let records = kintree::decode_members(payload).unwrap();
//! let tree = kintree::build_family_tree(&records);
//!
//! assert_eq!(tree.generations.len(), 1);
//! assert_eq!(tree.generations[0].members.len(), 1);
//! assert_eq!(tree.total_member_count, 2);
//! ```

pub use kintree_core::*;

/// One-shot convenience over [`Engine::build_tree`] with default settings
/// (ages computed against the current local date).
pub fn build_family_tree(records: &[PersonRecord]) -> FamilyTree {
    Engine::new().build_tree(records)
}
