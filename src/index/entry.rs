//! Index entry encoding.
//!
//! An entry is the single unit of storage: `<fragment>::<docId>`, kept as a
//! zero-scored member of the group's ordered set so that lexicographic
//! member order is the only order. The fragment must not itself contain the
//! `::` separator; decoding splits at the *last* occurrence, so a separator
//! inside a fragment makes range bounds and doc-id recovery ambiguous. The
//! tokenized strategy cannot produce one (fragments are word runs), but
//! whole-phrase fragments are taken verbatim from caller text and the
//! constraint is not enforced here.

/// Separator between the searchable fragment and the document id.
pub const SEPARATOR: &str = "::";

/// Name of the ordered set backing a group's index.
pub fn set_name(group: &str) -> String {
    format!("{group}-search")
}

pub fn encode(fragment: &str, doc_id: &str) -> String {
    format!("{fragment}{SEPARATOR}{doc_id}")
}

/// Recover the document id from a stored entry.
pub fn doc_id(entry: &str) -> Option<&str> {
    entry
        .rfind(SEPARATOR)
        .map(|at| &entry[at + SEPARATOR.len()..])
}

/// Recover the searchable fragment from a stored entry.
pub fn fragment(entry: &str) -> Option<&str> {
    entry.rfind(SEPARATOR).map(|at| &entry[..at])
}
