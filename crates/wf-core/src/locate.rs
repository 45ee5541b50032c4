use crate::constants::{HEIGHT_SPAN, HEIGHT_STEP};

/// A single term occurrence and the placement height derived from it.
///
/// The height is a deterministic function of the occurrence index and the
/// total token count; no random state is involved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TermMatch {
    pub index: usize,
    pub height: f32,
}

/// Scan the token sequence for exact matches of `term`.
///
/// Terms are matched case-sensitively against the already-lowercased stream.
/// Yields `(HEIGHT_SPAN / len) * index * HEIGHT_STEP` per occurrence. Lazy,
/// finite, and restartable (call again to rescan); zero matches is a valid
/// outcome and yields an empty sequence.
pub fn locate<'a>(tokens: &'a [String], term: &'a str) -> impl Iterator<Item = TermMatch> + 'a {
    let len = tokens.len();
    tokens
        .iter()
        .enumerate()
        .filter(move |(_, token)| token.as_str() == term)
        .map(move |(index, _)| TermMatch {
            index,
            height: (HEIGHT_SPAN / len as f32) * index as f32 * HEIGHT_STEP,
        })
}
