//! Choosing between multiple candidate locations for an ident
//!
//! Resolution runs in two passes over a sequence of candidate lists. The
//! first pass fixes every single-candidate entry. The second walks the
//! sequence from the end so that each ambiguous entry already has a resolved
//! forward neighbour, and picks the candidate nearest to it. The last entry
//! has no forward neighbour and falls back to the previous one: a resolved
//! point, or when that is ambiguous too, the candidate closest to any of its
//! candidates.

use super::geodesy::distance_nm;
use crate::app::models::Coord;
use crate::{Error, Result};

/// Candidate closest to `target`
fn nearest<'a>(target: &Coord, candidates: &'a [Coord]) -> Option<&'a Coord> {
    candidates
        .iter()
        .min_by(|a, b| distance_nm(target, a).total_cmp(&distance_nm(target, b)))
}

/// Candidate in `candidates` closest to any point in `others`
fn nearest_pair<'a>(candidates: &'a [Coord], others: &[Coord]) -> Option<&'a Coord> {
    let gap = |c: &Coord| {
        others
            .iter()
            .map(|other| distance_nm(c, other))
            .fold(f64::INFINITY, f64::min)
    };
    candidates
        .iter()
        .min_by(|a, b| gap(a).total_cmp(&gap(b)))
}

/// Resolve one coordinate per entry
///
/// `labels` names each entry for error reporting and must be as long as
/// `candidates`.
///
/// # Errors
/// * `Error::UnresolvedIdent` if an entry has no candidates
/// * `Error::AmbiguousIdent` if an ambiguous entry has no neighbours
pub fn disambiguate(labels: &[String], candidates: Vec<Vec<Coord>>) -> Result<Vec<Coord>> {
    let label = |i: usize| labels.get(i).cloned().unwrap_or_default();

    if let Some(i) = candidates.iter().position(Vec::is_empty) {
        return Err(Error::unresolved_ident(label(i)));
    }

    let mut resolved: Vec<Option<Coord>> = candidates
        .iter()
        .map(|options| match options.as_slice() {
            [single] => Some(single.clone()),
            _ => None,
        })
        .collect();

    for i in (0..candidates.len()).rev() {
        if resolved[i].is_some() {
            continue;
        }
        let options = &candidates[i];

        let choice = if let Some(Some(next)) = resolved.get(i + 1) {
            nearest(next, options)
        } else if i > 0 {
            match &resolved[i - 1] {
                Some(previous) => nearest(previous, options),
                None => nearest_pair(options, &candidates[i - 1]),
            }
        } else {
            None
        };

        match choice {
            Some(coord) => resolved[i] = Some(coord.clone()),
            None => return Err(Error::ambiguous_ident(label(i), options.len())),
        }
    }

    resolved
        .into_iter()
        .enumerate()
        .map(|(i, coord)| coord.ok_or_else(|| Error::unresolved_ident(label(i))))
        .collect()
}
