//! Compression of used spinor indices into contiguous-range notation.
//!
//! The MOLTRA directive of DIRAC accepts molecular-orbital selections in a compact notation where
//! maximal runs of consecutive indices are written as `start..end` and isolated indices as bare
//! numbers, *e.g.* `5..8 10 12..15`.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{self, bail, format_err};
use itertools::Itertools;

#[cfg(test)]
#[path = "ranges_tests.rs"]
mod ranges_tests;

/// Compresses the used indices of a per-symmetry index map into contiguous-range notation.
///
/// Indices are traversed in ascending order; a run is extended while consecutive used indices are
/// seen and closed on a gap or at the end of the map. Unused indices contribute nothing. A run of
/// length one is emitted as a bare number, a longer run as `start..end`; runs are space-separated
/// with no leading or trailing separator.
///
/// # Arguments
///
/// * `index_used_map` - A map from molecular-orbital index to a boolean indicating whether the
///   corresponding Kramers pair takes part in the calculation.
///
/// # Returns
///
/// The range string, empty if no index is used.
pub fn compress_used_indices(index_used_map: &BTreeMap<usize, bool>) -> String {
    let mut runs: Vec<(usize, usize)> = Vec::new();
    for (&index, &used) in index_used_map.iter() {
        if !used {
            continue;
        }
        match runs.last_mut() {
            Some((_, end)) if index == *end + 1 => *end = index,
            _ => runs.push((index, index)),
        }
    }
    runs.iter()
        .map(|(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}..{end}")
            }
        })
        .join(" ")
}

/// Expands a contiguous-range string back into the set of indices it denotes.
///
/// This is the inverse of [`compress_used_indices`] restricted to the used indices.
///
/// # Arguments
///
/// * `ranges` - A range string such as `5..8 10 12..15`.
///
/// # Returns
///
/// The set of indices denoted by the string.
pub fn expand_range_str(ranges: &str) -> Result<BTreeSet<usize>, anyhow::Error> {
    let mut indices = BTreeSet::new();
    for token in ranges.split_whitespace() {
        if let Some((start, end)) = token.split_once("..") {
            let start = start
                .parse::<usize>()
                .map_err(|_| format_err!("Unparsable range start in token `{token}`."))?;
            let end = end
                .parse::<usize>()
                .map_err(|_| format_err!("Unparsable range end in token `{token}`."))?;
            if end <= start {
                bail!("Degenerate or reversed range in token `{token}`.");
            }
            indices.extend(start..=end);
        } else {
            indices.insert(
                token
                    .parse::<usize>()
                    .map_err(|_| format_err!("Unparsable index token `{token}`."))?,
            );
        }
    }
    Ok(indices)
}
