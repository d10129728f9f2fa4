//! Hierarchical account code allocation.
//!
//! Codes are `<major>.<minor>.<sequence>`. The classification fixes
//! `major.minor`; the sequence is allocated here. Despesas has a one-segment
//! prefix (`5`), so every new expense account opens a fresh `5.<n>` bucket
//! and starts at sequence 1.
//!
//! Allocation is a pure function over a snapshot. Two creators working on the
//! same snapshot get the same code; storage must reject the second insert
//! through a unique constraint on `code` and the caller regenerates.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::classification::Classification;
use super::error::AccountError;

/// How the next sequence under a prefix is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeAllocation {
    /// Highest existing sequence under the prefix plus one.
    ///
    /// Independent of input order; always yields an unused code.
    #[default]
    MaxSequence,
    /// Last code under the prefix, in input order, with its final segment
    /// incremented.
    ///
    /// Only correct when the existing codes are sorted ascending.
    LastInOrder,
}

/// Computes the next free code for `classification`.
///
/// Fails with [`AccountError::SequenceExhausted`] when the number to
/// increment is already `u64::MAX` (or wider).
pub fn next_code<'a, I>(
    classification: Classification,
    existing: I,
    allocation: CodeAllocation,
) -> Result<String, AccountError>
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix = classification.prefix();
    if prefix.contains('.') {
        next_in_prefix(prefix, existing, allocation)
    } else {
        next_bucket(prefix, existing)
    }
}

/// `<prefix>.<max bucket + 1>.1`, where the bucket is the digit run after
/// `<prefix>.`.
fn next_bucket<'a, I>(prefix: &str, existing: I) -> Result<String, AccountError>
where
    I: IntoIterator<Item = &'a str>,
{
    let max_bucket = existing
        .into_iter()
        .filter_map(|code| bucket_number(prefix, code))
        .max()
        .unwrap_or(0);

    Ok(format!("{prefix}.{}.1", increment(prefix, max_bucket)?))
}

fn bucket_number(prefix: &str, code: &str) -> Option<u64> {
    let rest = code.strip_prefix(prefix)?.strip_prefix('.')?;
    leading_number(rest)
}

fn next_in_prefix<'a, I>(prefix: &str, existing: I, allocation: CodeAllocation) -> Result<String, AccountError>
where
    I: IntoIterator<Item = &'a str>,
{
    let siblings = existing.into_iter().filter(|code| is_under(prefix, code));

    match allocation {
        CodeAllocation::MaxSequence => {
            let max = siblings.map(last_segment).max();
            match max {
                Some(sequence) => Ok(format!("{prefix}.{}", increment(prefix, sequence)?)),
                None => Ok(format!("{prefix}.1")),
            }
        }
        CodeAllocation::LastInOrder => match siblings.last() {
            Some(last) => {
                let head = last.rsplit_once('.').map_or(prefix, |(head, _)| head);
                Ok(format!("{head}.{}", increment(prefix, last_segment(last))?))
            }
            None => Ok(format!("{prefix}.1")),
        },
    }
}

fn increment(prefix: &str, number: u64) -> Result<u64, AccountError> {
    number
        .checked_add(1)
        .ok_or_else(|| AccountError::SequenceExhausted {
            prefix: prefix.to_string(),
        })
}

fn is_under(prefix: &str, code: &str) -> bool {
    code.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('.'))
}

/// Integer value of the leading digit run of `text`.
///
/// `None` when `text` does not start with a digit. Runs too wide for `u64`
/// read as `u64::MAX`, so incrementing them fails instead of wrapping.
fn leading_number(text: &str) -> Option<u64> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let digits = &text[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}

/// Leading number of the final dot-separated segment; 0 when it has none.
fn last_segment(code: &str) -> u64 {
    let segment = code.rsplit('.').next().unwrap_or_default();
    leading_number(segment).unwrap_or_else(|| {
        warn!(code, "Trailing code segment has no leading digits, treating as 0");
        0
    })
}
