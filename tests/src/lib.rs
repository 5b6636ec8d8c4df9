//! Shared helpers for the xycrypt integration tests and benchmarks

use xycrypt_api::{Result, StreamingTransform};

/// Splits `data` at the given offsets (taken modulo the remaining length)
///
/// Offsets that would produce an empty piece still produce one, so the
/// transform also sees zero-length `update` calls.
pub fn split_at_offsets<'a>(data: &'a [u8], cuts: &[usize]) -> Vec<&'a [u8]> {
    let mut pieces = Vec::with_capacity(cuts.len() + 1);
    let mut rest = data;
    for &cut in cuts {
        let at = if rest.is_empty() { 0 } else { cut % (rest.len() + 1) };
        let (head, tail) = rest.split_at(at);
        pieces.push(head);
        rest = tail;
    }
    pieces.push(rest);
    pieces
}

/// Feeds `pieces` through `transform` and appends its final output
pub fn run_pieces<T>(transform: &mut T, pieces: &[&[u8]]) -> Result<Vec<u8>>
where
    T: StreamingTransform + ?Sized,
{
    let mut out = Vec::new();
    for piece in pieces {
        out.extend(transform.update(piece)?);
    }
    out.extend(transform.finalize()?);
    Ok(out)
}

/// Feeds `data` in pieces of `step` bytes
pub fn run_stepped<T>(transform: &mut T, data: &[u8], step: usize) -> Result<Vec<u8>>
where
    T: StreamingTransform + ?Sized,
{
    let pieces: Vec<&[u8]> = data.chunks(step.max(1)).collect();
    run_pieces(transform, &pieces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_covers_input() {
        let data = b"abcdefghij";
        let pieces = split_at_offsets(data, &[3, 0, 100, 2]);
        assert_eq!(pieces.concat(), data);
        assert_eq!(pieces.len(), 5);
        assert_eq!(pieces[0], b"abc");
        assert!(pieces[1].is_empty());
    }
}
