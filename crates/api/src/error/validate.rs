//! Validation utilities shared by every component

use super::{Error, Result};

/// Validate a construction parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::config(context, reason));
    }
    Ok(())
}

/// Validate a block size against an inclusive range
#[inline(always)]
pub fn block_size(context: &'static str, actual: usize, min: usize, max: usize) -> Result<()> {
    if actual < min || actual > max {
        return Err(Error::config(
            context,
            format!("block_size must be in [{}, {}], got {}", min, max, actual),
        ));
    }
    Ok(())
}

/// Validate an exact length at construction time
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::config(
            context,
            format!("expected {} bytes, got {}", expected, actual),
        ));
    }
    Ok(())
}

/// Validate that streamed input is a whole number of blocks
#[inline(always)]
pub fn block_multiple(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual % block_size != 0 {
        return Err(Error::size(
            context,
            format!("require len(data) % {} == 0, got {}", block_size, actual),
        ));
    }
    Ok(())
}

/// Validate a running total against a declared maximum
#[inline(always)]
pub fn max_total(context: &'static str, total: usize, max: usize) -> Result<()> {
    if total > max {
        return Err(Error::size(context, "too much data"));
    }
    Ok(())
}

/// Validate that a context has not been finalized yet
#[inline(always)]
pub fn not_finalized(finalized: bool, context: &'static str) -> Result<()> {
    if finalized {
        return Err(Error::state(context, "context already finalized"));
    }
    Ok(())
}
