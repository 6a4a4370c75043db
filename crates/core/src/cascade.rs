//! Ordered strategy cascade with a shared minimum-result gate.
//!
//! The FAQ and step extractors each have a structural primary strategy and a
//! typographic fallback. Running both unconditionally would produce noisy
//! low-confidence duplicates, so the fallback only activates when the primary
//! result is clearly insufficient. The gate threshold is [`MIN_RESULTS`], the
//! same minimum the assembler applies before emitting a FAQ or how-to payload
//! shape.

/// Minimum number of extracted entries for a strategy result (and, downstream,
/// a payload shape) to be considered sufficient.
pub const MIN_RESULTS: usize = 2;

/// Run strategies in order, returning the first result that meets the gate.
///
/// Strategy results replace each other, never merge: when a strategy falls
/// short of `min_results`, its partial output is discarded before the next
/// strategy runs. If no strategy meets the gate, the last strategy's result
/// stands (the assembler degrades on insufficient counts anyway).
pub fn run<T>(markup: &str, strategies: &[fn(&str) -> Vec<T>], min_results: usize) -> Vec<T> {
    let mut results = Vec::new();
    for strategy in strategies {
        results = strategy(markup);
        if results.len() >= min_results {
            return results;
        }
    }
    results
}
