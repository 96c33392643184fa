//! Begin/end pair matching strategies.
//!
//! The aggregator asks a matcher one question: given a Begin event at
//! position `i`, where is its End? Swapping the matcher changes which
//! events form pairs without touching aggregation or reporting.

use crate::parser::TraceEvent;

/// Strategy that locates the End event closing a Begin event
pub trait PairMatcher {
    /// Position of the End event matching the Begin at `begin`, if any.
    ///
    /// Called only for positions holding a Begin event of a cataloged
    /// operator. Must not panic for any `begin < events.len()`.
    fn match_end(&self, events: &[TraceEvent], begin: usize) -> Option<usize>;
}

/// Pairs a Begin only with the record immediately after it.
///
/// The successor must carry the same name and an End marker. Interleaved
/// or nested spans (`B(a) B(b) E(a) E(b)`) produce no pairs, and a Begin in
/// the last position simply has no match.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentMatcher;

impl PairMatcher for AdjacentMatcher {
    fn match_end(&self, events: &[TraceEvent], begin: usize) -> Option<usize> {
        let name = &events.get(begin)?.name;
        let next = begin.checked_add(1)?;

        events
            .get(next)
            .filter(|e| e.is_end() && &e.name == name)
            .map(|_| next)
    }
}

/// Pairs a Begin with the End that closes it, allowing nesting.
///
/// Scans forward keeping a depth counter for Begin/End events of the same
/// name; events of other operators are stepped over. Linear in the distance
/// to the closing End.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackMatcher;

impl PairMatcher for StackMatcher {
    fn match_end(&self, events: &[TraceEvent], begin: usize) -> Option<usize> {
        let name = &events.get(begin)?.name;
        let mut depth = 0usize;

        for (offset, event) in events.iter().enumerate().skip(begin + 1) {
            if &event.name != name {
                continue;
            }
            if event.is_begin() {
                depth += 1;
            } else if event.is_end() {
                if depth == 0 {
                    return Some(offset);
                }
                depth -= 1;
            }
        }

        None
    }
}

/// Selectable matching strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MatcherKind {
    /// Begin followed immediately by its End
    #[default]
    Adjacent,
    /// Nested spans of the same operator
    Stack,
}

impl MatcherKind {
    pub fn matcher(self) -> Box<dyn PairMatcher> {
        match self {
            MatcherKind::Adjacent => Box::new(AdjacentMatcher),
            MatcherKind::Stack => Box::new(StackMatcher),
        }
    }
}
