//! Unique parameter names for builder-introduced lambdas.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

static GLOBAL: SymbolGenerator = SymbolGenerator::new();

const SEPARATOR: char = '_';

/// Produces names that are distinct from every other name the same generator
/// has returned.
///
/// A name is the caller's prefix, an underscore and the next counter value.
/// The counter holds only digits, so the last underscore always splits a name
/// back into its prefix and number, and two calls never produce the same name
/// even when a prefix itself ends in `_` and digits. The counter is bumped
/// with a single atomic read-modify-write, so concurrent callers never see the
/// same value. Uniqueness is the only guarantee; names are predictable.
///
/// ```
/// use fql_builder::SymbolGenerator;
///
/// let symbols = SymbolGenerator::new();
/// assert_eq!(symbols.generate("map"), "map_1");
/// assert_eq!(symbols.generate("filter"), "filter_2");
/// assert_ne!(symbols.generate("x_1"), symbols.generate("x"));
/// ```
#[derive(Debug)]
pub struct SymbolGenerator {
    counter: AtomicU64,
}

impl SymbolGenerator {
    /// Creates a generator whose first symbol is numbered 1.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a generator whose first symbol is numbered `last + 1`.
    pub const fn starting_at(last: u64) -> Self {
        SymbolGenerator {
            counter: AtomicU64::new(last),
        }
    }

    /// Process-wide generator used by the `*_fn` shorthands in
    /// [`query`](crate::query).
    pub fn global() -> &'static SymbolGenerator {
        &GLOBAL
    }

    pub fn generate(&self, prefix: &str) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let symbol = format!("{prefix}{SEPARATOR}{n}");
        trace!(%symbol, "generated symbol");
        symbol
    }

    /// Number of symbols handed out so far (plus the starting offset).
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl Default for SymbolGenerator {
    fn default() -> Self {
        Self::new()
    }
}
