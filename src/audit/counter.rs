//! Frequency aggregation

use crate::core::model::{FrequencyTable, SortedReport};

/// Count every token occurrence in a single left-to-right pass
pub fn count_tokens<'a, I>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = FrequencyTable::new();
    for token in tokens {
        table.record(token);
    }
    table
}

/// Strip, tokenize and count `raw`, returning the ordered report
pub fn analyze(raw: &str) -> SortedReport {
    let clean = crate::audit::ansi::strip_ansi(raw);
    count_tokens(crate::audit::tokenize::extract_tokens(&clean)).into_sorted()
}
