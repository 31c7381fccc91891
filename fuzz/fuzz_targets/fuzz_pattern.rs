#![no_main]

use libfuzzer_sys::fuzz_target;
use quire::query::Pattern;

fuzz_target!(|data: (&str, &str)| {
    let (query, text) = data;

    // Any non-empty query compiles; scanning must never panic, and every
    // reported range must be sorted, disjoint, and inside the text.
    if let Ok(pattern) = Pattern::compile(query) {
        let matches = pattern.find_all(text);
        let total = text.chars().count();

        let mut prev_end = 0;
        for m in matches {
            assert!(m.start <= m.end);
            assert!(m.end <= total);
            assert!(m.start >= prev_end);
            prev_end = m.end;
        }
    }
});
