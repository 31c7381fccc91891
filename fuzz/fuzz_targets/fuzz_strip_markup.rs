#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Extraction must never panic, whatever the markup looks like.
    let _ = quire::extract::strip_markup(data);
});
