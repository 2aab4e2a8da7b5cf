#![no_main]

use envfile::{check_source, is_statement};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = is_statement(s);
        if let Err(errors) = check_source(s) {
            // Every reported span must slice the source on char boundaries
            for err in errors {
                let span = err.byte_span();
                assert_eq!(&s[span.start..span.end], err.text);
            }
        }
    }
});
