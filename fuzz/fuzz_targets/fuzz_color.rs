#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(token) = std::str::from_utf8(data) {
        if let Ok(color) = token.parse::<sift::Color>() {
            // Every accepted token parses back from its canonical form
            assert_eq!(color.as_str().parse::<sift::Color>().ok(), Some(color));
        }
    }
});
