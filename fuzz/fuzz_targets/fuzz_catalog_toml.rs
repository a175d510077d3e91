#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::{Filter, SpecFilter, SpecificationExt};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Catalog parsing and filtering must never panic
        if let Ok(catalog) = toml::from_str::<sift::Catalog>(content) {
            let spec = sift::by_name("a").or(sift::by_color(sift::Color::Red));
            let matched = SpecFilter.filter(catalog.products(), &spec);
            assert!(matched.len() <= catalog.len());
        }
    }
});
