#![no_main]

use concordia::format::{LoadConfig, check_writable, format_city_line, parse_cities, parse_city_line};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    // Lenient parsing never fails on in-memory text
    let parsed = match parse_cities(text, LoadConfig::lenient()) {
        Ok(parsed) => parsed,
        Err(e) => panic!("lenient parse failed: {e}"),
    };

    // Every city that parsed is writable and re-parses to itself
    for city in &parsed.cities {
        if let Err(e) = check_writable(city) {
            panic!("parsed city is not writable: {e}");
        }
        let line = format_city_line(city);
        match parse_city_line(&line) {
            Ok(again) if &again == city => {}
            other => panic!("{line:?} did not round-trip: {other:?}"),
        }
    }
});
