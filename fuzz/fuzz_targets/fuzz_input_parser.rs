//! Fuzz target for the terminal input parser.
//!
//! Arbitrary byte streams, split at an arbitrary point, must never panic and
//! must leave nothing pending once flushed.

#![no_main]

use libfuzzer_sys::fuzz_target;
use termedit::input::InputParser;

fuzz_target!(|input: (u8, &[u8])| {
    let (split, data) = input;

    let mut whole = InputParser::new();
    let _ = whole.feed(data);
    let _ = whole.flush_pending();
    assert!(!whole.has_pending());

    let at = if data.is_empty() { 0 } else { split as usize % data.len() };
    let mut chunked = InputParser::new();
    let _ = chunked.feed(&data[..at]);
    let _ = chunked.feed(&data[at..]);
    let _ = chunked.flush_pending();
    assert!(!chunked.has_pending());
});
