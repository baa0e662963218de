//! Untyped parsing of arbitrary text never panics, and whatever it
//! accepts renders to a literal that classifies the same way.

#![no_main]

use aura_codec::{classify, nuck, rend};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    let Ok(coin) = classify(input) else {
        return;
    };
    let rendered = rend(&coin);
    assert_eq!(nuck(&rendered), Some(coin), "{input:?} -> {rendered:?}");
});
