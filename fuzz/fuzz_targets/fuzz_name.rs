#![no_main]

use libfuzzer_sys::fuzz_target;
use music_theory_core::{pitch, PitchOptions};
use music_theory_engine::{Chord, Key, ResolveOptions, Scale};

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    // Resolution either succeeds or returns an error; it never panics.
    let strict = ResolveOptions::new().strict(true);
    let _ = Chord::of(name);
    let _ = Scale::of(name);
    let _ = Scale::of_with(name, &strict);
    if let Ok(key) = Key::of(name) {
        assert!(key.relative().is_some());
        let _ = key.scale();
    }
    let _ = pitch::of_note(name, &PitchOptions::default());
});
