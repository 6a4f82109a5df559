#![no_main]

//! Fuzz target that verifies both transformations are idempotent and that
//! they never touch text before the first fence.

use libfuzzer_sys::fuzz_target;
use notefix_lib::classifier::HeuristicClassifier;
use notefix_lib::fence::fence_events;
use notefix_lib::{strip, tag};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    // Skip extreme inputs
    if content.len() > 50_000 {
        return;
    }

    let stripped = strip(content);
    assert_eq!(strip(&stripped), stripped, "strip is not idempotent");

    let classifier = HeuristicClassifier::new();
    let Ok(tagged) = tag(content, &classifier) else {
        return;
    };
    let Ok(retagged) = tag(&tagged, &classifier) else {
        return;
    };
    assert_eq!(tagged, retagged, "tag is not idempotent");

    // Everything up to the first delimiter is outside any block
    let prefix_end = fence_events(content)
        .first()
        .map_or(content.len(), |(index, _)| *index);
    assert!(stripped.starts_with(&content[..prefix_end]));
    assert!(tagged.starts_with(&content[..prefix_end]));
});
