#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use store::{apply_with_limits, IdCounter, LabelGenerator, Lcg, Script, State, StoreLimits};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(script) = text.parse::<Script>() else {
        return;
    };

    let ids = IdCounter::new();
    let mut rows = LabelGenerator::new(&ids, Lcg::new(1));
    let limits = StoreLimits::for_testing();
    let mut state = State::initial();
    for step in script.steps().iter().take(256) {
        let Ok(action) = step.resolve(&state) else {
            continue;
        };
        state = apply_with_limits(&state, &action, &mut rows, &limits);
        let distinct: HashSet<_> = state.data().iter().map(|row| row.id).collect();
        assert_eq!(distinct.len(), state.len());
    }
});
