#![no_main]

use ict_core::{parse_query_output, resolve, ResolverError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let input = String::from_utf8_lossy(data);
    let (query, rest) = input.split_once('\n').unwrap_or((&input, ""));
    let query: String = query.chars().take(100).collect();
    let targets: Vec<String> = parse_query_output(rest).into_iter().take(50).collect();

    for use_fuzzy in [false, true] {
        match resolve(&targets, &query, use_fuzzy) {
            Ok(resolution) => assert!(targets.contains(&resolution.target)),
            Err(ResolverError::Ambiguous { candidates, .. }) => {
                assert!(candidates.len() > 1);
                assert!(candidates.iter().all(|c| !c.is_empty()));
            },
            Err(ResolverError::NoMatch { total, .. }) => assert_eq!(total, targets.len()),
        }
    }
});
