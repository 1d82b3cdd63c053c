#![no_main]

use chip_input::{CodeList, is_valid, parse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);

    for piece in parse(&raw) {
        assert!(!piece.is_empty());
        assert!(!piece.chars().any(char::is_uppercase), "{piece:?}");
    }

    let mut list = CodeList::new();
    list.extend_parsed(&raw);
    assert!(list.iter().all(is_valid));

    let restored = CodeList::from_serialized(&list.serialize());
    assert_eq!(restored, list);
});
