#![no_main]

use libfuzzer_sys::fuzz_target;
use libpngmeta::{
    ChecksumPolicy, DEFAULT_KEYWORD, PNG_SIGNATURE, ReadOptions, get_text, get_text_with,
    read_chunks, remove_text, save_text, text_entries, verify,
};

fuzz_target!(|data: &[u8]| {
    let mut png = PNG_SIGNATURE.to_vec();
    png.extend_from_slice(data);

    if let Ok(chunks) = read_chunks(&png) {
        for chunk in chunks {
            if chunk.is_err() {
                break;
            }
        }
    }
    if let Ok(entries) = text_entries(&png) {
        entries.for_each(drop);
    }
    let tolerant = get_text(&png, DEFAULT_KEYWORD);
    let strict = get_text_with(
        &png,
        DEFAULT_KEYWORD,
        ReadOptions::builder()
            .checksum(ChecksumPolicy::Reject)
            .build(),
    );
    if let Ok(found) = strict {
        assert_eq!(tolerant.unwrap(), found);
    }

    if verify(&png).is_ok() {
        let saved = save_text(&png, DEFAULT_KEYWORD, "fuzz").unwrap();
        assert!(verify(&saved).is_ok());
        let removed = remove_text(&saved, DEFAULT_KEYWORD).unwrap();
        assert_eq!(get_text(&removed, DEFAULT_KEYWORD).unwrap(), None);
    }
});
