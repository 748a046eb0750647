#![no_main]

use libfuzzer_sys::fuzz_target;
use libpngmeta::{
    ChunkType, decode_latin1, get_text_bytes, save_text_bytes, verify, write_chunks,
};

fuzz_target!(|data: (&[u8], &[u8])| {
    let (keyword, value) = data;
    let keyword = decode_latin1(keyword);
    let png = write_chunks([
        (ChunkType::IHDR, &[0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0][..]),
        (ChunkType::IEND, &b""[..]),
    ])
    .unwrap();

    let Ok(saved) = save_text_bytes(&png, &keyword, value) else {
        return;
    };
    verify(&saved).unwrap();
    assert_eq!(get_text_bytes(&saved, &keyword).unwrap(), Some(value));
});
