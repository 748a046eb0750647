use crc32fast::Hasher;

/// CRC-32 as used by PNG: polynomial `0xEDB88320` (reflected),
/// initial value and final xor `0xFFFFFFFF`.
#[derive(Clone, Default, Debug)]
pub(crate) struct Crc32(Hasher);

impl Crc32 {
    #[inline]
    pub(crate) fn new() -> Self {
        Self(Hasher::new())
    }

    #[inline]
    pub(crate) fn update(&mut self, buf: &[u8]) {
        self.0.update(buf);
    }

    #[inline]
    pub(crate) fn finalize(self) -> u32 {
        self.0.finalize()
    }
}
