/// RIFF chunks are tagged with 4 byte identifiers.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ChunkTag {
    /// Root level "chunk"
    Riff,
    /// Mandatory chunk for WAV files, contains data such as the sample rate, bit depth, and number of channels.
    Fmt,
    /// Mandatory chunk for WAV files, contains the (interleaved) samples.
    Data,
    /// File identifier, should be located right after the RIFF tag and chunk size
    Wave,
    /// Unknown/unhandled chunk tag.
    Unknown([u8; 4]),
}

impl ChunkTag {
    pub(crate) fn from_bytes(bytes: &[u8; 4]) -> Self {
        match bytes {
            [b'R', b'I', b'F', b'F'] => ChunkTag::Riff,
            [b'f', b'm', b't', b' '] => ChunkTag::Fmt,
            [b'd', b'a', b't', b'a'] => ChunkTag::Data,
            [b'W', b'A', b'V', b'E'] => ChunkTag::Wave,
            _ => ChunkTag::Unknown(*bytes),
        }
    }

    pub(crate) fn to_bytes(self) -> [u8; 4] {
        match self {
            ChunkTag::Riff => [b'R', b'I', b'F', b'F'],
            ChunkTag::Fmt => [b'f', b'm', b't', b' '],
            ChunkTag::Data => [b'd', b'a', b't', b'a'],
            ChunkTag::Wave => [b'W', b'A', b'V', b'E'],
            ChunkTag::Unknown(bytes) => bytes,
        }
    }

    /// Offset of the first occurrence of this tag at or after `from`.
    ///
    /// This is a plain byte scan, not a chunk walk, so it also finds a tag
    /// that follows chunks with bogus size fields.
    pub(crate) fn find(self, bytes: &[u8], from: usize) -> Option<usize> {
        let needle = self.to_bytes();

        bytes
            .get(from..)?
            .windows(needle.len())
            .position(|w| w == needle)
            .map(|pos| pos + from)
    }
}
