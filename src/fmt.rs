use crate::chunk::ChunkTag;
use crate::data::Encoding;
use crate::error::{Malformed, Result};
use crate::parsing::{le_u16, le_u32, window};
use core::fmt;

/// Number of bytes covered by the fixed-offset header fields.
pub const HEADER_LEN: usize = 36;

/// Chunks start after `RIFF`, the container size and `WAVE`.
const FIRST_CHUNK_OFFSET: usize = 12;

/// Size of a chunk header: a 4 byte tag followed by a `u32` size.
pub(crate) const CHUNK_HEADER_LEN: usize = 8;

/// Format descriptor read from the header of a WAV file.
///
/// Every field except the data chunk locator lives at a fixed absolute offset,
/// which assumes `fmt ` is the first chunk after `WAVE`. The data chunk is
/// located by scanning for its tag, so other chunks may come before it.
///
/// for more information see [`here`]
///
/// [`here`]: http://soundfile.sapp.org/doc/WaveFormat/
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WavFormat {
    /// container size field at offset 4, i.e. the file size minus 8
    pub file_size_bytes: u32,
    /// encoding identifier at offset 20, `1` for integer PCM and `3` for IEEE float
    pub format_tag: u16,
    /// number of interleaved channels, offset 22
    pub channel_count: u16,
    /// sample rate, typical values are `44_100`, `48_000` or `96_000`
    pub sample_rate_hz: u32,
    /// average bytes per second, offset 28
    pub byte_rate: u32,
    /// bytes per frame across all channels, offset 32
    pub block_align: u16,
    /// bit depth for each sample, typical values are `16` or `24`
    pub bits_per_sample: u16,
    /// offset of the `data` tag
    pub data_chunk_offset: usize,
    /// size field following the `data` tag
    pub data_chunk_size: u32,
}

impl WavFormat {
    /// Parse the fixed header fields and locate the data chunk.
    ///
    /// The buffer must hold at least the first 36 bytes of the file and
    /// everything up to and including the data chunk header. Whether the
    /// data chunk payload is present in full is not checked here.
    ///
    /// ```
    /// use wavparse::WavFormat;
    ///
    /// let mut bytes = Vec::new();
    /// bytes.extend_from_slice(b"RIFF");
    /// bytes.extend_from_slice(&40u32.to_le_bytes());
    /// bytes.extend_from_slice(b"WAVEfmt ");
    /// bytes.extend_from_slice(&16u32.to_le_bytes());
    /// bytes.extend_from_slice(&[0x01, 0x00, 0x02, 0x00]);
    /// bytes.extend_from_slice(&44_100u32.to_le_bytes());
    /// bytes.extend_from_slice(&176_400u32.to_le_bytes());
    /// bytes.extend_from_slice(&[0x04, 0x00, 0x10, 0x00]);
    /// bytes.extend_from_slice(b"data");
    /// bytes.extend_from_slice(&4u32.to_le_bytes());
    /// bytes.extend_from_slice(&[0x01, 0x00, 0x02, 0x00]);
    ///
    /// let format = WavFormat::parse(&bytes).unwrap();
    ///
    /// assert_eq!(format.sample_rate_hz, 44_100);
    /// assert_eq!(format.channel_count, 2);
    /// assert_eq!(format.data_chunk_offset, 36);
    /// assert_eq!(format.data_chunk_size, 4);
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(Malformed::HeaderTooShort { len: bytes.len() }.into());
        }

        let too_short = Malformed::HeaderTooShort { len: bytes.len() };
        let field_u16 = |offset| le_u16(bytes, offset).ok_or(too_short);
        let field_u32 = |offset| le_u32(bytes, offset).ok_or(too_short);

        let file_size_bytes = field_u32(4)?;
        let format_tag = field_u16(20)?;
        let channel_count = field_u16(22)?;
        let sample_rate_hz = field_u32(24)?;
        let byte_rate = field_u32(28)?;
        let block_align = field_u16(32)?;
        let bits_per_sample = field_u16(34)?;

        let data_chunk_offset = ChunkTag::Data
            .find(bytes, FIRST_CHUNK_OFFSET)
            .ok_or(Malformed::NoDataChunkFound)?;

        let data_chunk_size = le_u32(bytes, data_chunk_offset + 4)
            .ok_or(Malformed::DataSizeUnreadable { offset: data_chunk_offset })?;

        let format = WavFormat {
            file_size_bytes,
            format_tag,
            channel_count,
            sample_rate_hz,
            byte_rate,
            block_align,
            bits_per_sample,
            data_chunk_offset,
            data_chunk_size,
        };

        if !has_riff_signature(bytes) {
            tracing::warn!("missing RIFF/WAVE signature, reading fixed offsets anyway");
        }

        let expected_align = u32::from(channel_count) * u32::from(bits_per_sample) / 8;
        if u32::from(block_align) != expected_align {
            tracing::warn!(
                block_align,
                expected = expected_align,
                "block align disagrees with channel count and bit depth"
            );
        }

        tracing::debug!(
            format_tag,
            channel_count,
            sample_rate_hz,
            bits_per_sample,
            data_chunk_offset,
            data_chunk_size,
            "parsed wav header"
        );

        Ok(format)
    }

    /// Sample representation for this header, see [`Encoding::from_tag`].
    pub fn encoding(&self) -> Result<Encoding> {
        Encoding::from_tag(self.format_tag, self.bits_per_sample)
    }

    /// Start of the data chunk payload.
    pub fn data_start(&self) -> usize {
        self.data_chunk_offset + CHUNK_HEADER_LEN
    }

    /// Slice out the data chunk payload.
    ///
    /// The slice is clamped to what `bytes` holds, so a short buffer yields a
    /// short slice and the decoder reports [`crate::Error::TruncatedData`].
    pub fn data_chunk<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        let start = self.data_start().min(bytes.len());
        let end = start
            .saturating_add(self.data_chunk_size as usize)
            .min(bytes.len());

        &bytes[start..end]
    }

    /// Playback length in seconds, derived from the data size and block align.
    pub fn duration_secs(&self) -> Option<f64> {
        if self.sample_rate_hz == 0 || self.block_align == 0 {
            return None;
        }

        let frames = self.data_chunk_size / u32::from(self.block_align);
        Some(f64::from(frames) / f64::from(self.sample_rate_hz))
    }
}

/// Whether `bytes` start with `RIFF....WAVE`.
pub fn has_riff_signature(bytes: &[u8]) -> bool {
    let riff = window::<4>(bytes, 0).map(|b| ChunkTag::from_bytes(&b));
    let wave = window::<4>(bytes, 8).map(|b| ChunkTag::from_bytes(&b));

    riff == Some(ChunkTag::Riff) && wave == Some(ChunkTag::Wave)
}

impl fmt::Display for WavFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File Size: {:.3} MiB", f64::from(self.file_size_bytes) / 1_048_576.0)?;
        writeln!(f, "Format Tag: {}", self.format_tag)?;
        writeln!(f, "Channels: {}", self.channel_count)?;
        writeln!(f, "Sample Rate: {} Hz", self.sample_rate_hz)?;
        writeln!(f, "Byte Rate: {}", self.byte_rate)?;
        writeln!(f, "Block Align: {}", self.block_align)?;
        writeln!(f, "Bits per Sample: {}", self.bits_per_sample)?;
        write!(f, "Data Size: {} bytes", self.data_chunk_size)
    }
}
