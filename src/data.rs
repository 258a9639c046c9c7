use crate::error::{Error, Malformed, Result};
use crate::fmt::WavFormat;
use alloc::vec::Vec;
use core::fmt;
use core::slice::ChunksExact;

/// `WAVE_FORMAT_PCM`, linear integer samples
pub const FORMAT_PCM: u16 = 0x0001;
/// `WAVE_FORMAT_IEEE_FLOAT`, floating point samples
pub const FORMAT_IEEE_FLOAT: u16 = 0x0003;

/// Numeric sample representation selected from the format tag and bit depth.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Encoding {
    /// 8 bit unsigned PCM, silence at `0x80`
    Pcm8,
    /// 16 bit signed PCM
    Pcm16,
    /// 32 bit signed PCM
    Pcm32,
    /// 32 bit IEEE float
    Float32,
    /// 64 bit IEEE float
    Float64,
}

impl Encoding {
    /// Map a `(format_tag, bits_per_sample)` pair onto a sample representation.
    ///
    /// 24 bit PCM is rejected along with every unlisted pairing; it has no
    /// power-of-two sample width to reinterpret the data chunk as.
    pub fn from_tag(format_tag: u16, bits_per_sample: u16) -> Result<Self> {
        match (format_tag, bits_per_sample) {
            (FORMAT_PCM, 8) => Ok(Encoding::Pcm8),
            (FORMAT_PCM, 16) => Ok(Encoding::Pcm16),
            (FORMAT_PCM, 32) => Ok(Encoding::Pcm32),
            (FORMAT_IEEE_FLOAT, 32) => Ok(Encoding::Float32),
            (FORMAT_IEEE_FLOAT, 64) => Ok(Encoding::Float64),
            _ => Err(Error::UnsupportedEncoding {
                format_tag,
                bits_per_sample,
            }),
        }
    }

    /// Width of a single sample in bytes.
    pub fn bytes_per_sample(self) -> usize {
        match self {
            Encoding::Pcm8 => 1,
            Encoding::Pcm16 => 2,
            Encoding::Pcm32 | Encoding::Float32 => 4,
            Encoding::Float64 => 8,
        }
    }
}

/// Flat, interleaved samples of a single representation.
#[derive(Debug, PartialEq, Clone)]
pub enum Samples {
    /// 8 bit unsigned PCM
    Pcm8(Vec<u8>),
    /// 16 bit signed PCM
    Pcm16(Vec<i16>),
    /// 32 bit signed PCM
    Pcm32(Vec<i32>),
    /// 32 bit float
    Float32(Vec<f32>),
    /// 64 bit float
    Float64(Vec<f64>),
}

impl Samples {
    /// Get the length of the internal sample Vec.
    pub fn len(&self) -> usize {
        match self {
            Samples::Pcm8(s) => s.len(),
            Samples::Pcm16(s) => s.len(),
            Samples::Pcm32(s) => s.len(),
            Samples::Float32(s) => s.len(),
            Samples::Float64(s) => s.len(),
        }
    }

    /// `true` when no samples were decoded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Representation these samples were decoded as.
    pub fn encoding(&self) -> Encoding {
        match self {
            Samples::Pcm8(_) => Encoding::Pcm8,
            Samples::Pcm16(_) => Encoding::Pcm16,
            Samples::Pcm32(_) => Encoding::Pcm32,
            Samples::Float32(_) => Encoding::Float32,
            Samples::Float64(_) => Encoding::Float64,
        }
    }

    /// Sample at flat index `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            Samples::Pcm8(s) => s.get(index).copied().map(Value::U8),
            Samples::Pcm16(s) => s.get(index).copied().map(Value::I16),
            Samples::Pcm32(s) => s.get(index).copied().map(Value::I32),
            Samples::Float32(s) => s.get(index).copied().map(Value::F32),
            Samples::Float64(s) => s.get(index).copied().map(Value::F64),
        }
    }
}

/// A single sample, tagged with its representation.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Value {
    /// 8 bit unsigned PCM
    U8(u8),
    /// 16 bit signed PCM
    I16(i16),
    /// 32 bit signed PCM
    I32(i32),
    /// 32 bit float
    F32(f32),
    /// 64 bit float
    F64(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U8(v) => write!(f, "{}", v),
            Value::I16(v) => write!(f, "{}", v),
            Value::I32(v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
        }
    }
}

/// Primitive types that a data chunk can be reinterpreted as.
pub trait Sample: Copy + PartialEq + fmt::Debug {
    /// Representation this type decodes
    const ENCODING: Encoding;
    /// Value that produces no output
    const SILENCE: Self;

    /// Decode one sample from exactly `size_of::<Self>()` little-endian bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;

    /// Borrow `samples` as this type, if the representation matches.
    fn slice_of(samples: &Samples) -> Option<&[Self]>;

    /// Wrap an owned buffer in the matching [`Samples`] variant.
    fn into_samples(buffer: Vec<Self>) -> Samples;
}

macro_rules! impl_sample {
    ($t:ty, $variant:ident, $silence:expr) => {
        impl Sample for $t {
            const ENCODING: Encoding = Encoding::$variant;
            const SILENCE: Self = $silence;

            fn from_le_slice(bytes: &[u8]) -> Self {
                let mut raw = [0u8; core::mem::size_of::<$t>()];
                raw.copy_from_slice(bytes);
                <$t>::from_le_bytes(raw)
            }

            fn slice_of(samples: &Samples) -> Option<&[Self]> {
                match samples {
                    Samples::$variant(s) => Some(s.as_slice()),
                    _ => None,
                }
            }

            fn into_samples(buffer: Vec<Self>) -> Samples {
                Samples::$variant(buffer)
            }
        }
    };
}

impl_sample!(u8, Pcm8, 0x80);
impl_sample!(i16, Pcm16, 0);
impl_sample!(i32, Pcm32, 0);
impl_sample!(f32, Float32, 0.0);
impl_sample!(f64, Float64, 0.0);

fn read_samples<T: Sample>(bytes: &[u8]) -> Samples {
    let width = core::mem::size_of::<T>();
    let mut buffer = Vec::with_capacity(bytes.len() / width);

    buffer.extend(bytes.chunks_exact(width).map(T::from_le_slice));

    T::into_samples(buffer)
}

/// Decoded samples grouped into frames of `channel_count` samples each.
///
/// Built once from a [`WavFormat`] and the data chunk bytes and never mutated.
#[derive(Debug, PartialEq, Clone)]
pub struct DecodedAudio {
    channel_count: u16,
    samples: Samples,
}

impl DecodedAudio {
    /// Reinterpret the data chunk payload according to `format`.
    ///
    /// `data` is the payload only, without the 8 byte chunk header. Bytes
    /// beyond `data_chunk_size` (e.g. a pad byte) are ignored.
    pub fn decode(format: &WavFormat, data: &[u8]) -> Result<Self> {
        let encoding = format.encoding()?;

        if format.channel_count == 0 {
            return Err(Malformed::ZeroChannels.into());
        }

        let declared = format.data_chunk_size;
        let data = data.get(..declared as usize).ok_or(Error::TruncatedData {
            declared,
            available: data.len(),
        })?;

        let width = encoding.bytes_per_sample();
        if data.len() % width != 0 {
            return Err(Malformed::PartialSample {
                len: data.len(),
                width,
            }
            .into());
        }

        let total = data.len() / width;
        if total % usize::from(format.channel_count) != 0 {
            return Err(Malformed::ChannelMismatch {
                samples: total,
                channels: format.channel_count,
            }
            .into());
        }

        let samples = match encoding {
            Encoding::Pcm8 => read_samples::<u8>(data),
            Encoding::Pcm16 => read_samples::<i16>(data),
            Encoding::Pcm32 => read_samples::<i32>(data),
            Encoding::Float32 => read_samples::<f32>(data),
            Encoding::Float64 => read_samples::<f64>(data),
        };

        tracing::debug!(
            ?encoding,
            samples = total,
            frames = total / usize::from(format.channel_count),
            "decoded data chunk"
        );

        Ok(DecodedAudio {
            channel_count: format.channel_count,
            samples,
        })
    }

    /// Number of samples in each frame.
    pub fn channel_count(&self) -> u16 {
        self.channel_count
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.samples.len() / usize::from(self.channel_count)
    }

    /// Representation of the samples.
    pub fn encoding(&self) -> Encoding {
        self.samples.encoding()
    }

    /// Flat, interleaved samples.
    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    /// Take ownership of the flat samples.
    pub fn into_samples(self) -> Samples {
        self.samples
    }

    /// Frame at `index`, or `None` past the end.
    pub fn frame(&self, index: usize) -> Option<Frame<'_>> {
        if index < self.frame_count() {
            Some(Frame { audio: self, index })
        } else {
            None
        }
    }

    /// All frames in order.
    pub fn frames(&self) -> impl ExactSizeIterator<Item = Frame<'_>> + '_ {
        (0..self.frame_count()).map(move |index| Frame { audio: self, index })
    }

    /// Typed frames, if the samples were decoded as `T`.
    ///
    /// ```
    /// # use wavparse::{DecodedAudio, WavFormat};
    /// # let format = WavFormat {
    /// #     file_size_bytes: 0, format_tag: 1, channel_count: 2, sample_rate_hz: 8_000,
    /// #     byte_rate: 32_000, block_align: 4, bits_per_sample: 16,
    /// #     data_chunk_offset: 36, data_chunk_size: 8,
    /// # };
    /// let audio = DecodedAudio::decode(&format, &[1, 0, 2, 0, 3, 0, 4, 0]).unwrap();
    /// let frames: Vec<&[i16]> = audio.typed_frames::<i16>().unwrap().collect();
    ///
    /// assert_eq!(frames, vec![&[1, 2][..], &[3, 4][..]]);
    /// assert!(audio.typed_frames::<f32>().is_none());
    /// ```
    pub fn typed_frames<T: Sample>(&self) -> Option<ChunksExact<'_, T>> {
        T::slice_of(&self.samples).map(|s| s.chunks_exact(usize::from(self.channel_count)))
    }
}

/// One sample per channel at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    audio: &'a DecodedAudio,
    index: usize,
}

impl<'a> Frame<'a> {
    /// Position of this frame in the stream.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        usize::from(self.audio.channel_count)
    }

    /// Always `false`, frames hold at least one channel.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample for `channel`.
    pub fn get(&self, channel: usize) -> Option<Value> {
        if channel >= self.len() {
            return None;
        }

        self.audio.samples.get(self.index * self.len() + channel)
    }

    /// Samples in channel order.
    pub fn values(&self) -> impl Iterator<Item = Value> + 'a {
        let frame = *self;
        (0..frame.len()).filter_map(move |channel| frame.get(channel))
    }
}

/// Decode the data chunk payload, see [`DecodedAudio::decode`].
pub fn decode(format: &WavFormat, data: &[u8]) -> Result<DecodedAudio> {
    DecodedAudio::decode(format, data)
}
