use crate::data::DecodedAudio;
use crate::error::Result;
use crate::fmt::WavFormat;
use crate::playback::PlaybackSink;

/// Struct representing a decoded WAV file
#[derive(Debug, Clone, PartialEq)]
pub struct Wav {
    /// Header fields and the location of the data chunk
    pub format: WavFormat,
    /// Samples from the data chunk, grouped into frames
    pub audio: DecodedAudio,
}

impl Wav {
    /// Create new [`Wav`] instance from the full contents of a file
    ///
    /// ```
    /// use wavparse::{Samples, Wav};
    ///
    /// let bytes: [u8; 48] = [
    ///     0x52, 0x49, 0x46, 0x46, // RIFF
    ///     0x28, 0x00, 0x00, 0x00, // chunk size
    ///     0x57, 0x41, 0x56, 0x45, // WAVE
    ///     0x66, 0x6d, 0x74, 0x20, // fmt_
    ///     0x10, 0x00, 0x00, 0x00, // chunk size
    ///     0x01, 0x00, // audio format
    ///     0x02, 0x00, // num channels
    ///     0x44, 0xac, 0x00, 0x00, // sample rate
    ///     0x10, 0xb1, 0x02, 0x00, // byte rate
    ///     0x04, 0x00, // block align
    ///     0x10, 0x00, // bits per sample
    ///     0x64, 0x61, 0x74, 0x61, // data
    ///     0x04, 0x00, 0x00, 0x00, // chunk size
    ///     0x01, 0x00, 0x02, 0x00, // sample 1 L+R
    /// ];
    ///
    /// let wav = Wav::from_bytes(&bytes).unwrap();
    ///
    /// assert_eq!(wav.format.sample_rate_hz, 44_100);
    /// assert_eq!(wav.audio.frame_count(), 1);
    /// assert_eq!(wav.audio.samples(), &Samples::Pcm16(vec![1, 2]));
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let format = WavFormat::parse(bytes)?;
        let audio = DecodedAudio::decode(&format, format.data_chunk(bytes))?;

        Ok(Wav { format, audio })
    }

    /// Play the decoded audio at the sample rate from the header.
    pub fn play<S: PlaybackSink>(&self, sink: &mut S) -> core::result::Result<(), S::Error> {
        sink.play(&self.audio, self.format.sample_rate_hz)
    }
}
