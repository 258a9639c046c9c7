//! Handing decoded audio to an output device.
//!
//! Device drivers live outside this crate. They implement [`PlaybackSink`]
//! and, if their API is callback driven, pull interleaved samples through a
//! [`FrameCursor`].

use crate::data::{DecodedAudio, Sample};

/// Audio output that plays a whole buffer.
pub trait PlaybackSink {
    /// Device specific failure
    type Error;

    /// Play `audio` at `sample_rate_hz`, returning once playback has finished.
    fn play(&mut self, audio: &DecodedAudio, sample_rate_hz: u32) -> Result<(), Self::Error>;
}

/// Outcome of a single [`FrameCursor::fill`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StreamState {
    /// The buffer was filled completely, ask again.
    Continue,
    /// The samples ran out, the tail of the buffer holds silence.
    Complete,
}

/// Pull cursor over interleaved samples, for callback style device APIs.
#[derive(Debug, Clone)]
pub struct FrameCursor<'a, T> {
    samples: &'a [T],
    channels: usize,
    position: usize,
}

impl<'a, T: Sample> FrameCursor<'a, T> {
    /// Cursor at the first frame of `audio`, if it was decoded as `T`.
    pub fn new(audio: &'a DecodedAudio) -> Option<Self> {
        let samples = T::slice_of(audio.samples())?;

        Some(FrameCursor {
            samples,
            channels: usize::from(audio.channel_count()),
            position: 0,
        })
    }

    /// Copy the next samples into `out`.
    ///
    /// Whatever `out` has room for beyond the remaining samples is set to
    /// [`Sample::SILENCE`] and the stream reports [`StreamState::Complete`].
    pub fn fill(&mut self, out: &mut [T]) -> StreamState {
        let remaining = &self.samples[self.position..];
        let count = out.len().min(remaining.len());

        out[..count].copy_from_slice(&remaining[..count]);
        self.position += count;

        if count < out.len() {
            out[count..].fill(T::SILENCE);
            tracing::trace!(position = self.position, "playback stream drained");
            return StreamState::Complete;
        }

        StreamState::Continue
    }

    /// Frames handed out so far.
    pub fn frames_played(&self) -> usize {
        self.position / self.channels
    }

    /// Frames left to hand out.
    pub fn frames_remaining(&self) -> usize {
        (self.samples.len() - self.position) / self.channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::WavFormat;
    use alloc::vec;

    fn stereo_8_bit(data: &[u8]) -> DecodedAudio {
        let format = WavFormat {
            file_size_bytes: 36 + data.len() as u32,
            format_tag: 1,
            channel_count: 2,
            sample_rate_hz: 8_000,
            byte_rate: 16_000,
            block_align: 2,
            bits_per_sample: 8,
            data_chunk_offset: 36,
            data_chunk_size: data.len() as u32,
        };

        DecodedAudio::decode(&format, data).unwrap()
    }

    #[test]
    fn fills_until_drained() {
        let audio = stereo_8_bit(&[1, 2, 3, 4, 5, 6]);
        let mut cursor = FrameCursor::<u8>::new(&audio).unwrap();
        let mut out = [0u8; 4];

        assert_eq!(cursor.fill(&mut out), StreamState::Continue);
        assert_eq!(out, [1, 2, 3, 4]);
        assert_eq!(cursor.frames_played(), 2);
        assert_eq!(cursor.frames_remaining(), 1);

        assert_eq!(cursor.fill(&mut out), StreamState::Complete);
        assert_eq!(out, [5, 6, 0x80, 0x80]);
        assert_eq!(cursor.frames_remaining(), 0);
    }

    #[test]
    fn exact_fit_completes_on_next_pull() {
        let audio = stereo_8_bit(&[1, 2]);
        let mut cursor = FrameCursor::<u8>::new(&audio).unwrap();
        let mut out = [0u8; 2];

        assert_eq!(cursor.fill(&mut out), StreamState::Continue);
        assert_eq!(cursor.fill(&mut out), StreamState::Complete);
        assert_eq!(out, [0x80, 0x80]);
    }

    #[test]
    fn cursor_requires_matching_type() {
        let audio = stereo_8_bit(&[1, 2]);

        assert!(FrameCursor::<i16>::new(&audio).is_none());
    }

    struct RecordingSink {
        played: vec::Vec<(usize, u32)>,
    }

    impl PlaybackSink for RecordingSink {
        type Error = ();

        fn play(&mut self, audio: &DecodedAudio, sample_rate_hz: u32) -> Result<(), ()> {
            self.played.push((audio.frame_count(), sample_rate_hz));
            Ok(())
        }
    }

    #[test]
    fn sink_receives_audio_and_rate() {
        let audio = stereo_8_bit(&[1, 2, 3, 4]);
        let mut sink = RecordingSink { played: vec![] };

        sink.play(&audio, 8_000).unwrap();

        assert_eq!(sink.played, vec![(2, 8_000)]);
    }
}
