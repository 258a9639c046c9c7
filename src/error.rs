use thiserror::Error;

/// Structural problems with the container or with the sample layout.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Malformed {
    /// Fewer bytes than the fixed header occupies
    #[error("header needs at least 36 bytes, got {len}")]
    HeaderTooShort {
        /// Length of the buffer that was handed in
        len: usize,
    },
    /// No `data` tag anywhere after the RIFF preamble
    #[error("no data chunk found")]
    NoDataChunkFound,
    /// The `data` tag sits too close to the end for its size field to fit
    #[error("data chunk at {offset} has no room for its size field")]
    DataSizeUnreadable {
        /// Offset of the `data` tag
        offset: usize,
    },
    /// The header declares zero channels
    #[error("channel count is zero")]
    ZeroChannels,
    /// The data chunk does not hold a whole number of samples
    #[error("{len} data bytes is not a multiple of the {width}-byte sample width")]
    PartialSample {
        /// Number of data bytes
        len: usize,
        /// Width of a single sample in bytes
        width: usize,
    },
    /// The decoded sample count does not split evenly into frames
    #[error("{samples} samples do not divide into {channels} channels")]
    ChannelMismatch {
        /// Total decoded samples
        samples: usize,
        /// Channels declared in the header
        channels: u16,
    },
}

/// Error type for different parsing and decoding failures
#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum Error {
    /// Structurally invalid header, missing data chunk or a frame/channel mismatch
    #[error("malformed container: {0}")]
    MalformedContainer(Malformed),
    /// Format tag and bit depth pairing that has no sample representation
    #[error("unsupported encoding: format tag {format_tag}, {bits_per_sample} bits per sample")]
    UnsupportedEncoding {
        /// Format tag read from the header
        format_tag: u16,
        /// Bits per sample read from the header
        bits_per_sample: u16,
    },
    /// The data chunk declares more bytes than the buffer holds
    #[error("truncated data: chunk declares {declared} bytes but only {available} are present")]
    TruncatedData {
        /// Size from the data chunk header
        declared: u32,
        /// Bytes actually present after the chunk header
        available: usize,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// See [`Error::MalformedContainer`]
    MalformedContainer,
    /// See [`Error::UnsupportedEncoding`]
    UnsupportedEncoding,
    /// See [`Error::TruncatedData`]
    TruncatedData,
}

impl Error {
    /// Which of the three failure classes this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedContainer(_) => ErrorKind::MalformedContainer,
            Error::UnsupportedEncoding { .. } => ErrorKind::UnsupportedEncoding,
            Error::TruncatedData { .. } => ErrorKind::TruncatedData,
        }
    }
}

impl From<Malformed> for Error {
    fn from(reason: Malformed) -> Self {
        Error::MalformedContainer(reason)
    }
}

/// Result alias used throughout the crate
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_include_details() {
        let err = Error::from(Malformed::HeaderTooShort { len: 20 });
        assert_eq!(err.to_string(), "malformed container: header needs at least 36 bytes, got 20");

        let err = Error::from(Malformed::ChannelMismatch {
            samples: 3,
            channels: 2,
        });
        assert_eq!(err.to_string(), "malformed container: 3 samples do not divide into 2 channels");

        assert_eq!(
            Malformed::PartialSample { len: 3, width: 2 }.to_string(),
            "3 data bytes is not a multiple of the 2-byte sample width"
        );
        assert_eq!(Malformed::NoDataChunkFound.to_string(), "no data chunk found");
    }

    #[test]
    fn kinds() {
        assert_eq!(Error::from(Malformed::ZeroChannels).kind(), ErrorKind::MalformedContainer);
        assert_eq!(
            Error::TruncatedData {
                declared: 100,
                available: 50
            }
            .kind(),
            ErrorKind::TruncatedData
        );
    }
}
