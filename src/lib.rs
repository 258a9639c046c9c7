//! `#![no_std]` library for reading the header and samples of wav files.
//!
//! Parsing happens in two steps. [`WavFormat::parse`] reads the fixed
//! header fields and finds the `data` chunk, then [`DecodedAudio::decode`]
//! reinterprets the chunk payload as typed samples grouped into frames.
//! [`Wav::from_bytes`] does both.
//!
//! ```rust
//! use std::fs;
//! use wavparse::{Samples, Wav};
//!
//! fn print_wav(path: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = fs::read(path)?;
//!     let wav = Wav::from_bytes(&bytes)?;
//!
//!     println!("{}", wav.format);
//!
//!     match wav.audio.samples() {
//!         Samples::Pcm8(samples) => println!("{:?}", samples),
//!         Samples::Pcm16(samples) => println!("{:?}", samples),
//!         Samples::Pcm32(samples) => println!("{:?}", samples),
//!         Samples::Float32(samples) => println!("{:?}", samples),
//!         Samples::Float64(samples) => println!("{:?}", samples),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Only integer PCM (8, 16 and 32 bit) and IEEE float (32 and 64 bit) are
//! decoded; everything else is reported as [`Error::UnsupportedEncoding`].

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

mod chunk;
mod data;
mod error;
mod fmt;
mod parsing;
pub mod playback;
pub mod table;
mod wav;

pub use data::{decode, DecodedAudio, Encoding, Frame, Sample, Samples, Value, FORMAT_IEEE_FLOAT, FORMAT_PCM};
pub use error::{Error, ErrorKind, Malformed, Result};
pub use fmt::{has_riff_signature, WavFormat, HEADER_LEN};
pub use wav::Wav;
