//! Decoding WAV files produced by `hound`.

use std::io::Cursor;

use wavparse::table::Table;
use wavparse::{has_riff_signature, Error, ErrorKind, Samples, Value, Wav, FORMAT_PCM};

fn write_wav<S: hound::Sample + Copy>(spec: hound::WavSpec, samples: &[S]) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).expect("Failed to create WAV writer");
        for &s in samples {
            writer.write_sample(s).expect("Failed to write sample");
        }
        writer.finalize().expect("Failed to finalize WAV");
    }
    cursor.into_inner()
}

fn int_spec(channels: u16, bits_per_sample: u16) -> hound::WavSpec {
    hound::WavSpec {
        channels,
        sample_rate: 44_100,
        bits_per_sample,
        sample_format: hound::SampleFormat::Int,
    }
}

#[test]
fn decodes_16_bit_stereo() {
    let interleaved: Vec<i16> = (0..64).map(|i| (i * 512 - 16_384) as i16).collect();
    let bytes = write_wav(int_spec(2, 16), &interleaved);

    let wav = Wav::from_bytes(&bytes).unwrap();

    assert!(has_riff_signature(&bytes));
    assert_eq!(wav.format.format_tag, 1);
    assert_eq!(wav.format.channel_count, 2);
    assert_eq!(wav.format.sample_rate_hz, 44_100);
    assert_eq!(wav.format.bits_per_sample, 16);
    assert_eq!(wav.format.block_align, 4);
    assert_eq!(wav.format.data_chunk_size, 128);
    assert_eq!(wav.format.file_size_bytes as usize, bytes.len() - 8);

    assert_eq!(wav.audio.frame_count(), wav.format.data_chunk_size as usize / 4);
    assert_eq!(wav.audio.samples(), &Samples::Pcm16(interleaved.clone()));

    let first = wav.audio.frame(0).unwrap();
    assert_eq!(first.get(0), Some(Value::I16(interleaved[0])));
    assert_eq!(first.get(1), Some(Value::I16(interleaved[1])));
}

#[test]
fn decodes_8_bit_mono_as_unsigned() {
    let bytes = write_wav(int_spec(1, 8), &[-128i8, 0, 127]);

    let wav = Wav::from_bytes(&bytes).unwrap();

    assert_eq!(wav.audio.samples(), &Samples::Pcm8(vec![0, 128, 255]));
}

#[test]
fn rejects_24_bit_pcm() {
    let mut bytes = write_wav(int_spec(1, 24), &[1i32, -1, 8_388_607]);
    // hound tags 24 bit files as WAVE_FORMAT_EXTENSIBLE, force plain PCM
    bytes[20..22].copy_from_slice(&FORMAT_PCM.to_le_bytes());

    assert_eq!(
        Wav::from_bytes(&bytes).unwrap_err(),
        Error::UnsupportedEncoding {
            format_tag: 1,
            bits_per_sample: 24
        }
    );
}

#[test]
fn rejects_extensible_format() {
    let bytes = write_wav(int_spec(1, 24), &[1i32, -1, 8_388_607]);

    assert_eq!(
        Wav::from_bytes(&bytes).unwrap_err(),
        Error::UnsupportedEncoding {
            format_tag: 0xfffe,
            bits_per_sample: 24
        }
    );
}

#[test]
fn truncated_file_is_reported() {
    let interleaved: Vec<i16> = (0..32).collect();
    let bytes = write_wav(int_spec(2, 16), &interleaved);

    let err = Wav::from_bytes(&bytes[..bytes.len() - 10]).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TruncatedData);
}

#[test]
fn table_view_over_stereo_file() {
    let bytes = write_wav(int_spec(2, 16), &[10i16, -10, 20, -20]);
    let wav = Wav::from_bytes(&bytes).unwrap();

    let table = Table::new(&wav.audio);
    let rights: Vec<Value> = table.rows().filter_map(|r| r.get("right")).collect();

    assert_eq!(table.columns(), ["left", "right"]);
    assert_eq!(rights, vec![Value::I16(-10), Value::I16(-20)]);
}
