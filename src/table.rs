//! Named channel columns over decoded frames.

use crate::data::{DecodedAudio, Frame, Value};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Column names for each channel, in channel order.
#[derive(Debug, PartialEq, Clone)]
pub struct ChannelNames(Vec<String>);

impl ChannelNames {
    /// `left`/`right` for stereo, `mono` for one channel and `ch0..chN` otherwise.
    pub fn default_for(channels: u16) -> Self {
        let names = match channels {
            1 => alloc::vec![String::from("mono")],
            2 => alloc::vec![String::from("left"), String::from("right")],
            n => (0..n).map(fallback_name).collect(),
        };

        ChannelNames(names)
    }

    /// Names taken from a channel index to name mapping, e.g. `{0: "left", 1: "right"}`.
    ///
    /// Channels missing from the mapping are named `chN`, entries for
    /// channels past `channels` are ignored.
    pub fn from_map<I, S>(channels: u16, mapping: I) -> Self
    where
        I: IntoIterator<Item = (u16, S)>,
        S: Into<String>,
    {
        let mut names: Vec<String> = (0..channels).map(fallback_name).collect();

        for (index, name) in mapping {
            if let Some(slot) = names.get_mut(usize::from(index)) {
                *slot = name.into();
            }
        }

        ChannelNames(names)
    }

    /// Names in channel order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

fn fallback_name(index: u16) -> String {
    format!("ch{}", index)
}

/// Tabular view of decoded audio, one row per frame.
#[derive(Debug)]
pub struct Table<'a> {
    audio: &'a DecodedAudio,
    columns: ChannelNames,
}

impl<'a> Table<'a> {
    /// Table with the default column names for the channel count.
    pub fn new(audio: &'a DecodedAudio) -> Self {
        let columns = ChannelNames::default_for(audio.channel_count());

        Table { audio, columns }
    }

    /// Table with columns named by a channel index to name mapping.
    pub fn with_names<I, S>(audio: &'a DecodedAudio, mapping: I) -> Self
    where
        I: IntoIterator<Item = (u16, S)>,
        S: Into<String>,
    {
        let columns = ChannelNames::from_map(audio.channel_count(), mapping);

        Table { audio, columns }
    }

    /// Column names.
    pub fn columns(&self) -> &[String] {
        self.columns.as_slice()
    }

    /// Number of rows, i.e. frames.
    pub fn len(&self) -> usize {
        self.audio.frame_count()
    }

    /// `true` when there are no frames.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows in frame order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Record<'_>> + '_ {
        self.audio.frames().map(move |frame| Record {
            columns: self.columns(),
            frame,
        })
    }
}

/// One fixed width row of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a [String],
    frame: Frame<'a>,
}

impl<'a> Record<'a> {
    /// Frame index of this row.
    pub fn index(&self) -> usize {
        self.frame.index()
    }

    /// Value in the column called `name`.
    pub fn get(&self, name: &str) -> Option<Value> {
        let channel = self.columns.iter().position(|c| c == name)?;
        self.frame.get(channel)
    }

    /// `(column, value)` pairs in channel order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Value)> + 'a {
        self.columns.iter().map(String::as_str).zip(self.frame.values())
    }
}
