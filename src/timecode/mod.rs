use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::time::Duration;

use num_traits::ToPrimitive;

use crate::conversion::{to_fields, to_frame_count, Fields};
use crate::error::{Result, TimecodeError};
use crate::rate::{resolve_rate, FrameRate};

mod arithmetic;
pub(crate) mod parser;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

///Optional parameters for creating a timecode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimecodeOptions {
    ///Picks 29.97DF / 59.94DF over their non-drop-frame variants. Defaults to true
    pub prefer_drop_frame: bool,
    ///Separates hours, minutes and seconds. Defaults to ':'
    pub separator: char,
    ///Separates seconds and frames on drop-frame rates. Defaults to ':'
    pub drop_separator: char,
}

impl Default for TimecodeOptions {
    fn default() -> Self {
        Self {
            prefer_drop_frame: true,
            separator: ':',
            drop_separator: ':',
        }
    }
}

impl TimecodeOptions {
    pub fn with_prefer_drop_frame(mut self, prefer_drop_frame: bool) -> Self {
        self.prefer_drop_frame = prefer_drop_frame;
        self
    }
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
    pub fn with_drop_separator(mut self, drop_separator: char) -> Self {
        self.drop_separator = drop_separator;
        self
    }
}

///An immutable timecode at a supported frame rate. Operations return new values
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timecode {
    rate: &'static FrameRate,
    fields: Fields,
    separator: char,
    drop_separator: char,
}

impl Timecode {
    ///Creates the timecode `frames` frames after 00:00:00:00
    pub fn new(
        frames: u64,
        numerator: i32,
        denominator: i32,
        options: TimecodeOptions,
    ) -> Result<Self> {
        let rate = resolve_rate(numerator, denominator, options.prefer_drop_frame)?;
        Self::from_frames(rate, frames, options.separator, options.drop_separator)
    }

    ///Every timecode is created here, which guarantees valid fields
    fn from_frames(
        rate: &'static FrameRate,
        frames: u64,
        separator: char,
        drop_separator: char,
    ) -> Result<Self> {
        Ok(Self {
            rate,
            fields: to_fields(rate, frames)?,
            separator,
            drop_separator,
        })
    }

    ///Returns a timecode at `frames` with the rate and separators of self
    pub fn reset(&self, frames: u64) -> Result<Self> {
        Self::from_frames(self.rate, frames, self.separator, self.drop_separator)
    }

    pub fn hours(&self) -> u8 {
        self.fields.hours
    }
    pub fn minutes(&self) -> u8 {
        self.fields.minutes
    }
    pub fn seconds(&self) -> u8 {
        self.fields.seconds
    }
    pub fn frames(&self) -> u8 {
        self.fields.frames
    }
    pub fn fields(&self) -> Fields {
        self.fields
    }
    pub fn rate(&self) -> &'static FrameRate {
        self.rate
    }
    pub fn framerate_numerator(&self) -> i32 {
        self.rate.numerator()
    }
    pub fn framerate_denominator(&self) -> i32 {
        self.rate.denominator()
    }
    pub fn separator(&self) -> char {
        self.separator
    }
    pub fn drop_separator(&self) -> char {
        self.drop_separator
    }
    pub fn is_drop_frame(&self) -> bool {
        self.rate.is_drop_frame()
    }

    ///Number of frames since 00:00:00:00, not counting dropped codes
    pub fn frame_count(&self) -> u64 {
        to_frame_count(self.rate, &self.fields)
    }

    ///Exact duration since 00:00:00:00 in seconds as (numerator, denominator)
    pub fn duration_fraction(&self) -> (u64, u64) {
        //supported rates always have a positive fraction, possibly with both signs flipped
        let numerator = u64::from(self.rate.numerator().unsigned_abs());
        let denominator = u64::from(self.rate.denominator().unsigned_abs());
        (self.frame_count() * denominator, numerator)
    }

    ///Duration since 00:00:00:00 at the actual frame rate, truncated to nanoseconds
    pub fn duration(&self) -> Duration {
        let (numerator, denominator) = self.duration_fraction();
        let nanos = u128::from(numerator) * NANOS_PER_SECOND / u128::from(denominator);
        let secs = nanos / NANOS_PER_SECOND;
        let subsec = nanos % NANOS_PER_SECOND;
        Duration::new(secs.to_u64().unwrap_or(u64::MAX), subsec.to_u32().unwrap_or(0))
    }

    pub fn as_secs_f64(&self) -> f64 {
        let (numerator, denominator) = self.duration_fraction();
        numerator.to_f64().unwrap_or(f64::NAN) / denominator.to_f64().unwrap_or(f64::NAN)
    }
}

///Rebuilds `timecode` at `frames`. `None` stands for a timecode that was never created
pub fn reset(timecode: Option<&Timecode>, frames: u64) -> Result<Timecode> {
    match timecode {
        Some(tc) => tc.reset(frames),
        None => Err(TimecodeError::NilTimecode),
    }
}

///Formats as HH:MM:SS:FF. The separator in front of the frames is only used on drop-frame rates
impl Display for Timecode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let last_separator =
            if self.rate.is_drop_frame() { self.drop_separator } else { self.separator };
        write!(
            f,
            "{:0>2}{}{:0>2}{}{:0>2}{}{:0>2}",
            self.fields.hours,
            self.separator,
            self.fields.minutes,
            self.separator,
            self.fields.seconds,
            last_separator,
            self.fields.frames
        )
    }
}

impl Debug for Timecode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self, self.rate)
    }
}

///Timecodes of different rates are not comparable, neither are timecodes that only differ in
/// separators
impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.rate != other.rate {
            return None;
        }
        match self.fields.cmp(&other.fields) {
            //same position but different separators
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}
