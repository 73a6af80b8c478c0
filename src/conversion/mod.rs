use num_traits::ToPrimitive;

use crate::error::{Result, TimecodeError};
use crate::rate::FrameRate;

///The four displayed components of a timecode. Ordering is lexicographic, which is the display
/// order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Fields {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

impl Fields {
    pub fn new(hours: u8, minutes: u8, seconds: u8, frames: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }
    ///True if the frame code is skipped by the rate (first codes of a minute not divisible by ten)
    pub fn is_dropped(&self, rate: &FrameRate) -> bool {
        self.seconds == 0 && self.minutes % 10 != 0 && u32::from(self.frames) < rate.drop_frames()
    }
}

///Narrows a field value. Only fails if the input was not representable in the first place
fn narrow(value: u64) -> Result<u8> {
    value.to_u8().ok_or(TimecodeError::TooManyFrames)
}

///Converts an absolute frame count into displayed fields.
/// For drop-frame rates the count is first expanded by the frame codes that were skipped up to this
/// point, after that plain sexagesimal division applies
pub fn to_fields(rate: &FrameRate, frames: u64) -> Result<Fields> {
    if !rate.is_representable(frames) {
        return Err(TimecodeError::TooManyFrames);
    }
    let drop = u64::from(rate.drop_frames());
    let per_ten_minutes = u64::from(rate.frames_per_ten_minutes());
    let per_minute = u64::from(rate.frames_per_minute());

    let tens = frames / per_ten_minutes;
    let rest = frames % per_ten_minutes;
    let mut expanded = frames + 9 * drop * tens;
    if rest > drop {
        expanded += drop * ((rest - drop) / per_minute);
    }

    let fps = u64::from(rate.round_fps());
    Ok(Fields {
        hours: narrow(expanded / (fps * 3600))?,
        minutes: narrow(expanded / (fps * 60) % 60)?,
        seconds: narrow(expanded / fps % 60)?,
        frames: narrow(expanded % fps)?,
    })
}

///Inverse of [to_fields]. Counts the nominal frames and removes the codes dropped up to there
pub fn to_frame_count(rate: &FrameRate, fields: &Fields) -> u64 {
    let fps = u64::from(rate.round_fps());
    let nominal = u64::from(fields.hours) * 3600 * fps
        + u64::from(fields.minutes) * 60 * fps
        + u64::from(fields.seconds) * fps
        + u64::from(fields.frames);

    //per minute and per ten minutes without any drops
    let per_minute = fps * 60;
    let per_ten_minutes = fps * 600;
    let drop = u64::from(rate.drop_frames());
    let dropped =
        nominal / per_ten_minutes * drop * 9 + nominal % per_ten_minutes / per_minute * drop;

    nominal - dropped
}
