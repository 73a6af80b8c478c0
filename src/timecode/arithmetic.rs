use crate::error::{Result, TimecodeError};
use crate::timecode::Timecode;

///Arithmetic works on frame counts and rebuilds the result with [Timecode::reset], so the result
/// keeps the rate and separators of self
impl Timecode {
    fn check_rate(&self, other: &Timecode) -> Result<()> {
        if self.rate != other.rate {
            return Err(TimecodeError::MismatchFrameRate {
                left: self.rate.to_string(),
                right: other.rate.to_string(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Timecode) -> Result<Timecode> {
        self.check_rate(other)?;
        self.add_frames(other.frame_count())
    }

    pub fn subtract(&self, other: &Timecode) -> Result<Timecode> {
        self.check_rate(other)?;
        self.subtract_frames(other.frame_count())
    }

    pub fn add_frames(&self, frames: u64) -> Result<Timecode> {
        let total = self.frame_count().checked_add(frames).ok_or(TimecodeError::TooManyFrames)?;
        self.reset(total)
    }

    pub fn subtract_frames(&self, frames: u64) -> Result<Timecode> {
        let total = self.frame_count().checked_sub(frames).ok_or(TimecodeError::UnderflowFrames)?;
        self.reset(total)
    }
}
