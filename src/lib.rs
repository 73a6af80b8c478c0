//! Parsing, formatting and arithmetic of SMPTE timecode (HH:MM:SS:FF) including the drop-frame
//! encoding of 29.97 and 59.94 fps.
//!
//! ```
//! use smpte_timecode::{new_timecode, parse_timecode, TimecodeOptions};
//!
//! let tc = new_timecode(1800, 30000, 1001, TimecodeOptions::default()).unwrap();
//! assert_eq!(tc.to_string(), "00:01:00:02");
//!
//! let parsed = parse_timecode("00:00:00:02", 30000, 1001, TimecodeOptions::default()).unwrap();
//! assert_eq!(tc.subtract(&parsed).unwrap().to_string(), "00:00:59:28");
//! ```

mod conversion;
mod error;
mod rate;
mod timecode;

pub use conversion::{to_fields, to_frame_count, Fields};
pub use error::{Result, TimecodeError};
pub use rate::{is_representable_frames, is_supported_frame_rate, resolve_rate, FrameRate};
pub use timecode::parser::parse_timecode;
pub use timecode::{reset, Timecode, TimecodeOptions};

///Creates a timecode `frames` frames after 00:00:00:00 at numerator/denominator fps
pub fn new_timecode(
    frames: u64,
    numerator: i32,
    denominator: i32,
    options: TimecodeOptions,
) -> Result<Timecode> {
    Timecode::new(frames, numerator, denominator, options)
}
