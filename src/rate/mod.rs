use std::fmt::{Display, Formatter};

use crate::error::{Result, TimecodeError};

///Describes a supported frame rate. Instances only live in the static tables below and are handed
/// out as `&'static FrameRate`
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct FrameRate {
    ///Nominal integer rate used for field arithmetic (30 for 29.97)
    round_fps: u32,
    numerator: i32,
    denominator: i32,
    ///Frame codes skipped at the start of every minute not divisible by ten
    drop_frames: u32,
    frames_per_minute: u32,
    frames_per_ten_minutes: u32,
}

impl FrameRate {
    const fn new(round_fps: u32, numerator: i32, denominator: i32, drop_frames: u32) -> Self {
        Self {
            round_fps,
            numerator,
            denominator,
            drop_frames,
            frames_per_minute: round_fps * 60 - drop_frames,
            frames_per_ten_minutes: round_fps * 600 - 9 * drop_frames,
        }
    }
    pub fn round_fps(&self) -> u32 {
        self.round_fps
    }
    pub fn numerator(&self) -> i32 {
        self.numerator
    }
    pub fn denominator(&self) -> i32 {
        self.denominator
    }
    pub fn drop_frames(&self) -> u32 {
        self.drop_frames
    }
    ///Frames in a minute that drops codes
    pub fn frames_per_minute(&self) -> u32 {
        self.frames_per_minute
    }
    pub fn frames_per_ten_minutes(&self) -> u32 {
        self.frames_per_ten_minutes
    }
    pub fn is_drop_frame(&self) -> bool {
        self.drop_frames > 0
    }
    ///The actual frames per second, e.g. 29.97002997 for 30000/1001
    pub fn fps_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
    ///Number of frames in 24 hours. Every frame count below this is representable
    pub fn max_frames(&self) -> u64 {
        24 * 6 * u64::from(self.frames_per_ten_minutes)
    }
    pub fn is_representable(&self, frames: u64) -> bool {
        frames < self.max_frames()
    }
    ///Compares the fraction by value, 60/1 and 120/2 are the same rate
    fn matches(&self, numerator: i32, denominator: i32) -> bool {
        i64::from(numerator) * i64::from(self.denominator)
            == i64::from(self.numerator) * i64::from(denominator)
    }
}

impl Display for FrameRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)?;
        } else {
            let fps = format!("{:.3}", self.fps_f64());
            write!(f, "{}", fps.trim_end_matches('0').trim_end_matches('.'))?;
        }
        if self.is_drop_frame() {
            write!(f, "DF")?;
        }
        Ok(())
    }
}

///Rates without dropped frames, including the NDF variants of 29.97 and 59.94
static NON_DROP_FRAME_RATES: [FrameRate; 11] = [
    FrameRate::new(10, 10, 1, 0),
    FrameRate::new(15, 15, 1, 0),
    FrameRate::new(24, 24000, 1001, 0),
    FrameRate::new(24, 24, 1, 0),
    FrameRate::new(25, 25, 1, 0),
    FrameRate::new(30, 30000, 1001, 0),
    FrameRate::new(30, 30, 1, 0),
    FrameRate::new(48, 48, 1, 0),
    FrameRate::new(50, 50, 1, 0),
    FrameRate::new(60, 60000, 1001, 0),
    FrameRate::new(60, 60, 1, 0),
];

static DROP_FRAME_RATES: [FrameRate; 2] = [
    FrameRate::new(30, 30000, 1001, 2),
    FrameRate::new(60, 60000, 1001, 4),
];

///Looks up the frame rate for numerator/denominator. 29.97 and 59.94 exist with and without dropped
/// frames, `prefer_drop_frame` decides which one is returned
pub fn resolve_rate(
    numerator: i32,
    denominator: i32,
    prefer_drop_frame: bool,
) -> Result<&'static FrameRate> {
    if denominator != 0 {
        let drop_frame_rates: &'static [FrameRate] =
            if prefer_drop_frame { &DROP_FRAME_RATES } else { &[] };
        let found = drop_frame_rates
            .iter()
            .chain(NON_DROP_FRAME_RATES.iter())
            .find(|r| r.matches(numerator, denominator));
        if let Some(rate) = found {
            return Ok(rate);
        }
    }
    log::debug!("no frame rate matches {}/{}", numerator, denominator);
    Err(TimecodeError::UnsupportedFrameRate {
        numerator,
        denominator,
    })
}

///Every drop-frame rate has a non-drop-frame twin, so looking up the latter is enough
pub fn is_supported_frame_rate(numerator: i32, denominator: i32) -> bool {
    resolve_rate(numerator, denominator, false).is_ok()
}

pub fn is_representable_frames(
    frames: u64,
    numerator: i32,
    denominator: i32,
    prefer_drop_frame: bool,
) -> bool {
    match resolve_rate(numerator, denominator, prefer_drop_frame) {
        Ok(rate) => rate.is_representable(frames),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rate(
        numerator: i32,
        denominator: i32,
        prefer_drop_frame: bool,
        round_fps: u32,
        drop_frames: u32,
    ) {
        let r = resolve_rate(numerator, denominator, prefer_drop_frame).unwrap();
        assert_eq!(r.round_fps(), round_fps);
        assert_eq!(r.drop_frames(), drop_frames);
        assert_eq!(r.frames_per_minute(), round_fps * 60 - drop_frames);
        assert_eq!(r.frames_per_ten_minutes(), round_fps * 600 - 9 * drop_frames);
    }

    #[test]
    fn test_resolve_supported() {
        assert_rate(10, 1, true, 10, 0);
        assert_rate(15, 1, true, 15, 0);
        assert_rate(24000, 1001, true, 24, 0);
        assert_rate(24, 1, true, 24, 0);
        assert_rate(25, 1, true, 25, 0);
        assert_rate(30000, 1001, true, 30, 2);
        assert_rate(30000, 1001, false, 30, 0);
        assert_rate(30, 1, true, 30, 0);
        assert_rate(48, 1, true, 48, 0);
        assert_rate(50, 1, true, 50, 0);
        assert_rate(60000, 1001, true, 60, 4);
        assert_rate(60000, 1001, false, 60, 0);
        assert_rate(60, 1, true, 60, 0);
    }

    #[test]
    fn test_resolve_by_value() {
        assert_rate(120, 2, true, 60, 0);
        assert_rate(60000000, 1001000, true, 60, 4);
        assert_rate(-25, -1, false, 25, 0);
    }

    #[test]
    fn test_resolve_unsupported() {
        let unsupported = [
            (1, 0),
            (0, 0),
            (0, 1001),
            (1, 1),
            (29995, 1000),
            (29997, 1000),
            (29960, 1000),
            (29980, 1000),
            (59930, 1000),
            (59950, 1000),
            (60001, 1000),
            (-30, 1),
        ];
        for (n, d) in unsupported {
            let expected = TimecodeError::UnsupportedFrameRate {
                numerator: n,
                denominator: d,
            };
            assert_eq!(resolve_rate(n, d, true), Err(expected));
            assert!(!is_supported_frame_rate(n, d));
        }
    }

    #[test]
    fn test_rate_identity() {
        let df = resolve_rate(30000, 1001, true).unwrap();
        let ndf = resolve_rate(30000, 1001, false).unwrap();
        assert_ne!(df, ndf);
        assert!(std::ptr::eq(df, resolve_rate(30000, 1001, true).unwrap()));
        assert_ne!(ndf, resolve_rate(30, 1, true).unwrap());
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported_frame_rate(30000, 1001));
        assert!(is_supported_frame_rate(60000, 1001));
        assert!(is_supported_frame_rate(24, 1));
        assert!(!is_supported_frame_rate(1, 1));
    }

    #[test]
    fn test_is_representable() {
        let max_df = 24 * 6 * (1800 + 1798 * 9);
        assert!(is_representable_frames(max_df - 1, 30000, 1001, true));
        assert!(!is_representable_frames(max_df, 30000, 1001, true));
        //without dropped frames the day has more frames
        assert!(is_representable_frames(max_df, 30000, 1001, false));
        assert!(!is_representable_frames(24 * 6 * 18000, 30000, 1001, false));
        assert!(!is_representable_frames(0, 1, 0, true));
    }

    #[test]
    fn test_display() {
        assert_eq!(resolve_rate(24, 1, true).unwrap().to_string(), "24");
        assert_eq!(resolve_rate(24000, 1001, true).unwrap().to_string(), "23.976");
        assert_eq!(resolve_rate(30000, 1001, true).unwrap().to_string(), "29.97DF");
        assert_eq!(resolve_rate(30000, 1001, false).unwrap().to_string(), "29.97");
        assert_eq!(resolve_rate(60000, 1001, true).unwrap().to_string(), "59.94DF");
    }
}
