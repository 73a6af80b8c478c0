use std::sync::OnceLock;

use num_traits::ToPrimitive;
use regex::Regex;

use crate::conversion::{to_frame_count, Fields};
use crate::error::{Result, TimecodeError};
use crate::rate::resolve_rate;
use crate::timecode::{Timecode, TimecodeOptions};

///HH Sep1 MM Sep2 SS Sep3 FF. 'p' marks drop-frame in some generators and is only allowed in front
/// of minutes and seconds
const TIMECODE_PATTERN: &str =
    r"^([01][0-9]|2[0-3])([p:;.,])([0-5][0-9])([p:;.,])([0-5][0-9])([:;.,])([0-5][0-9])$";

fn timecode_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(TIMECODE_PATTERN).expect("timecode pattern compiles"))
}

///Parses text like `01:23:45;28`. Separators are taken from the text, of the options only
/// `prefer_drop_frame` is used.
///
/// On drop-frame rates a frames field below the dropped count in a minute not divisible by ten
/// (e.g. `00:01:00;00` at 29.97DF) is raised to the dropped count instead of being rejected.
pub fn parse_timecode(
    text: &str,
    numerator: i32,
    denominator: i32,
    options: TimecodeOptions,
) -> Result<Timecode> {
    let rate = resolve_rate(numerator, denominator, options.prefer_drop_frame)?;

    let invalid = || {
        log::trace!("rejected timecode {:?}", text);
        TimecodeError::InvalidTimecode(text.to_string())
    };
    let captures = timecode_pattern().captures(text).ok_or_else(invalid)?;
    let group = |index: usize| captures.get(index).map(|m| m.as_str()).ok_or_else(invalid);
    let number = |index: usize| group(index)?.parse::<u8>().map_err(|_| invalid());
    let glyph = |index: usize| group(index)?.chars().next().ok_or_else(invalid);

    let separator = glyph(2)?;
    if separator != glyph(4)? {
        return Err(invalid());
    }
    let mut fields = Fields::new(number(1)?, number(3)?, number(5)?, number(7)?);
    if u32::from(fields.frames) >= rate.round_fps() {
        return Err(invalid());
    }
    if u32::from(fields.frames) < rate.drop_frames() && fields.minutes % 10 != 0 {
        log::trace!("frame code {} skipped at {}, using {}", text, rate, rate.drop_frames());
        fields.frames = rate.drop_frames().to_u8().ok_or_else(invalid)?;
    }
    let drop_separator = if rate.is_drop_frame() { glyph(6)? } else { separator };

    Timecode::from_frames(rate, to_frame_count(rate, &fields), separator, drop_separator)
}
