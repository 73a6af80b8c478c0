use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimecodeError>;

///All failures are local validation failures. A failed operation leaves its inputs untouched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimecodeError {
    ///The fraction numerator/denominator matches no supported frame rate
    #[error("unsupported frame rate: {numerator}/{denominator}")]
    UnsupportedFrameRate { numerator: i32, denominator: i32 },
    ///Text does not follow HH:MM:SS:FF or uses inconsistent separators
    #[error("invalid timecode: {0:?}")]
    InvalidTimecode(String),
    ///The frame count does not fit into 24 hours at the given rate
    #[error("too many frames")]
    TooManyFrames,
    ///Subtraction would result in a negative frame count
    #[error("underflow frames")]
    UnderflowFrames,
    ///Arithmetic between timecodes of different frame rates
    #[error("mismatch frame rate: {left} vs {right}")]
    MismatchFrameRate { left: String, right: String },
    ///Operation on a timecode that does not exist
    #[error("nil timecode")]
    NilTimecode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = TimecodeError::UnsupportedFrameRate {
            numerator: 1,
            denominator: 0,
        };
        assert_eq!(err.to_string(), "unsupported frame rate: 1/0");
        let err = TimecodeError::InvalidTimecode("0:01:00:00".to_string());
        assert_eq!(err.to_string(), "invalid timecode: \"0:01:00:00\"");
        assert_eq!(TimecodeError::TooManyFrames.to_string(), "too many frames");
        assert_eq!(TimecodeError::UnderflowFrames.to_string(), "underflow frames");
        let err = TimecodeError::MismatchFrameRate {
            left: "30".to_string(),
            right: "29.97DF".to_string(),
        };
        assert_eq!(err.to_string(), "mismatch frame rate: 30 vs 29.97DF");
        assert_eq!(TimecodeError::NilTimecode.to_string(), "nil timecode");
    }
}
