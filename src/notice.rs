/// How long a confirmation stays up before it clears itself.
pub const NOTICE_TIMEOUT_MS: u32 = 3_000;

/// A short-lived confirmation, tagged with the sequence number of the timer
/// that will clear it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub text: String,
}

/// Whether the timer armed for notice `fired` may clear what is on screen.
/// A notice shown after that timer was armed has a newer `seq` and survives.
pub fn should_clear(current: Option<u64>, fired: u64) -> bool {
    current == Some(fired)
}
