//! Exit code constants for the hookstrip CLI.
//!
//! - 0: Success (including a permissive zero-match run)
//! - 1: User error (bad arguments, unreadable file, invalid pattern or rules file)
//! - 2: No-match failure (a require-match rule removed zero lines)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable/unwritable file, invalid pattern,
/// or invalid rules file.
pub const USER_ERROR: i32 = 1;

/// No-match failure: the scan completed without removing any line while the
/// effective rule required at least one match.
pub const NO_MATCH: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, NO_MATCH];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(NO_MATCH, 2);
    }
}
