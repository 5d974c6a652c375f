//! Control relay wire format
//!
//! Short ASCII messages over one persistent stream socket. Outbound is the
//! score report, inbound is either a start marker or a tilt reading.

/// Inbound bytes past this point are never inspected
pub const MAX_COMMAND_LEN: usize = 7;

// ============================================================================
// Inbound (relay to game)
// ============================================================================

/// Command received from the control relay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin play: any message starting with `'s'`
    Start,

    /// Tilt readings for both paddles: `"p:<p1>,<p2>"`, decimal integers.
    /// Values are raw sensor output; the simulation clamps them.
    Tilt { p1: i32, p2: i32 },
}

impl Command {
    /// Parse one inbound message.
    ///
    /// Only the first `MAX_COMMAND_LEN` bytes are inspected; the rest is
    /// truncated. Parsing is best-effort, not validation: an unrecognized
    /// message yields `None` and the previous angles simply stay in effect.
    pub fn parse(bytes: &[u8]) -> Option<Command> {
        if bytes.first() == Some(&b's') {
            return Some(Command::Start);
        }

        let len = bytes.len().min(MAX_COMMAND_LEN);
        let text = std::str::from_utf8(&bytes[..len]).ok()?;
        let rest = text.strip_prefix("p:")?;
        let (p1, p2) = rest.split_once(',')?;
        Some(Command::Tilt {
            p1: p1.parse().ok()?,
            p2: p2.parse().ok()?,
        })
    }
}

// ============================================================================
// Outbound (game to relay)
// ============================================================================

/// Score report, sent once per loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    pub p1: u8,
    pub p2: u8,
}

impl ScoreReport {
    /// Encode as `"<p1>,<p2>"`; the protocol needs no terminator
    pub fn to_bytes(&self) -> Vec<u8> {
        format!("{},{}", self.p1, self.p2).into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_marker() {
        assert_eq!(Command::parse(b"s"), Some(Command::Start));
        // Only the marker byte matters
        assert_eq!(Command::parse(b"start now"), Some(Command::Start));
    }

    #[test]
    fn test_parse_tilt_reading() {
        assert_eq!(Command::parse(b"p:45,10"), Some(Command::Tilt { p1: 45, p2: 10 }));
        assert_eq!(Command::parse(b"p:0,90"), Some(Command::Tilt { p1: 0, p2: 90 }));
    }

    #[test]
    fn test_parse_truncates_to_seven_bytes() {
        // Trailing bytes past the fixed width are ignored
        assert_eq!(
            Command::parse(b"p:45,1099999"),
            Some(Command::Tilt { p1: 45, p2: 10 })
        );
    }

    #[test]
    fn test_parse_garbage_yields_none() {
        assert_eq!(Command::parse(b""), None);
        assert_eq!(Command::parse(b"q:45,10"), None);
        assert_eq!(Command::parse(b"p:45;10"), None);
        assert_eq!(Command::parse(b"p:ab,cd"), None);
    }

    #[test]
    fn test_score_report_encoding() {
        let report = ScoreReport { p1: 3, p2: 7 };
        assert_eq!(report.to_bytes(), b"3,7".to_vec());
        let report = ScoreReport { p1: 0, p2: 0 };
        assert_eq!(report.to_bytes(), b"0,0".to_vec());
    }
}
