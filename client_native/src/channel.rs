//! Control channel to the phone relay

use std::io::{self, Read, Write};
use std::os::unix::net::UnixStream;
use std::path::Path;

use proto::{Command, ScoreReport};

/// One persistent stream to the control relay.
///
/// Every loop iteration performs exactly one send (the current scores)
/// followed by exactly one blocking receive (the next command). Any I/O
/// failure, including the peer closing the connection, is fatal for the
/// process; there is no retry or reconnect.
pub struct ControlChannel {
    stream: UnixStream,
}

impl ControlChannel {
    pub fn connect<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let stream = UnixStream::connect(path)?;
        Ok(Self { stream })
    }

    /// Report scores, then block until the relay answers with a command.
    ///
    /// `Ok(None)` means the relay sent something unparseable, which is not
    /// an error: the previous paddle angles stay in effect.
    pub fn exchange(&mut self, report: &ScoreReport) -> io::Result<Option<Command>> {
        self.stream.write_all(&report.to_bytes())?;

        let mut buf = [0u8; 16];
        let n = self.stream.read(&mut buf)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "control relay closed the connection",
            ));
        }

        Ok(Command::parse(&buf[..n]))
    }
}
