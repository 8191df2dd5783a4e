//! In-memory streams that behave like a solution on the other end of a pipe.
//!
//! [`Channel`] records what the judge writes and which of it was flushed.
//! [`ScriptedSolution`] hands out a fixed script one line at a time and
//! refuses to answer while judge output is still sitting unflushed, which is
//! the point where a real solution would block forever.

use std::cell::RefCell;
use std::io::{self, BufRead, Cursor, Read, Write};
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct ChannelState {
    /// Bytes written but not yet flushed.
    pub pending: Vec<u8>,
    /// Everything the solution could observe so far.
    pub visible: Vec<u8>,
    pub flushes: usize,
}

impl ChannelState {
    pub fn visible_lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.visible)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Judge-side output handle; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct Channel(pub Rc<RefCell<ChannelState>>);

impl Write for Channel {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self.0.borrow_mut();
        let pending = std::mem::take(&mut state.pending);
        state.visible.extend_from_slice(&pending);
        state.flushes += 1;
        Ok(())
    }
}

/// Solution-side input that fails once its script runs out.
pub struct ScriptedSolution {
    script: Cursor<Vec<u8>>,
    channel: Channel,
}

impl ScriptedSolution {
    pub fn new(script: &str, channel: Channel) -> Self {
        Self {
            script: Cursor::new(script.as_bytes().to_vec()),
            channel,
        }
    }
}

impl Read for ScriptedSolution {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = {
            let available = self.fill_buf()?;
            let n = available.len().min(buf.len());
            buf[..n].copy_from_slice(&available[..n]);
            n
        };
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for ScriptedSolution {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        let unflushed = self.channel.0.borrow().pending.len();
        assert_eq!(unflushed, 0, "judge waits for input with unflushed output");
        if self.script.position() as usize >= self.script.get_ref().len() {
            return Err(io::Error::new(io::ErrorKind::Other, "script exhausted"));
        }
        self.script.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.script.consume(amt);
    }
}
