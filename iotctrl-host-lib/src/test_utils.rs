use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::serial::PortOpener;

#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(pub Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fails the first `failures` opens (all of them when `None`), then hands out
/// ports that all write into `written`.
pub(crate) struct ScriptedOpener {
    failures: Option<u32>,
    pub attempts: u32,
    pub written: SharedBuffer,
}

impl ScriptedOpener {
    pub(crate) fn failing(failures: u32) -> Self {
        Self {
            failures: Some(failures),
            attempts: 0,
            written: SharedBuffer::default(),
        }
    }

    pub(crate) fn always_failing() -> Self {
        Self {
            failures: None,
            attempts: 0,
            written: SharedBuffer::default(),
        }
    }

    pub(crate) fn written_bytes(&self) -> Vec<u8> {
        self.written.0.borrow().clone()
    }
}

impl PortOpener for ScriptedOpener {
    type Port = SharedBuffer;
    type Error = io::Error;

    fn open_port(&mut self) -> Result<Self::Port, Self::Error> {
        self.attempts += 1;
        match self.failures {
            Some(failures) if self.attempts > failures => Ok(self.written.clone()),
            _ => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("could not open port, attempt {}", self.attempts),
            )),
        }
    }
}
