use std::io::{self, Write};

/// Writer that mirrors everything to an optional second writer.
#[derive(Debug)]
pub struct Tee<A: Write, B: Write> {
    primary: A,
    copy: Option<B>,
}

impl<A: Write, B: Write> Tee<A, B> {
    pub fn new(primary: A, copy: Option<B>) -> Self {
        Self { primary, copy }
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.primary.write_all(buf)?;
        if let Some(copy) = self.copy.as_mut() {
            copy.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        if let Some(copy) = self.copy.as_mut() {
            copy.flush()?;
        }
        Ok(())
    }
}
