use crate::error::Result;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Buffered writer that tracks how many bytes and lines went through it.
pub struct BufWriterWithPos<W: Write> {
    pub writer: BufWriter<W>,
    pub pos: u64,
    pub lines: u64,
}

impl<W: Write> BufWriterWithPos<W> {
    pub fn new(inner: W) -> Self {
        BufWriterWithPos {
            writer: BufWriter::new(inner),
            pos: 0,
            lines: 0,
        }
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write_all(line.as_bytes())?;
        self.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }
}

impl<W: Write> Write for BufWriterWithPos<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let len = self.writer.write(buf)?;
        self.pos += len as u64;
        Ok(len)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Opens `path` for writing, creating it or truncating what was there.
pub fn create_truncated(path: &Path) -> Result<BufWriterWithPos<File>> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    Ok(BufWriterWithPos::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_bytes_and_lines() {
        let mut writer = BufWriterWithPos::new(Vec::new());
        writer.write_line("ab").unwrap();
        writer.write_line("").unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.pos, 4);
        assert_eq!(writer.lines, 2);
        assert_eq!(writer.writer.get_ref().as_slice(), b"ab\n\n");
    }
}
