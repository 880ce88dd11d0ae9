use std::io::{self, Read};

/// Width in bytes of one score field.
pub const FIELD_SIZE: usize = 8;

/// Iterates over a reader as a sequence of little-endian `u64` fields.
pub struct BlockIterator<R: Read> {
    reader: R,
    /// Bytes consumed so far, always a multiple of `FIELD_SIZE` between fields.
    offset: u64,
    done: bool,
}

impl<R: Read> BlockIterator<R> {
    pub fn new(reader: R) -> Self {
        BlockIterator {
            reader,
            offset: 0,
            done: false,
        }
    }

    /// Byte offset of the next field to be read.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Fills `buffer` as far as the reader allows and returns the byte count.
    fn fill(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buffer.len() {
            match self.reader.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for BlockIterator<R> {
    // Each iteration returns a Result containing one decoded field
    type Item = io::Result<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut buffer = [0u8; FIELD_SIZE];
        match self.fill(&mut buffer) {
            Ok(0) => {
                self.done = true;
                None // End of input on a field boundary
            }
            Ok(n) if n < FIELD_SIZE => {
                self.done = true;
                Some(Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!(
                        "field at byte {} has {} of {} bytes",
                        self.offset, n, FIELD_SIZE
                    ),
                )))
            }
            Ok(_) => {
                self.offset += FIELD_SIZE as u64;
                Some(Ok(u64::from_le_bytes(buffer)))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
