use byteorder::{BigEndian, ByteOrder};

use super::Error;

/// Bounds-checked reader over a received packet
///
/// All integers are read in network byte order. A read that would run past
/// the end of the buffer fails with `Error::Truncated` and leaves the
/// position untouched.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Reader<'a> {
        Reader { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        if self.remaining() < len {
            return Err(Error::Truncated);
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        self.read_bytes(2).map(BigEndian::read_u16)
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        self.read_bytes(4).map(BigEndian::read_u32)
    }
}

/// Bounds-checked writer into a fixed-capacity output buffer
///
/// A write that does not fit fails with `Error::BufferFull` and writes
/// nothing.
#[derive(Debug)]
pub struct Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Writer<'a> {
        Writer { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Rolls the writer back to `pos`, discarding everything after it
    pub fn truncate(&mut self, pos: usize) {
        if pos < self.pos {
            self.pos = pos;
        }
    }

    fn reserve(&mut self, len: usize) -> Result<&mut [u8], Error> {
        if self.buf.len() - self.pos < len {
            return Err(Error::BufferFull);
        }
        let start = self.pos;
        self.pos += len;
        Ok(&mut self.buf[start..start + len])
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.reserve(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), Error> {
        self.reserve(1)?[0] = value;
        Ok(())
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), Error> {
        BigEndian::write_u16(self.reserve(2)?, value);
        Ok(())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), Error> {
        BigEndian::write_u32(self.reserve(4)?, value);
        Ok(())
    }

    /// Overwrites two bytes that were already written at `offset`
    pub fn patch_u16(&mut self, offset: usize, value: u16) -> Result<(), Error> {
        if offset + 2 > self.pos {
            return Err(Error::BufferFull);
        }
        BigEndian::write_u16(&mut self.buf[offset..offset + 2], value);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Error, Reader, Writer};

    #[test]
    fn read_big_endian() {
        let mut reader = Reader::new(b"\x01\x02\x03\x04\x05\x06\x07");
        assert_eq!(reader.read_u8(), Ok(1));
        assert_eq!(reader.read_u16(), Ok(0x0203));
        assert_eq!(reader.read_u32(), Ok(0x04050607));
        assert!(reader.is_empty());
    }

    #[test]
    fn short_read_keeps_position() {
        let mut reader = Reader::new(b"\x00\x01\x02");
        reader.read_u8().unwrap();
        assert_eq!(reader.read_u32(), Err(Error::Truncated));
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_u16(), Ok(0x0102));
        assert_eq!(reader.read_u8(), Err(Error::Truncated));
    }

    #[test]
    fn write_until_full() {
        let mut buf = [0u8; 5];
        let mut writer = Writer::new(&mut buf);
        writer.write_u32(0xdeadbeef).unwrap();
        assert_eq!(writer.write_u16(1), Err(Error::BufferFull));
        assert_eq!(writer.position(), 4);
        writer.write_u8(0x42).unwrap();
        assert_eq!(writer.written(), b"\xde\xad\xbe\xef\x42");
        assert_eq!(writer.write_bytes(b"x"), Err(Error::BufferFull));
    }

    #[test]
    fn patch_and_truncate() {
        let mut buf = [0u8; 8];
        let mut writer = Writer::new(&mut buf);
        writer.write_u16(0).unwrap();
        writer.write_u16(0xaaaa).unwrap();
        writer.patch_u16(0, 0x1234).unwrap();
        assert_eq!(writer.patch_u16(3, 1), Err(Error::BufferFull));
        writer.truncate(2);
        writer.write_u8(7).unwrap();
        assert_eq!(writer.written(), b"\x12\x34\x07");
    }
}
