//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted PackFile Manager (RPFM) project,
// which can be found here: https://github.com/Frodo45127/rpfm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rpfm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module with the [`ReadBytes`] trait, to read bytes to known types.

use byteorder::{LittleEndian, ReadBytesExt};
use encoding_rs::UTF_16LE;

use std::io::{Read, Seek, SeekFrom};

use crate::error::{Result, StarchartError};

//---------------------------------------------------------------------------//
//                            Trait Definition
//---------------------------------------------------------------------------//

/// This trait allows us to easily read all kinds of data from a source that implements [`Read`] + [`Seek`].
pub trait ReadBytes: Read + Seek {

    /// Returns the length of the data we're reading.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use starchart::binary::reader::ReadBytes;
    ///
    /// let mut cursor = Cursor::new(vec![1, 2, 3, 4]);
    /// assert_eq!(cursor.len().unwrap(), 4);
    /// ```
    fn len(&mut self) -> Result<u64> {
        let old_pos = self.stream_position()?;
        let len = self.seek(SeekFrom::End(0))?;
        if old_pos != len {
            self.seek(SeekFrom::Start(old_pos))?;
        }
        Ok(len)
    }

    /// Returns whether the data is empty.
    fn is_empty(&mut self) -> Result<bool> {
        self.len().map(|len| len == 0)
    }

    /// Reads `size` bytes as a [`Vec<u8>`]. If `rewind` is true, the cursor is reset to its
    /// original position once the data is returned.
    fn read_slice(&mut self, size: usize, rewind: bool) -> Result<Vec<u8>> {
        let mut data = vec![0; size];
        if size == 0 {
            return Ok(data);
        }

        self.read_exact(&mut data)?;

        if rewind {
            self.seek(SeekFrom::Current(-(size as i64)))?;
        }

        Ok(data)
    }

    /// Reads a bool value: 0 is false, 1 is true, anything else is an error.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use starchart::binary::reader::ReadBytes;
    ///
    /// let mut cursor = Cursor::new(vec![0u8, 1, 2]);
    /// assert_eq!(cursor.read_bool().unwrap(), false);
    /// assert_eq!(cursor.read_bool().unwrap(), true);
    /// assert!(cursor.read_bool().is_err());
    /// ```
    fn read_bool(&mut self) -> Result<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(StarchartError::DecodingBoolError(value)),
        }
    }

    fn read_u8(&mut self) -> Result<u8> {
        ReadBytesExt::read_u8(self).map_err(From::from)
    }

    fn read_u16(&mut self) -> Result<u16> {
        ReadBytesExt::read_u16::<LittleEndian>(self).map_err(From::from)
    }

    fn read_u32(&mut self) -> Result<u32> {
        ReadBytesExt::read_u32::<LittleEndian>(self).map_err(From::from)
    }

    fn read_u64(&mut self) -> Result<u64> {
        ReadBytesExt::read_u64::<LittleEndian>(self).map_err(From::from)
    }

    fn read_i8(&mut self) -> Result<i8> {
        ReadBytesExt::read_i8(self).map_err(From::from)
    }

    fn read_i16(&mut self) -> Result<i16> {
        ReadBytesExt::read_i16::<LittleEndian>(self).map_err(From::from)
    }

    fn read_i32(&mut self) -> Result<i32> {
        ReadBytesExt::read_i32::<LittleEndian>(self).map_err(From::from)
    }

    /// Reads an IEEE-754 single-precision float.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use starchart::binary::reader::ReadBytes;
    ///
    /// let mut cursor = Cursor::new(vec![0x00, 0x00, 0x80, 0x3F]);
    /// assert_eq!(cursor.read_f32().unwrap(), 1.0);
    /// ```
    fn read_f32(&mut self) -> Result<f32> {
        ReadBytesExt::read_f32::<LittleEndian>(self).map_err(From::from)
    }

    /// Reads a UTF-8 string of exactly `size` bytes, with no size prefix and no padding.
    fn read_string_u8(&mut self, size: usize) -> Result<String> {
        let mut data = vec![0; size];
        self.read_exact(&mut data)?;
        String::from_utf8(data).map_err(From::from)
    }

    /// Reads a UTF-8 string of `size` bytes, truncating at the first 00 byte (the rest is padding).
    fn read_string_u8_0padded(&mut self, size: usize) -> Result<String> {
        let mut data = vec![0; size];
        self.read_exact(&mut data)?;

        let size_no_zeros = data.iter().position(|x| *x == 0).unwrap_or(size);
        String::from_utf8(data[..size_no_zeros].to_vec()).map_err(From::from)
    }

    /// Reads a UTF-8 string that runs until a 00 byte (exclusive), consuming the terminator.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use starchart::binary::reader::ReadBytes;
    ///
    /// let mut cursor = Cursor::new(vec![b'l', b'i', b'0', b'1', 0, b'x']);
    /// assert_eq!(cursor.read_string_u8_0terminated().unwrap(), "li01");
    /// assert_eq!(cursor.read_u8().unwrap(), b'x');
    /// ```
    fn read_string_u8_0terminated(&mut self) -> Result<String> {
        let mut buf = [0; 512];
        let mut data = vec![];
        let mut curr_pos = 0u64;
        let mut end_pos = 0u64;
        let mut found = false;

        loop {
            match self.read(&mut buf) {
                Ok(0) => break,
                Ok(read_bytes) => {
                    if let Some(pos) = memchr::memchr(0, &buf[..read_bytes]) {
                        end_pos = curr_pos + read_bytes as u64;
                        curr_pos += pos as u64;
                        data.extend_from_slice(&buf[..pos]);
                        found = true;
                        break;
                    } else {
                        curr_pos += read_bytes as u64;
                        data.extend_from_slice(&buf[..read_bytes]);
                    }
                }
                Err(error) => return Err(error)?,
            }
        }

        if !found {
            return Err(StarchartError::DecodingString0TeminatedNo0Error);
        }

        let new_pos = (end_pos - curr_pos - 1) as i64;
        self.seek(SeekFrom::Current(-new_pos))?;

        Ok(String::from_utf8_lossy(&data).to_string())
    }

    /// Reads a little-endian UTF-16 string of `size` bytes (not characters).
    fn read_string_u16(&mut self, size: usize) -> Result<String> {
        let mut data = vec![0; size];
        self.read_exact(&mut data)?;

        Ok(UTF_16LE.decode(&data).0.to_string())
    }

    /// Reads a UTF-16 string prefixed by a 16-bit length, given in UTF-16 code units (not bytes).
    ///
    /// This is the layout used by the string-table bundles in the resource container: each of
    /// the 16 slots in a bundle is one of these.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use starchart::binary::reader::ReadBytes;
    ///
    /// let mut cursor = Cursor::new(vec![4, 0, b'W', 0, b'a', 0, b'h', 0, b'a', 0]);
    /// assert_eq!(cursor.read_sized_string_u16().unwrap(), "Waha");
    /// ```
    fn read_sized_string_u16(&mut self) -> Result<String> {
        let size = self.read_u16()
            .map_err(|_| StarchartError::DecodingStringSizeError("UTF-16 String".to_owned()))?;
        self.read_string_u16(size as usize * 2)
    }

    /// Reads a UTF-16 string that runs until a 00 00 code unit (exclusive).
    fn read_string_u16_0terminated(&mut self) -> Result<String> {
        let mut code_units = vec![];
        loop {
            let unit = self.read_u16()?;
            if unit == 0 {
                break;
            }
            code_units.push(unit);
        }

        String::from_utf16(&code_units).map_err(From::from)
    }
}

impl<R: Read + Seek> ReadBytes for R {}
