use crate::error::Result;
use byteorder::{ReadBytesExt, WriteBytesExt, BE};
use std::io::Cursor;

pub const HEADER_LEN: usize = 12;

/// The sub-fields of the second header word.
///
/// Layout, most significant bit first:
/// `qr(1) opcode(4) aa(1) tc(1) rd(1) ra(1)`, three reserved bits, `rcode(4)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Flags {
    pub qr: u16,
    pub opcode: u16,
    pub aa: u16,
    pub tc: u16,
    pub rd: u16,
    pub ra: u16,
    pub rcode: u16,
}

impl Flags {
    pub fn pack(&self) -> u16 {
        ((self.qr & 0x1) << 15)
            | ((self.opcode & 0xf) << 11)
            | ((self.aa & 0x1) << 10)
            | ((self.tc & 0x1) << 9)
            | ((self.rd & 0x1) << 8)
            | ((self.ra & 0x1) << 7)
            | (self.rcode & 0xf)
    }

    pub fn unpack(bits: u16) -> Self {
        Self {
            qr: (bits >> 15) & 0x1,
            opcode: (bits >> 11) & 0xf,
            aa: (bits >> 10) & 0x1,
            tc: (bits >> 9) & 0x1,
            rd: (bits >> 8) & 0x1,
            ra: (bits >> 7) & 0x1,
            rcode: bits & 0xf,
        }
    }
}

// 12 bytes
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qdcount: u16, // question 数量，一般为 1
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            qdcount: 1,
            ..Default::default()
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_flag(&mut self, qr: u16, opcode: u16, aa: u16, tc: u16, rd: u16, ra: u16, rcode: u16) {
        self.flags = Flags {
            qr,
            opcode,
            aa,
            tc,
            rd,
            ra,
            rcode,
        }
        .pack();
    }

    pub fn flags(&self) -> Flags {
        Flags::unpack(self.flags)
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> Result<()> {
        bytes.write_u16::<BE>(self.id)?;
        bytes.write_u16::<BE>(self.flags)?;
        bytes.write_u16::<BE>(self.qdcount)?;
        bytes.write_u16::<BE>(self.ancount)?;
        bytes.write_u16::<BE>(self.nscount)?;
        bytes.write_u16::<BE>(self.arcount)?;

        Ok(())
    }

    pub fn parse_from_reader(rdr: &mut Cursor<&[u8]>) -> Result<Self> {
        let id = rdr.read_u16::<BE>()?;
        let flags = rdr.read_u16::<BE>()?;
        let qdcount = rdr.read_u16::<BE>()?;
        let ancount = rdr.read_u16::<BE>()?;
        let nscount = rdr.read_u16::<BE>()?;
        let arcount = rdr.read_u16::<BE>()?;

        let h = Self {
            id,
            flags,
            qdcount,
            ancount,
            nscount,
            arcount,
        };

        Ok(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_flags() {
        let mut header = Header::new(0xff);
        header.set_flag(1, 0, 0, 0, 1, 1, 0);
        assert_eq!(header.flags, 0x8180);

        let flags = header.flags();
        assert_eq!(flags.qr, 1);
        assert_eq!(flags.rd, 1);
        assert_eq!(flags.ra, 1);
        assert_eq!(flags.rcode, 0);
    }

    #[test]
    fn query_flags_are_zero() {
        let mut header = Header::new(0xff);
        header.set_flag(0, 0, 0, 0, 0, 0, 0);
        assert_eq!(header.flags, 0);
    }

    #[test]
    fn unpack_reverses_pack() {
        let flags = Flags {
            qr: 1,
            opcode: 2,
            aa: 1,
            tc: 0,
            rd: 1,
            ra: 0,
            rcode: 3,
        };
        assert_eq!(Flags::unpack(flags.pack()), flags);
    }

    #[test]
    fn to_bytes_is_big_endian() {
        let mut header = Header::new(209 * 256 + 183);
        header.ancount = 1;
        header.set_flag(0, 0, 0, 0, 1, 0, 0);

        let mut bytes = vec![];
        header.to_bytes(&mut bytes).unwrap();
        assert_eq!(bytes, vec![209, 183, 1, 0, 0, 1, 0, 1, 0, 0, 0, 0]);

        let mut rdr = Cursor::new(&bytes[..]);
        assert_eq!(Header::parse_from_reader(&mut rdr).unwrap(), header);
    }

    #[test]
    fn short_header_is_malformed() {
        let bytes = [0u8, 1, 2, 3, 4];
        let mut rdr = Cursor::new(&bytes[..]);
        assert!(Header::parse_from_reader(&mut rdr).is_err());
    }
}
