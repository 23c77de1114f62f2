use crate::error::{Error, Result};
use crate::qname::qname_to_domain;
use crate::record_type::{RecordClass, RecordType};
use byteorder::{ReadBytesExt, BE};
use std::io::{Cursor, Read};
use std::net::Ipv4Addr;

// name(2) + type(2) + class(2) + ttl(4) + rdlength(2)
pub const RECORD_PREFIX_LEN: usize = 12;
const RDLENGTH_OFFSET: usize = 10;

/// An answer record.
///
/// The owner name is taken to be a fixed two byte field, which is what a
/// server sends when it points back at the question name (`[192, 12]`). A
/// record carrying a full name in that position will be misread.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceRecord {
    pub name: [u8; 2],
    pub rtype: RecordType,
    pub rclass: RecordClass,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    /// Length of the record starting at `start`, found from its rdlength.
    pub(crate) fn entry_len(data: &[u8], start: usize) -> Result<usize> {
        let rdlength_at = start + RDLENGTH_OFFSET;
        let rdlength = match data.get(rdlength_at..rdlength_at + 2) {
            Some(b) => u16::from_be_bytes([b[0], b[1]]) as usize,
            None => {
                return Err(Error::malformed(format!(
                    "record at offset {} is cut off before its rdlength",
                    start
                )))
            }
        };

        let len = RECORD_PREFIX_LEN + rdlength;
        if start + len > data.len() {
            return Err(Error::malformed(format!(
                "record at offset {} declares {} bytes of rdata, only {} remain",
                start,
                rdlength,
                data.len() - start - RECORD_PREFIX_LEN
            )));
        }

        Ok(len)
    }

    /// Parses one record previously delimited by `entry_len`.
    pub(crate) fn parse_entry(entry: &[u8]) -> Result<Self> {
        let mut rdr = Cursor::new(entry);

        let mut name = [0u8; 2];
        rdr.read_exact(&mut name)?;
        let rtype = rdr.read_u16::<BE>()?;
        let rclass = rdr.read_u16::<BE>()?;
        let ttl = rdr.read_u32::<BE>()?;
        let rdlength = rdr.read_u16::<BE>()?;

        let mut rdata = vec![0u8; rdlength as usize];
        rdr.read_exact(&mut rdata)?;

        let record = Self {
            name,
            rtype: rtype.into(),
            rclass: rclass.into(),
            ttl,
            rdata,
        };

        Ok(record)
    }

    pub fn address(&self) -> Option<Ipv4Addr> {
        match (self.rtype, self.rdata.get(0..4)) {
            (RecordType::A, Some(b)) => Some(Ipv4Addr::new(b[0], b[1], b[2], b[3])),
            _ => None,
        }
    }

    /// Display form: dotted quad for A, the target name for CNAME and an
    /// empty string for any other type.
    pub fn describe(&self) -> Result<String> {
        match self.rtype {
            RecordType::A => self
                .address()
                .map(|addr| addr.to_string())
                .ok_or_else(|| {
                    Error::malformed(format!(
                        "A record carries {} bytes of rdata, expected 4",
                        self.rdata.len()
                    ))
                }),
            RecordType::Cname => qname_to_domain(&self.rdata),
            RecordType::Other(n) => {
                tracing::debug!("skipping answer of unsupported type {}", n);
                Ok(String::new())
            }
        }
    }
}
