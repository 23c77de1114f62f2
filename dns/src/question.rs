use crate::error::{Error, Result};
use crate::qname::{domain_to_qname, qname_len, qname_to_domain};
use crate::record_type::{RecordClass, RecordType};
use byteorder::{ReadBytesExt, WriteBytesExt, BE};
use std::io::Cursor;

// qtype + qclass
const QUESTION_TAIL_LEN: usize = 4;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub domain: String,
    pub qtype: RecordType,
    pub qclass: RecordClass,
}

impl Question {
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            qtype: RecordType::A,
            qclass: RecordClass::In,
        }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> Result<()> {
        let qname = domain_to_qname(&self.domain)?;
        bytes.extend_from_slice(&qname);

        bytes.write_u16::<BE>(self.qtype.to_u16())?;
        bytes.write_u16::<BE>(self.qclass.to_u16())?;

        Ok(())
    }

    /// Length of the question entry starting at `start`: its encoded name
    /// followed by qtype and qclass.
    pub(crate) fn entry_len(data: &[u8], start: usize) -> Result<usize> {
        let len = qname_len(data, start)? + QUESTION_TAIL_LEN;
        if start + len > data.len() {
            return Err(Error::malformed(format!(
                "question at offset {} needs {} bytes, only {} remain",
                start,
                len,
                data.len() - start
            )));
        }

        Ok(len)
    }

    /// Parses one question entry previously delimited by `entry_len`.
    pub(crate) fn parse_entry(entry: &[u8]) -> Result<Self> {
        let name_len = qname_len(entry, 0)?;
        let domain = qname_to_domain(&entry[..name_len])?;

        let mut rdr = Cursor::new(&entry[name_len..]);
        let qtype = rdr.read_u16::<BE>()?;
        let qclass = rdr.read_u16::<BE>()?;

        let q = Self {
            domain,
            qtype: qtype.into(),
            qclass: qclass.into(),
        };

        Ok(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_bytes_appends_type_and_class() {
        let mut bytes = vec![];
        Question::new("z.cn").to_bytes(&mut bytes).unwrap();
        assert_eq!(bytes, vec![1, b'z', 2, b'c', b'n', 0, 0, 1, 0, 1]);
    }

    #[test]
    fn entry_is_name_plus_four() {
        let data = [1, b'z', 2, b'c', b'n', 0, 0, 1, 0, 1, 0xc0, 0x0c];
        let len = Question::entry_len(&data, 0).unwrap();
        assert_eq!(len, 10);

        let q = Question::parse_entry(&data[..len]).unwrap();
        assert_eq!(q, Question::new("z.cn"));
    }

    #[test]
    fn truncated_entry_is_malformed() {
        let data = [1, b'z', 2, b'c', b'n', 0, 0, 1];
        assert!(matches!(
            Question::entry_len(&data, 0),
            Err(Error::MalformedPacket(_))
        ));
    }
}
