//! Conversion between dotted domain names and the wire form used in the
//! question and in name-typed rdata: a run of `(length, label bytes)` pairs
//! closed by a zero length byte.
//!
//! Compression pointers are neither written nor followed. A length byte with
//! the top two bits set is read as an ordinary (large) label length.

use crate::error::{Error, Result};

pub const MAX_LABEL_LEN: usize = 255;

// 把域名转换为 C 风格的字符串
pub fn domain_to_qname(domain: &str) -> Result<Vec<u8>> {
    let mut qname: Vec<u8> = Vec::with_capacity(domain.len() + 2);

    for label in domain.split('.').filter(|l| !l.is_empty()) {
        if label.len() > MAX_LABEL_LEN {
            return Err(Error::Encoding {
                label: label.to_string(),
                len: label.len(),
            });
        }

        qname.push(label.len() as u8);
        qname.extend_from_slice(label.as_bytes());
    }

    qname.push(0);

    Ok(qname)
}

// qname 转换为可读的字符串
pub fn qname_to_domain(qname: &[u8]) -> Result<String> {
    let mut labels = Vec::new();

    let mut index = 0;
    while index < qname.len() {
        let label_len: usize = qname[index] as usize;

        if label_len == 0 {
            break;
        }

        let label_begin_index = index + 1;
        let next_index = label_begin_index + label_len;

        let label_bytes = qname.get(label_begin_index..next_index).ok_or_else(|| {
            Error::malformed(format!(
                "label at offset {} claims {} bytes, only {} remain",
                index,
                label_len,
                qname.len() - label_begin_index
            ))
        })?;

        labels.push(String::from_utf8_lossy(label_bytes));

        index = next_index
    }

    Ok(labels.join(".").trim_matches('.').to_string())
}

/// Length of the encoded name starting at `start`, terminating zero included.
pub(crate) fn qname_len(data: &[u8], start: usize) -> Result<usize> {
    let mut index = start;
    loop {
        let label_len = *data
            .get(index)
            .ok_or_else(|| Error::malformed(format!("name at offset {} is not terminated", start)))?
            as usize;

        if label_len == 0 {
            return Ok(index + 1 - start);
        }

        index += 1 + label_len;
    }
}
