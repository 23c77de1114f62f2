//! Encoding of DNS query datagrams and decoding of the question and answer
//! sections of a reply.

mod error;
mod header;
mod qname;
mod question;
mod record_type;
mod request_message;
mod resource_record;
mod response_message;

pub use error::{Error, Result};
pub use header::{Flags, Header, HEADER_LEN};
pub use qname::{domain_to_qname, qname_to_domain, MAX_LABEL_LEN};
pub use question::Question;
pub use record_type::{RecordClass, RecordType};
pub use request_message::{QueryOptions, RequestMessage, DEFAULT_QUERY_ID};
pub use resource_record::ResourceRecord;
pub use response_message::ResponseMessage;

pub fn encode_request(domain: &str) -> Result<Vec<u8>> {
    encode_request_with(domain, &QueryOptions::default())
}

pub fn encode_request_with(domain: &str, options: &QueryOptions) -> Result<Vec<u8>> {
    let request_msg = RequestMessage::with_options(domain, options);
    let mut request_bytes: Vec<u8> = vec![];
    request_msg.to_bytes(&mut request_bytes)?;

    Ok(request_bytes)
}

pub fn decode_response(response_bytes: &[u8]) -> Result<ResponseMessage> {
    ResponseMessage::parse_response(response_bytes)
}

/// Decodes a reply into its query names and answer display strings.
pub fn describe_response(response_bytes: &[u8]) -> Result<(Vec<String>, Vec<String>)> {
    let msg = decode_response(response_bytes)?;
    let answers = msg.answers()?;

    Ok((msg.queries(), answers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_layout() {
        let bytes = encode_request("example.com").unwrap();
        assert_eq!(bytes.len(), 29);
        assert_eq!(&bytes[..4], &[0, 0xff, 0, 0]);
        assert_eq!(&bytes[25..], &[0, 1, 0, 1]);
    }

    #[test]
    fn describe_reply_to_own_query() {
        // a reply is the query echoed back with answers appended
        let mut bytes = encode_request_with(
            "z.cn",
            &QueryOptions {
                answer_count: 0,
                ..Default::default()
            },
        )
        .unwrap();
        bytes[2] = 0x81;
        bytes[3] = 0x80;
        bytes[7] = 1;
        bytes.extend_from_slice(&[192, 12, 0, 1, 0, 1, 0, 0, 0, 60, 0, 4, 54, 222, 60, 252]);

        let (queries, answers) = describe_response(&bytes).unwrap();
        assert_eq!(queries, vec!["z.cn"]);
        assert_eq!(answers, vec!["54.222.60.252"]);
    }
}
