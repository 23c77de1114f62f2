use crate::error::{Error, Result};
use crate::header::{Header, HEADER_LEN};
use crate::question::Question;
use crate::resource_record::ResourceRecord;
use std::io::Cursor;
use std::net::Ipv4Addr;

#[derive(Debug)]
pub struct ResponseMessage {
    header: Header,
    questions: Vec<Question>,
    answer_records: Vec<ResourceRecord>,
}

impl ResponseMessage {
    // 解析 DNS 的响应
    //
    // Only the question and answer sections are read. Each entry is first
    // delimited from its own length fields, then parsed from that slice.
    pub fn parse_response(response: &[u8]) -> Result<Self> {
        if response.len() < HEADER_LEN {
            return Err(Error::malformed(format!(
                "response is {} bytes, shorter than the {} byte header",
                response.len(),
                HEADER_LEN
            )));
        }

        let mut reader = Cursor::new(response);
        let header = Header::parse_from_reader(&mut reader)?;

        let mut index = HEADER_LEN;

        let mut question_entries = Vec::with_capacity(header.qdcount as usize);
        for _ in 0..header.qdcount {
            let len = Question::entry_len(response, index)?;
            question_entries.push(&response[index..index + len]);
            index += len;
        }

        let mut answer_entries = Vec::with_capacity(header.ancount as usize);
        for _ in 0..header.ancount {
            let len = ResourceRecord::entry_len(response, index)?;
            answer_entries.push(&response[index..index + len]);
            index += len;
        }

        let questions = question_entries
            .into_iter()
            .map(Question::parse_entry)
            .collect::<Result<Vec<_>>>()?;
        let answer_records = answer_entries
            .into_iter()
            .map(ResourceRecord::parse_entry)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "decoded response id {}, {} questions, {} answers",
            header.id,
            questions.len(),
            answer_records.len()
        );

        let msg = Self {
            header,
            questions,
            answer_records,
        };

        Ok(msg)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answer_records(&self) -> &[ResourceRecord] {
        &self.answer_records
    }

    /// The queried names, in packet order.
    pub fn queries(&self) -> Vec<String> {
        self.questions.iter().map(|q| q.domain.clone()).collect()
    }

    /// One display string per answer, in packet order.
    pub fn answers(&self) -> Result<Vec<String>> {
        self.answer_records.iter().map(|r| r.describe()).collect()
    }

    pub fn addresses(&self) -> Vec<Ipv4Addr> {
        self.answer_records
            .iter()
            .filter_map(|r| r.address())
            .collect()
    }
}
