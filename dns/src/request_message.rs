use crate::error::Result;
use crate::header::{Flags, Header};
use crate::question::Question;

pub const DEFAULT_QUERY_ID: u16 = 0xff;

/// Header knobs for an outgoing query.
///
/// The defaults reproduce the historical packet: id `0xff`, all flag bits
/// clear and an answer count of 1 even though no answer is sent. Set
/// `answer_count` to 0 for a strictly well-formed query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueryOptions {
    pub id: u16,
    pub flags: Flags,
    pub answer_count: u16,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            id: DEFAULT_QUERY_ID,
            flags: Flags::default(),
            answer_count: 1,
        }
    }
}

pub struct RequestMessage {
    header: Header,
    question: Question,
}

impl RequestMessage {
    pub fn new(domain: &str) -> Self {
        Self::with_options(domain, &QueryOptions::default())
    }

    pub fn with_options(domain: &str, options: &QueryOptions) -> Self {
        let mut header = Header::new(options.id);
        header.flags = options.flags.pack();
        header.ancount = options.answer_count;
        let question = Question::new(domain);

        Self { header, question }
    }

    pub fn to_bytes(&self, bytes: &mut Vec<u8>) -> Result<()> {
        self.header.to_bytes(bytes)?;
        self.question.to_bytes(bytes)?;

        Ok(())
    }
}
