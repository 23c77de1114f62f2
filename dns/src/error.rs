use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("label '{label}' is {len} bytes, longer than the 255 byte length prefix allows")]
    Encoding { label: String, len: usize },

    #[error("malformed packet: {0}")]
    MalformedPacket(String),
}

impl Error {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedPacket(msg.into())
    }
}

// Reads through a byteorder cursor only fail when the buffer runs out.
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::MalformedPacket(e.to_string())
    }
}
