use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RecordType {
    A,
    Cname,
    Other(u16),
}

impl RecordType {
    pub fn to_u16(self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::Cname => 5,
            RecordType::Other(n) => n,
        }
    }
}

impl From<u16> for RecordType {
    fn from(n: u16) -> Self {
        match n {
            1 => RecordType::A,
            5 => RecordType::Cname,
            n => RecordType::Other(n),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
            RecordType::Cname => write!(f, "CNAME"),
            RecordType::Other(n) => write!(f, "TYPE{}", n),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RecordClass {
    In,
    Other(u16),
}

impl RecordClass {
    pub fn to_u16(self) -> u16 {
        match self {
            RecordClass::In => 1,
            RecordClass::Other(n) => n,
        }
    }
}

impl From<u16> for RecordClass {
    fn from(n: u16) -> Self {
        match n {
            1 => RecordClass::In,
            n => RecordClass::Other(n),
        }
    }
}
