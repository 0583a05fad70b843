pub(crate) mod headers;
pub(crate) mod syn_reply;
pub(crate) mod syn_stream;

pub use headers::Headers;
pub use syn_reply::SynReply;
pub use syn_stream::SynStream;

pub type SynStreamFrame = Frame<SynStream>;
pub type SynReplyFrame = Frame<SynReply>;
pub type HeadersFrame = Frame<Headers>;

use crate::spdy::{Error, HeaderBlock, Result, NEWLINE};
use std::fmt::{Display, Formatter};

pub const SYN_STREAM: u16 = 0x1;
pub const SYN_REPLY: u16 = 0x2;
pub const HEADERS: u16 = 0x8;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u16)]
pub enum FrameKind {
    SynStream = SYN_STREAM,
    SynReply = SYN_REPLY,
    Headers = HEADERS,
}

impl FrameKind {
    pub fn code(self) -> u16 {
        self as u16
    }
}

impl Display for FrameKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::SynStream => "SYN_STREAM",
            Self::SynReply => "SYN_REPLY",
            Self::Headers => "HEADERS",
        };
        write!(f, "{kind}")
    }
}

/// Fields a control frame carries beyond the shared header-frame state.
pub trait FramePayload: Sized {
    const KIND: FrameKind;
    /// Type name shown at the start of the diagnostic output.
    const NAME: &'static str;
}

/// A header-carrying control frame.
///
/// Every mutator returns `&mut Frame<P>`, so a chain started on a
/// [`SynStreamFrame`] can reach the SYN_STREAM specific setters at any point.
/// Fields are only reachable through validating setters: a live frame always
/// has a non-negative stream id and a well-formed payload.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame<P>
where
    P: FramePayload,
{
    stream_id: u32,
    last: bool,
    invalid: bool,
    headers: HeaderBlock,
    payload: P,
}

impl<P: FramePayload> Frame<P> {
    pub(crate) fn with_payload(stream_id: i32, payload: P) -> Result<Self> {
        Ok(Self {
            stream_id: checked_stream_id(stream_id)?,
            last: false,
            invalid: false,
            headers: HeaderBlock::new(),
            payload,
        })
    }
    pub fn kind(&self) -> FrameKind {
        P::KIND
    }
    pub fn stream_id(&self) -> u32 {
        self.stream_id
    }
    pub fn set_stream_id(&mut self, stream_id: i32) -> Result<&mut Self> {
        self.stream_id = checked_stream_id(stream_id)?;

        Ok(self)
    }
    pub fn is_last(&self) -> bool {
        self.last
    }
    pub fn set_last(&mut self, last: bool) -> &mut Self {
        self.last = last;
        self
    }
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }
    pub fn set_invalid(&mut self, invalid: bool) -> &mut Self {
        self.invalid = invalid;
        self
    }
    pub fn headers(&self) -> &HeaderBlock {
        &self.headers
    }
    pub fn headers_mut(&mut self) -> &mut HeaderBlock {
        &mut self.headers
    }
    pub fn add_header<N, V>(&mut self, name: N, value: V) -> &mut Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.add(name, value);
        self
    }
    pub fn payload(&self) -> &P {
        &self.payload
    }
    pub(crate) fn logged(self) -> Self {
        log::trace!("created {} frame on stream {}", P::KIND, self.stream_id);
        self
    }
    fn fmt_headers(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "--> Headers:")?;
        for (name, value) in self.headers.iter() {
            write!(f, "{NEWLINE}    {name}: {value}")?;
        }

        Ok(())
    }
    /// Layout shared by frames without extra fields: title, stream id, headers.
    fn fmt_plain(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(last: {}){NEWLINE}", P::NAME, self.last)?;
        write!(f, "--> Stream-ID = {}{NEWLINE}", self.stream_id)?;
        self.fmt_headers(f)
    }
}

fn checked_stream_id(stream_id: i32) -> Result<u32> {
    u32::try_from(stream_id).map_err(|_| {
        Error::invalid_argument(&format!("Stream-ID cannot be negative: {stream_id}"))
    })
}
