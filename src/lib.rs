pub mod spdy;

pub type SynStreamFrame = spdy::SynStreamFrame;
pub type SynReplyFrame = spdy::SynReplyFrame;
pub type HeadersFrame = spdy::HeadersFrame;
