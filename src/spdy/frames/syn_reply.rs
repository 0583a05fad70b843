use super::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SynReply;

impl FramePayload for SynReply {
    const KIND: FrameKind = FrameKind::SynReply;
    const NAME: &'static str = "SynReplyFrame";
}

impl Frame<SynReply> {
    pub fn new(stream_id: i32) -> Result<Self> {
        Ok(Self::with_payload(stream_id, SynReply)?.logged())
    }
}

impl Display for Frame<SynReply> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_plain(f)
    }
}
