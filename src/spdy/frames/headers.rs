use super::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Headers;

impl FramePayload for Headers {
    const KIND: FrameKind = FrameKind::Headers;
    const NAME: &'static str = "HeadersFrame";
}

impl Frame<Headers> {
    pub fn new(stream_id: i32) -> Result<Self> {
        Ok(Self::with_payload(stream_id, Headers)?.logged())
    }
}

impl Display for Frame<Headers> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_plain(f)
    }
}
