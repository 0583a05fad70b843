use super::*;

const MAX_PRIORITY: i8 = 7;

/// SYN_STREAM fields: the stream this one is associated to (0 for none), its
/// priority (0 is highest, 7 lowest) and whether the stream is unidirectional.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SynStream {
    associated_to_stream_id: u32,
    priority: u8,
    unidirectional: bool,
}

impl FramePayload for SynStream {
    const KIND: FrameKind = FrameKind::SynStream;
    const NAME: &'static str = "SynStreamFrame";
}

impl Frame<SynStream> {
    pub fn new(stream_id: i32, associated_to_stream_id: i32, priority: i8) -> Result<Self> {
        let mut frame = Self::with_payload(stream_id, SynStream::default())?;
        frame
            .set_associated_to_stream_id(associated_to_stream_id)?
            .set_priority(priority)?;

        Ok(frame.logged())
    }
    pub fn associated_to_stream_id(&self) -> u32 {
        self.payload.associated_to_stream_id
    }
    pub fn set_associated_to_stream_id(
        &mut self,
        associated_to_stream_id: i32,
    ) -> Result<&mut Self> {
        self.payload.associated_to_stream_id =
            checked_associated_to_stream_id(associated_to_stream_id)?;

        Ok(self)
    }
    pub fn priority(&self) -> u8 {
        self.payload.priority
    }
    pub fn set_priority(&mut self, priority: i8) -> Result<&mut Self> {
        self.payload.priority = checked_priority(priority)?;

        Ok(self)
    }
    pub fn is_unidirectional(&self) -> bool {
        self.payload.unidirectional
    }
    pub fn set_unidirectional(&mut self, unidirectional: bool) -> &mut Self {
        self.payload.unidirectional = unidirectional;
        self
    }
}

impl Display for Frame<SynStream> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(last: {}; unidirectional: {}){NEWLINE}",
            SynStream::NAME,
            self.last,
            self.payload.unidirectional
        )?;
        write!(f, "--> Stream-ID = {}{NEWLINE}", self.stream_id)?;
        // 0 means "not associated" and is left out.
        if self.payload.associated_to_stream_id != 0 {
            write!(
                f,
                "--> Associated-To-Stream-ID = {}{NEWLINE}",
                self.payload.associated_to_stream_id
            )?;
        }
        write!(f, "--> Priority = {}{NEWLINE}", self.payload.priority)?;
        self.fmt_headers(f)
    }
}

fn checked_associated_to_stream_id(associated_to_stream_id: i32) -> Result<u32> {
    u32::try_from(associated_to_stream_id).map_err(|_| {
        Error::invalid_argument(&format!(
            "Associated-To-Stream-ID cannot be negative: {associated_to_stream_id}"
        ))
    })
}

fn checked_priority(priority: i8) -> Result<u8> {
    match priority {
        0..=MAX_PRIORITY => Ok(priority as u8),
        _ => Err(Error::invalid_argument(&format!(
            "Priority must be between 0 and 7 inclusive: {priority}"
        ))),
    }
}
