use crate::error::{VoiceError, VoiceResult};
use crate::parser::{parse, ParsedItem};

/// Ticket handed out when a capture starts. A transcript is only accepted
/// when it carries the ticket of the still-active capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureToggle {
    Started(CaptureTicket),
    Stopped,
}

/// Single-capture session around the external speech-to-text provider.
/// The only control is a toggle: starting while a capture is active stops
/// it instead, so captures are never queued or run concurrently. A result
/// arriving after its capture was stopped is discarded silently.
#[derive(Debug)]
pub struct CaptureSession {
    supported: bool,
    listening: bool,
    generation: u64,
}

impl CaptureSession {
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            listening: false,
            generation: 0,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Start when idle, stop when listening. On an unsupported runtime the
    /// feature stays disabled and every toggle reports `Unsupported`.
    pub fn toggle(&mut self) -> VoiceResult<CaptureToggle> {
        if !self.supported {
            return Err(VoiceError::Unsupported);
        }
        if self.listening {
            self.listening = false;
            tracing::debug!("voice capture stopped");
            return Ok(CaptureToggle::Stopped);
        }
        self.generation += 1;
        self.listening = true;
        tracing::debug!(generation = self.generation, "voice capture started");
        Ok(CaptureToggle::Started(CaptureTicket(self.generation)))
    }

    /// Deliver a finished transcript. Parses and ends the capture when the
    /// ticket belongs to the active capture; stale or late transcripts
    /// return `None` and change nothing.
    pub fn deliver(&mut self, ticket: CaptureTicket, transcript: &str) -> Option<ParsedItem> {
        if !self.listening || ticket.0 != self.generation {
            tracing::debug!("discarded late voice transcript");
            return None;
        }
        self.listening = false;
        Some(parse(transcript))
    }
}
