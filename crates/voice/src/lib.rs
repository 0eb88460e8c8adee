pub mod capture;
pub mod categorize;
pub mod error;
pub mod parser;

// Re-export commonly used types
pub use capture::{CaptureSession, CaptureTicket, CaptureToggle};
pub use categorize::infer_category;
pub use error::{VoiceError, VoiceResult};
pub use parser::{parse, ParsedItem};
