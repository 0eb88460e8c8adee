use crate::config::Config;
use foodwise_voice::{CaptureSession, CaptureToggle, VoiceError};

/// Run one utterance through the capture session and print the structured
/// item. On an unsupported runtime the feature degrades to a notice.
pub fn parse_utterance(config: Config, utterance: String) -> anyhow::Result<()> {
    let mut session = CaptureSession::new(config.app.voice_supported);

    let ticket = match session.toggle() {
        Ok(CaptureToggle::Started(ticket)) => ticket,
        Ok(CaptureToggle::Stopped) => return Ok(()),
        Err(VoiceError::Unsupported) => {
            tracing::warn!("voice input unavailable");
            println!("Voice input is not supported in this environment");
            return Ok(());
        }
    };

    if let Some(item) = session.deliver(ticket, &utterance) {
        println!("{}", serde_json::to_string_pretty(&item)?);
    }

    Ok(())
}
