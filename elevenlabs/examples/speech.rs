//! Text-to-speech, voice conversion and isolation example.
//!
//! Run with:
//! ```bash
//! export ELEVENLABS_API_KEY="your-api-key"
//! cargo run -p giztoy-elevenlabs --example speech
//! ```

use giztoy_elevenlabs::{TextToSpeechOptions, VoiceSettings, isolation, sts, tts};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Text to speech with a friendly voice name
    println!("Example 1: Text to speech");
    println!("---");

    let speech = tts("multilingual_v2", "george")
        .options(TextToSpeechOptions {
            voice_settings: Some(VoiceSettings {
                stability: Some(0.5),
                similarity_boost: Some(0.75),
                ..Default::default()
            }),
            ..Default::default()
        })
        .synthesize("The quick brown fox jumps over the lazy dog.")
        .await?;

    speech.write_to(speech.name()).await?;
    println!("{} ({}, {} bytes)", speech.name(), speech.content_type(), speech.len());

    // Example 2: Re-voice the generated speech
    println!();
    println!("Example 2: Speech to speech");
    println!("---");

    let converted = sts("eleven_multilingual_sts_v2", "charlotte")
        .convert(speech.clone())
        .await?;
    converted.write_to(converted.name()).await?;
    println!("{} ({} bytes)", converted.name(), converted.len());

    // Example 3: Isolate the voice
    println!();
    println!("Example 3: Audio isolation");
    println!("---");

    let isolated = isolation().isolate(speech).await?;
    isolated.write_to(isolated.name()).await?;
    println!("{} ({} bytes)", isolated.name(), isolated.len());

    Ok(())
}
