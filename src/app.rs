//! Main application module: replays a recording through the recognizers.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use log::{debug, info, warn};

use crate::{
    config::{Config, OutputFormat},
    error::{Error, Result},
    hand_tracker::{FrameOutput, HandTrackers},
    recording::{HandFrame, Recording},
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Recording to replay
    pub recording: PathBuf,
    /// Output file; standard output when `None`
    pub output: Option<PathBuf>,
    /// Runner settings
    pub settings: Config,
}

/// Counters describing one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames read from the recording
    pub frames: usize,
    /// Output records written
    pub written: usize,
    /// Frames rejected for violating the input contract
    pub rejected: usize,
    /// Distinct hands tracked at the end of the run
    pub hands: usize,
}

/// Main application struct
pub struct RecognitionApp {
    config: AppConfig,
    trackers: HandTrackers,
}

impl RecognitionApp {
    /// Create a new recognition application
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the settings are invalid
    pub fn new(config: AppConfig) -> Result<Self> {
        config.settings.validate()?;
        info!("Initializing hand gesture recognition");

        let trackers = HandTrackers::new(config.settings.tracking.max_hands);
        Ok(Self { config, trackers })
    }

    /// Replay the configured recording and write its labels
    ///
    /// # Errors
    ///
    /// Returns an error if the recording cannot be loaded or the output
    /// cannot be written. Malformed frames are skipped, not fatal.
    pub fn run(&mut self) -> Result<RunSummary> {
        info!("Loading recording from: {}", self.config.recording.display());
        let recording = Recording::from_file(&self.config.recording)?;
        info!(
            "Loaded {} frames covering {} hands",
            recording.frames.len(),
            recording.hand_count()
        );

        let output = self.config.output.clone();
        let summary = match output {
            Some(path) => {
                let file = File::create(&path)
                    .map_err(|e| Error::IoError(format!("Failed to create {}: {e}", path.display())))?;
                let mut writer = BufWriter::new(file);
                let summary = self.process_frames(&recording.frames, &mut writer)?;
                writer.flush()?;
                summary
            }
            None => {
                let stdout = io::stdout();
                let mut writer = stdout.lock();
                self.process_frames(&recording.frames, &mut writer)?
            }
        };

        info!(
            "Processed {} frames: {} written, {} rejected, {} hands",
            summary.frames, summary.written, summary.rejected, summary.hands
        );
        Ok(summary)
    }

    /// Run frames through the per-hand trackers and write the resulting labels
    ///
    /// # Errors
    ///
    /// Returns an error only if writing fails
    pub fn process_frames<W: Write>(&mut self, frames: &[HandFrame], out: &mut W) -> Result<RunSummary> {
        let mut outputs = Vec::with_capacity(frames.len());
        let mut rejected = 0;

        for frame in frames {
            match self.trackers.process(frame) {
                Ok(output) => {
                    debug!("{}", output);
                    if !(self.config.settings.output.skip_idle && output.is_idle()) {
                        outputs.push(output);
                    }
                }
                Err(
                    e @ (Error::InvalidInput(_) | Error::OutOfOrderFrame { .. } | Error::TooManyHands { .. }),
                ) => {
                    warn!("Skipping frame {} of hand {}: {}", frame.timestamp, frame.hand, e);
                    rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }

        write_outputs(out, &outputs, self.config.settings.output.format)?;

        Ok(RunSummary {
            frames: frames.len(),
            written: outputs.len(),
            rejected,
            hands: self.trackers.len(),
        })
    }

    /// Trackers holding the per-hand history of this run
    #[must_use]
    pub fn trackers(&self) -> &HandTrackers {
        &self.trackers
    }
}

/// Write recognized labels in the requested format
///
/// # Errors
///
/// Returns an error if writing or serialization fails
pub fn write_outputs<W: Write>(out: &mut W, outputs: &[FrameOutput], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for output in outputs {
                writeln!(out, "{output}")?;
            }
        }
        OutputFormat::Yaml => serde_yaml::to_writer(out, outputs)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        hand_tracker::HandId,
        landmarks::{Landmark, NormalizedRect},
    };

    fn app(settings: Config) -> RecognitionApp {
        RecognitionApp::new(AppConfig {
            recording: PathBuf::from("unused.yaml"),
            output: None,
            settings,
        })
        .unwrap()
    }

    fn frame(timestamp: i64, landmarks: usize) -> HandFrame {
        HandFrame {
            timestamp,
            hand: HandId(0),
            rect: NormalizedRect::new(0.5, 0.5, 0.3, 0.3),
            landmarks: vec![Landmark::new(0.5, 0.5); landmarks],
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut settings = Config::default();
        settings.tracking.max_hands = 0;
        let result = RecognitionApp::new(AppConfig {
            recording: PathBuf::from("unused.yaml"),
            output: None,
            settings,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_rejected_frames_are_counted() {
        let mut app = app(Config::default());
        let frames = vec![frame(0, 21), frame(1, 0), frame(2, 21)];
        let mut out = Vec::new();

        let summary = app.process_frames(&frames, &mut out).unwrap();
        assert_eq!(summary.frames, 3);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.written, 2);
        assert_eq!(summary.hands, 1);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("0\t0\t___\t___\t___\t___"));
    }

    #[test]
    fn test_skip_idle() {
        let mut settings = Config::default();
        settings.output.skip_idle = true;
        let mut app = app(settings);

        let mut out = Vec::new();
        let summary = app.process_frames(&[frame(0, 21), frame(1, 21)], &mut out).unwrap();
        assert_eq!(summary.written, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_yaml_output_uses_labels() {
        let outputs = [FrameOutput {
            timestamp: 3,
            hand: HandId(0),
            gesture: None,
            motion: Default::default(),
        }];
        let mut out = Vec::new();
        write_outputs(&mut out, &outputs, OutputFormat::Yaml).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("timestamp: 3"));
        assert!(text.contains("gesture:"));
        assert!(text.contains("slide:"));
        assert_eq!(text.matches("___").count(), 4);
    }
}
