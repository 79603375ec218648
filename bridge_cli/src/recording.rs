use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use bridge::{Bridge, Lane};
use serde::{Deserialize, Serialize};

/// Writes a JSON transcript of each finished session into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    attempts: Vec<AttemptRecording>,
}

#[derive(Serialize, Deserialize)]
pub struct SessionRecording {
    pub bridge: Bridge,
    pub attempts: Vec<AttemptRecording>,
}

/// One crossing attempt: every guess made, and whether it won.
#[derive(Serialize, Deserialize)]
pub struct AttemptRecording {
    pub moves: Vec<Lane>,
    pub success: bool,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            attempts: Vec::new(),
        })
    }

    pub fn store_attempt(&mut self, moves: &[Lane], success: bool) {
        self.attempts.push(AttemptRecording {
            moves: moves.to_vec(),
            success,
        });
    }

    pub fn write_session_recording(&mut self, bridge: &Bridge) -> anyhow::Result<()> {
        let filepath = self.directory.join(format!("crossing_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(filepath)?);
        let recording = SessionRecording {
            bridge: bridge.clone(),
            attempts: std::mem::take(&mut self.attempts),
        };
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(())
    }
}
