use crate::command::Command;
use crate::config::GenConfig;
use crate::constant::PROGRESS_INTERVAL;
use crate::error::Result;
use crate::file_io::*;

use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub lines: u64,
    pub bytes: u64,
}

pub struct Generator {
    config: GenConfig,
}

impl Generator {
    pub fn new(config: GenConfig) -> Generator {
        Generator { config }
    }

    /// Truncates `config.output` and writes `config.count` commands to it.
    pub fn run(&self) -> Result<Summary> {
        log::info!(
            "writing {} {} commands for {} to {}",
            self.config.count,
            self.config.op.name(),
            self.config.endpoint,
            self.config.output.display()
        );
        let mut writer = create_truncated(&self.config.output)?;
        write_commands(&mut writer, &self.config)?;

        let summary = Summary {
            output: self.config.output.clone(),
            lines: writer.lines,
            bytes: writer.pos,
        };
        log::info!("wrote {} lines ({} bytes)", summary.lines, summary.bytes);
        Ok(summary)
    }
}

pub fn write_commands<W: Write>(
    writer: &mut BufWriterWithPos<W>,
    config: &GenConfig,
) -> Result<()> {
    for i in 0..config.count {
        let line = Command::for_index(config.op, i).render(&config.endpoint);
        writer.write_line(&line)?;

        if (i + 1) % PROGRESS_INTERVAL == 0 {
            log::debug!("{} commands written", i + 1);
        }
    }
    writer.flush()?;
    Ok(())
}
