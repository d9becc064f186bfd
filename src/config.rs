use serde::Deserialize;

use crate::command::{Endpoint, Op};
use crate::constant::*;
use crate::error::{GenError, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct GenConfig {
    pub count: u64,
    pub output: PathBuf,
    pub endpoint: Endpoint,
    pub op: Op,
}

impl Default for GenConfig {
    fn default() -> GenConfig {
        GenConfig {
            count: DEFAULT_COUNT,
            output: PathBuf::from(DEFAULT_OUTPUT),
            endpoint: Endpoint::default(),
            op: Op::default(),
        }
    }
}

impl GenConfig {
    pub fn merge(mut self, layer: ConfigLayer) -> GenConfig {
        if let Some(count) = layer.count {
            self.count = count;
        }
        if let Some(output) = layer.output {
            self.output = output;
        }
        if let Some(host) = layer.host {
            self.endpoint.host = host;
        }
        if let Some(port) = layer.port {
            self.endpoint.port = port;
        }
        if let Some(op) = layer.op {
            self.op = op;
        }
        self
    }
}

/// A partial set of overrides, read from a config file or the command line.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub count: Option<u64>,
    pub output: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub op: Option<Op>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<ConfigLayer> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => {
                let reader = BufReader::new(File::open(path)?);
                Ok(serde_yaml::from_reader(reader)?)
            }
            Some("json") => {
                let reader = BufReader::new(File::open(path)?);
                Ok(serde_json::from_reader(reader)?)
            }
            _ => Err(GenError::UnsupportedConfig(path.to_path_buf())),
        }
    }
}
