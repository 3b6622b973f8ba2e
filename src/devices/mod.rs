//! Compute device enumeration.
//!
//! The interpreter runs a small probe that asks torch for its CUDA devices
//! and always appends the CPU entry, so the list is never empty when the
//! probe itself succeeds. A missing torch simply means "CPU only".

use serde::{Deserialize, Serialize};

use crate::error::{PyvetError, Result};
use crate::python::Interpreter;

/// Probe script executed via `python -c`.
const PROBE_SCRIPT: &str = "\
import json
devices = []
try:
    import torch
    devices += [{'type': 'cuda', 'name': torch.cuda.get_device_name(i), 'id': f'cuda:{i}'} for i in range(torch.cuda.device_count())]
except ImportError:
    pass
devices.append({'type': 'cpu', 'name': 'CPU', 'id': 'cpu'})
print(json.dumps(devices))
";

/// A compute device usable by the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Device class: `cuda` or `cpu`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable name (GPU model, or `CPU`).
    pub name: String,
    /// Device identifier (`cuda:<n>` or `cpu`).
    pub id: String,
}

impl Device {
    /// The always-available CPU device.
    pub fn cpu() -> Self {
        Self {
            kind: "cpu".to_string(),
            name: "CPU".to_string(),
            id: "cpu".to_string(),
        }
    }
}

/// Enumerate available devices through the given interpreter.
pub fn probe(interpreter: &Interpreter) -> Result<Vec<Device>> {
    let captured = interpreter
        .run_code(PROBE_SCRIPT)
        .map_err(|e| PyvetError::DeviceProbeFailed {
            detail: e.to_string(),
        })?;

    if !captured.success {
        return Err(PyvetError::DeviceProbeFailed {
            detail: captured.stderr.trim().to_string(),
        });
    }

    parse_probe_output(&captured.stdout)
}

/// Parse the probe's JSON output.
fn parse_probe_output(stdout: &str) -> Result<Vec<Device>> {
    serde_json::from_str(stdout.trim()).map_err(|e| PyvetError::DeviceProbeFailed {
        detail: format!("unreadable probe output: {}", e),
    })
}
