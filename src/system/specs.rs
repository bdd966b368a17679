use serde::{Deserialize, Serialize};
use std::path::Path;

const CPUINFO_PATH: &str = "/proc/cpuinfo";
const MEMINFO_PATH: &str = "/proc/meminfo";
const DOCKERENV_PATH: &str = "/.dockerenv";

/// Best-effort description of the host. Unknown values are `"Unknown"` / `-1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSpecs {
    pub cpu_name: String,
    pub cpu_cores: i64,
    pub ram_size: String,
    pub is_docker: bool,
}

impl SystemSpecs {
    pub fn collect() -> Self {
        let (cpu_name, cpu_cores) = std::fs::read_to_string(CPUINFO_PATH)
            .map(|info| parse_cpuinfo(&info))
            .unwrap_or_else(|_| ("Unknown".to_string(), -1));

        let ram_size = std::fs::read_to_string(MEMINFO_PATH)
            .map(|info| parse_meminfo(&info))
            .unwrap_or_else(|_| "Unknown".to_string());

        Self {
            cpu_name,
            cpu_cores,
            ram_size,
            is_docker: Path::new(DOCKERENV_PATH).exists(),
        }
    }
}

/// Extracts the first `model name` and `cpu cores` entries.
///
/// A core count that does not parse is reported as 0.
pub fn parse_cpuinfo(info: &str) -> (String, i64) {
    let mut cpu_name = "Unknown".to_string();
    let mut cpu_cores = -1;

    for line in info.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key == "model name" && cpu_name == "Unknown" {
            cpu_name = value.trim().to_string();
        } else if key == "cpu cores" && cpu_cores == -1 {
            cpu_cores = value.trim().parse().unwrap_or(0);
        }

        if cpu_name != "Unknown" && cpu_cores != -1 {
            break;
        }
    }

    (cpu_name, cpu_cores)
}

/// Renders `MemTotal` (kB) as gigabytes with two decimals.
pub fn parse_meminfo(info: &str) -> String {
    info.lines()
        .find(|line| line.starts_with("MemTotal"))
        .and_then(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() == 3 {
                fields[1].parse::<u64>().ok()
            } else {
                None
            }
        })
        .map(|kb| format!("{:.2} GB", kb as f64 / 1024.0 / 1024.0))
        .unwrap_or_else(|| "Unknown".to_string())
}
