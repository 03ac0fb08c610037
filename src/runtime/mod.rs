//! Host and process facts reported by `/api/info`.
//!
//! Handlers never read these from globals; they get a [`RuntimeInfo`]
//! through application state so tests can substitute a fixed host.

#[cfg(target_os = "linux")]
use std::fs;

/// Snapshot of the host and the current process.
pub trait RuntimeInfo: Send + Sync {
    fn machine_name(&self) -> String;

    fn os_version(&self) -> String;

    /// Logical cores visible to the process.
    fn processor_count(&self) -> usize;

    /// Resident memory of this process in bytes.
    fn working_set(&self) -> i64;
}

/// Reads the real host. Probes that fail report `"unknown"` or `0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostRuntime;

impl HostRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl RuntimeInfo for HostRuntime {
    fn machine_name(&self) -> String {
        #[cfg(target_os = "linux")]
        {
            if let Ok(name) = fs::read_to_string("/proc/sys/kernel/hostname") {
                let name = name.trim();
                if !name.is_empty() {
                    return name.to_string();
                }
            }
        }

        ["HOSTNAME", "COMPUTERNAME"]
            .iter()
            .find_map(|key| std::env::var(key).ok().filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| "unknown".to_string())
    }

    fn os_version(&self) -> String {
        #[cfg(target_os = "linux")]
        {
            if let Ok(release) = fs::read_to_string("/proc/sys/kernel/osrelease") {
                return format!("Linux {}", release.trim());
            }
        }

        std::env::consts::OS.to_string()
    }

    fn processor_count(&self) -> usize {
        num_cpus::get()
    }

    fn working_set(&self) -> i64 {
        #[cfg(target_os = "linux")]
        {
            if let Ok(status) = fs::read_to_string("/proc/self/status") {
                if let Some(bytes) = parse_vm_rss(&status) {
                    return bytes;
                }
            }
        }

        0
    }
}

/// Extracts `VmRSS` (reported in kB) from `/proc/<pid>/status` as bytes.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_vm_rss(status: &str) -> Option<i64> {
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kb: i64 = line
        .trim_start_matches("VmRSS:")
        .split_whitespace()
        .next()?
        .parse()
        .ok()?;
    Some(kb * 1024)
}

/// Fixed host used by tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StaticRuntime {
    pub machine_name: String,
    pub os_version: String,
    pub processor_count: usize,
    pub working_set: i64,
}

#[cfg(test)]
impl RuntimeInfo for StaticRuntime {
    fn machine_name(&self) -> String {
        self.machine_name.clone()
    }

    fn os_version(&self) -> String {
        self.os_version.clone()
    }

    fn processor_count(&self) -> usize {
        self.processor_count
    }

    fn working_set(&self) -> i64 {
        self.working_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vm_rss_is_converted_to_bytes() {
        let status = "Name:\tcicd\nVmPeak:\t  20000 kB\nVmRSS:\t    1234 kB\nThreads:\t4\n";
        assert_eq!(parse_vm_rss(status), Some(1234 * 1024));
    }

    #[test]
    fn vm_rss_missing_or_garbled() {
        assert_eq!(parse_vm_rss("Name:\tcicd\n"), None);
        assert_eq!(parse_vm_rss("VmRSS:\tlots kB\n"), None);
    }

    #[test]
    fn host_reports_logical_cores() {
        let host = HostRuntime::new();
        assert!(host.processor_count() > 0);
        assert_eq!(host.processor_count(), num_cpus::get());
    }

    #[test]
    fn host_probes_never_come_back_empty() {
        let host = HostRuntime::new();
        assert!(!host.machine_name().is_empty());
        assert!(!host.os_version().is_empty());
        assert!(host.working_set() >= 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn working_set_is_measured_on_linux() {
        assert!(HostRuntime::new().working_set() > 0);
    }
}
