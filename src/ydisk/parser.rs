//! Parses `yandex-disk status` output into a [`StatusSnapshot`].

use crate::status::{Status, StatusSnapshot, RECENT_LIMIT};

/// Parses one captured `yandex-disk status` output.
///
/// A missing "Synchronization core status" line means the daemon is not
/// running. The `recent_changed` flag is left unset; the poll loop fills it
/// in by comparing against the previous snapshot.
pub fn parse_status(output: &str) -> StatusSnapshot {
    let mut snapshot = StatusSnapshot::default();
    let mut saw_core_status = false;
    let mut in_recent = false;

    for raw_line in output.lines() {
        let line = raw_line.trim();

        if in_recent {
            if let Some(value) = line.strip_prefix("file:") {
                if snapshot.recent.len() < RECENT_LIMIT {
                    snapshot.recent.push(unquote(value).to_string());
                }
                continue;
            }
            if line.is_empty() {
                continue;
            }
            in_recent = false;
        }

        if let Some(value) = line.strip_prefix("Synchronization core status:") {
            snapshot.status = parse_status_keyword(value.trim());
            saw_core_status = true;
        } else if let Some(value) = line.strip_prefix("Sync progress:") {
            snapshot.progress = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("Error:") {
            snapshot.error_message = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("Path:") {
            snapshot.error_path = unquote(value).to_string();
        } else if let Some(value) = line.strip_prefix("Total:") {
            snapshot.total_space = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("Used:") {
            snapshot.used_space = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("Available:") {
            snapshot.free_space = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("Trash size:") {
            snapshot.trash_size = value.trim().to_string();
        } else if line == "Last synchronized items:" {
            in_recent = true;
        }
    }

    if !saw_core_status {
        snapshot.status = Status::None;
    }
    snapshot
}

fn parse_status_keyword(value: &str) -> Status {
    match value {
        "idle" => Status::Idle,
        "busy" => Status::Busy,
        "index" => Status::Index,
        "paused" => Status::Paused,
        // The daemon reports assorted failure strings here; all of them
        // render as the error state.
        _ => Status::Error,
    }
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches('\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE_OUTPUT: &str = "\
Synchronization core status: idle
Path to Yandex.Disk directory: '/home/user/Yandex.Disk'
\tTotal: 10.0 GB
\tUsed: 1.5 GB
\tAvailable: 8.5 GB
\tMax file size: 50 GB
\tTrash size: 0 B

Last synchronized items:
\tfile: 'doc.txt'
\tfile: 'photos/pic.png'
";

    #[test]
    fn parses_idle_output() {
        let snapshot = parse_status(IDLE_OUTPUT);
        assert_eq!(snapshot.status, Status::Idle);
        assert_eq!(snapshot.total_space, "10.0 GB");
        assert_eq!(snapshot.used_space, "1.5 GB");
        assert_eq!(snapshot.free_space, "8.5 GB");
        assert_eq!(snapshot.trash_size, "0 B");
        assert_eq!(snapshot.recent, vec!["doc.txt", "photos/pic.png"]);
        assert!(snapshot.error_message.is_empty());
    }

    #[test]
    fn parses_busy_with_progress() {
        let output = "Synchronization core status: busy\nSync progress: 12 files / 1.5 GB\n";
        let snapshot = parse_status(output);
        assert_eq!(snapshot.status, Status::Busy);
        assert_eq!(snapshot.progress, "12 files / 1.5 GB");
    }

    #[test]
    fn parses_error_with_path() {
        let output = "\
Synchronization core status: error
Error: access denied
Path: '/home/user/Yandex.Disk/locked.txt'
";
        let snapshot = parse_status(output);
        assert_eq!(snapshot.status, Status::Error);
        assert_eq!(snapshot.error_message, "access denied");
        assert_eq!(snapshot.error_path, "/home/user/Yandex.Disk/locked.txt");
    }

    #[test]
    fn unrecognized_core_status_maps_to_error() {
        let snapshot = parse_status("Synchronization core status: no internet access\n");
        assert_eq!(snapshot.status, Status::Error);
    }

    #[test]
    fn missing_core_status_means_daemon_not_running() {
        assert_eq!(parse_status("").status, Status::None);
        assert_eq!(
            parse_status("Error: daemon not started\n").status,
            Status::None
        );
    }

    #[test]
    fn recent_list_is_capped() {
        let mut output = String::from("Synchronization core status: idle\nLast synchronized items:\n");
        for index in 0..15 {
            output.push_str(&format!("\tfile: 'f{index}.txt'\n"));
        }
        let snapshot = parse_status(&output);
        assert_eq!(snapshot.recent.len(), RECENT_LIMIT);
        assert_eq!(snapshot.recent[0], "f0.txt");
    }

    #[test]
    fn recent_section_ends_at_next_field() {
        let output = "\
Last synchronized items:
\tfile: 'a.txt'

Synchronization core status: idle
";
        let snapshot = parse_status(output);
        assert_eq!(snapshot.recent, vec!["a.txt"]);
        assert_eq!(snapshot.status, Status::Idle);
    }
}
