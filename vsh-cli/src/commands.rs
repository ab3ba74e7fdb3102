// SPDX-License-Identifier: AGPL-3.0-or-later
//! Shell verb implementations

use chrono::Local;
use std::io::Write;
use vsh_core::{VshError, VshResult};
use vsh_vfs::VirtualFilesystem;

/// Lines printed by `tail`
pub const TAIL_LINES: usize = 10;

/// Format used by `date`, e.g. `Fri Oct 16 14:03:59 2026`
pub const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// List a directory, defaulting to the current one
pub fn ls(vfs: &VirtualFilesystem, args: &[&str], out: &mut impl Write) -> VshResult<()> {
    let path = args.first().copied().unwrap_or(".");
    let listing = vfs.list_directory(path);
    for dir in &listing.directories {
        writeln!(out, "{dir}/")?;
    }
    for file in &listing.files {
        writeln!(out, "{file}")?;
    }
    Ok(())
}

/// Change the current directory
pub fn cd(vfs: &mut VirtualFilesystem, args: &[&str]) -> VshResult<()> {
    let path = args
        .first()
        .ok_or_else(|| VshError::Usage("cd: missing operand".into()))?;
    vfs.change_directory(path)
}

/// Rename an entry
pub fn mv(vfs: &mut VirtualFilesystem, args: &[&str]) -> VshResult<()> {
    match args {
        [src, dst] => vfs.rename(src, dst),
        _ => Err(VshError::Usage("mv: expected source and destination paths".into())),
    }
}

/// Print the last lines of a file
pub fn tail(vfs: &VirtualFilesystem, args: &[&str], out: &mut impl Write) -> VshResult<()> {
    let path = args
        .first()
        .ok_or_else(|| VshError::Usage("tail: missing file operand".into()))?;
    let content = vfs.read_file(path)?;
    for line in last_lines(&content, TAIL_LINES) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print the local time
pub fn date(out: &mut impl Write) -> VshResult<()> {
    writeln!(out, "{}", Local::now().format(DATE_FORMAT))?;
    Ok(())
}

/// Last `n` lines of `content`, ignoring trailing line breaks.
pub fn last_lines(content: &str, n: usize) -> Vec<&str> {
    let trimmed = content.trim_end_matches(['\n', '\r']);
    if trimmed.is_empty() {
        return Vec::new();
    }
    let lines: Vec<&str> = trimmed.lines().collect();
    lines[lines.len().saturating_sub(n)..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> String {
        (1..=count).map(|i| format!("Line {i}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_last_lines_twenty() {
        let content = numbered(20);
        let lines = last_lines(&content, TAIL_LINES);
        let expected: Vec<String> = (11..=20).map(|i| format!("Line {i}")).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_last_lines_short_file() {
        let content = "Content of file1\nLine2\nLine3";
        assert_eq!(last_lines(content, TAIL_LINES), vec!["Content of file1", "Line2", "Line3"]);
    }

    #[test]
    fn test_last_lines_trailing_newlines() {
        let content = format!("{}\n\n", numbered(12));
        let lines = last_lines(&content, TAIL_LINES);
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Line 3");
        assert_eq!(lines[9], "Line 12");
    }

    #[test]
    fn test_last_lines_crlf() {
        assert_eq!(last_lines("a\r\nb\r\n", 10), vec!["a", "b"]);
    }

    #[test]
    fn test_last_lines_empty() {
        assert!(last_lines("", 10).is_empty());
        assert!(last_lines("\n\n", 10).is_empty());
    }

    #[test]
    fn test_date_format() {
        let mut out = Vec::new();
        date(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.trim_end().ends_with(&Local::now().format("%Y").to_string()));
        assert_eq!(text.trim_end().split_whitespace().count(), 5);
    }

    #[test]
    fn test_mv_argument_count() {
        let mut vfs = VirtualFilesystem::new(Default::default());
        assert!(matches!(mv(&mut vfs, &["only"]), Err(VshError::Usage(_))));
        assert!(matches!(mv(&mut vfs, &["a", "b", "c"]), Err(VshError::Usage(_))));
    }

    #[test]
    fn test_cd_missing_operand() {
        let mut vfs = VirtualFilesystem::new(Default::default());
        assert!(matches!(cd(&mut vfs, &[]), Err(VshError::Usage(_))));
    }
}
