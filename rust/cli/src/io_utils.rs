//! Stdin and file helpers shared by the commands.

use std::io::BufRead;
use std::path::Path;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `None` on EOF or read errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use lowball_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  call \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("call"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Creates the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}
