//! Filesystem helpers shared by the copy, move, and trash operations.

use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

/// The final component of a path, as shown in user-facing messages.
///
/// Falls back to the full path when there is no final component (e.g. `/`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// The final component of a path, canonicalizing when the lexical form has
/// none (e.g. `..` or a trailing `/.`).
pub fn base_name(path: &Path) -> io::Result<OsString> {
    if let Some(name) = path.file_name() {
        return Ok(name.to_os_string());
    }
    let canonical = path.canonicalize()?;
    canonical
        .file_name()
        .map(|name| name.to_os_string())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no base name"))
}

/// Copy the directory `src` recursively to `dst`, creating `dst` as needed
/// and merging with entries already present.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Move `src` to the exact path `dst`.
///
/// Uses `rename`, falling back to copy-and-remove when the paths live on
/// different filesystems.
pub fn move_path(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            if src.is_dir() {
                copy_dir_recursive(src, dst)?;
                fs::remove_dir_all(src)
            } else {
                fs::copy(src, dst)?;
                fs::remove_file(src)
            }
        }
        Err(err) => Err(err),
    }
}

/// Move `src` under `dst` when `dst` is a directory, otherwise replace `dst`.
///
/// Returns the path the entry now lives at.
pub fn move_into(src: &Path, dst: &Path) -> io::Result<PathBuf> {
    let target = if dst.is_dir() {
        dst.join(base_name(src)?)
    } else {
        dst.to_path_buf()
    };
    move_path(src, &target)?;
    Ok(target)
}

/// Render a `stat`-style permission string (e.g. `drwxr-xr-x`).
#[cfg(unix)]
pub fn permissions_string(meta: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    let kind = if meta.file_type().is_symlink() {
        'l'
    } else if meta.is_dir() {
        'd'
    } else {
        '-'
    };

    let mode = meta.permissions().mode();
    let mut perms = ['-'; 9];
    const BITS: [(u32, char, usize); 9] = [
        (0o400, 'r', 0),
        (0o200, 'w', 1),
        (0o100, 'x', 2),
        (0o040, 'r', 3),
        (0o020, 'w', 4),
        (0o010, 'x', 5),
        (0o004, 'r', 6),
        (0o002, 'w', 7),
        (0o001, 'x', 8),
    ];
    for (bit, ch, idx) in BITS {
        if mode & bit != 0 {
            perms[idx] = ch;
        }
    }
    // setuid/setgid/sticky annotate the matching execute slot
    if mode & 0o4000 != 0 {
        perms[2] = if perms[2] == 'x' { 's' } else { 'S' };
    }
    if mode & 0o2000 != 0 {
        perms[5] = if perms[5] == 'x' { 's' } else { 'S' };
    }
    if mode & 0o1000 != 0 {
        perms[8] = if perms[8] == 'x' { 't' } else { 'T' };
    }

    std::iter::once(kind).chain(perms).collect()
}

/// Render a permission string on platforms without unix mode bits.
#[cfg(not(unix))]
pub fn permissions_string(meta: &Metadata) -> String {
    let kind = if meta.is_dir() { 'd' } else { '-' };
    let perms = if meta.permissions().readonly() {
        "r--r--r--"
    } else {
        "rw-rw-rw-"
    };
    format!("{kind}{perms}")
}
