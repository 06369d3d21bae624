use crate::artifacts::compare::comparison_error::{CompareError, CompareResult};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const TEMP_PREFIX: &str = ".creepymatrix-";
#[cfg(unix)]
const SCRIPT_MODE: u32 = 0o755;

/// A script file that only appears at its destination once fully written.
///
/// Content goes to a temporary file next to the destination. `persist` marks
/// it executable and renames it into place; dropping a `ScriptFile` without
/// persisting it removes the temporary file, so a failed run leaves nothing
/// behind.
#[derive(Debug)]
pub struct ScriptFile {
    destination: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl ScriptFile {
    pub fn create(destination: &Path) -> CompareResult<Self> {
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp_file = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempfile_in(dir)
            .map_err(|e| Self::write_error(destination, e))?;

        Ok(ScriptFile {
            destination: destination.to_path_buf(),
            writer: BufWriter::new(temp_file),
        })
    }

    /// Where content goes until `persist` renames it into place.
    pub fn temp_path(&self) -> &Path {
        self.writer.get_ref().path()
    }

    pub fn persist(self) -> CompareResult<PathBuf> {
        let destination = self.destination;
        let temp_file = self
            .writer
            .into_inner()
            .map_err(|e| Self::write_error(&destination, e.into_error()))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| Self::write_error(&destination, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(SCRIPT_MODE);
            temp_file
                .as_file()
                .set_permissions(permissions)
                .map_err(|e| Self::write_error(&destination, e))?;
        }

        temp_file
            .persist(&destination)
            .map_err(|e| Self::write_error(&destination, e.error))?;

        Ok(destination)
    }

    fn write_error(destination: &Path, source: std::io::Error) -> CompareError {
        CompareError::output_write(destination.display().to_string(), source)
    }
}

impl Write for ScriptFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
