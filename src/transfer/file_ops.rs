//! Module `file_ops`
//!
//! Local file adapters around the transfer engine. The local file is opened
//! before the handshake starts, so a bad local path never leaves a transfer
//! command pending on the control channel.
//!
//! Downloads land in a `.tmp` sibling that only replaces the destination
//! once the transfer completed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, error};
use tokio::fs::{File, remove_file, rename};

use crate::client::Session;
use crate::error::{Result, ValidationError};
use crate::transfer::TransferMode;

impl Session {
    /// Download a remote file to `dest`, creating or replacing it.
    ///
    /// An existing `dest` is left untouched when the download fails.
    pub async fn download_file(
        &mut self,
        src: &str,
        dest: impl AsRef<Path>,
        mode: TransferMode,
        timeout: Duration,
    ) -> Result<u64> {
        let dest = dest.as_ref();
        let temp_path = temp_path(dest)?;
        let mut temp_file = File::create(&temp_path).await.inspect_err(|e| {
            error!("Cannot open destination file {}: {}", temp_path.display(), e);
        })?;

        let received = match self.retrieve(src, &mut temp_file, mode, timeout).await {
            Ok(n) => n,
            Err(e) => {
                drop(temp_file);
                let _ = remove_file(&temp_path).await;
                return Err(e);
            }
        };

        let finished = match temp_file.sync_all().await {
            Ok(()) => rename(&temp_path, dest).await,
            Err(e) => Err(e),
        };
        if let Err(e) = finished {
            error!("Failed to move {} to {}: {}", temp_path.display(), dest.display(), e);
            let _ = remove_file(&temp_path).await;
            return Err(e.into());
        }

        debug!("Saved {} bytes to {}", received, dest.display());
        Ok(received)
    }

    /// Put the local file `src` on the server at `dest`.
    pub async fn upload_file(
        &mut self,
        src: impl AsRef<Path>,
        dest: &str,
        mode: TransferMode,
        timeout: Duration,
    ) -> Result<u64> {
        let src = src.as_ref();
        let mut source_file = File::open(src).await.inspect_err(|e| {
            error!("Cannot open source file {}: {}", src.display(), e);
        })?;

        self.store(dest, &mut source_file, mode, timeout).await
    }

    /// Alias for [`Session::download_file`]
    pub async fn get(
        &mut self,
        src: &str,
        dest: impl AsRef<Path>,
        mode: TransferMode,
        timeout: Duration,
    ) -> Result<u64> {
        self.download_file(src, dest, mode, timeout).await
    }

    /// Alias for [`Session::upload_file`]
    pub async fn put(
        &mut self,
        src: impl AsRef<Path>,
        dest: &str,
        mode: TransferMode,
        timeout: Duration,
    ) -> Result<u64> {
        self.upload_file(src, dest, mode, timeout).await
    }
}

// `dest` with `.tmp` appended to its file name
fn temp_path(dest: &Path) -> Result<PathBuf> {
    let Some(name) = dest.file_name() else {
        return Err(ValidationError::MalformedInput(format!(
            "destination {} has no file name",
            dest.display()
        ))
        .into());
    };
    let mut temp_name = name.to_os_string();
    temp_name.push(".tmp");
    Ok(dest.with_file_name(temp_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_a_sibling() {
        assert_eq!(
            temp_path(Path::new("/data/report.csv")).unwrap(),
            PathBuf::from("/data/report.csv.tmp")
        );
        assert_eq!(temp_path(Path::new("notes")).unwrap(), PathBuf::from("notes.tmp"));
    }

    #[test]
    fn test_temp_path_needs_a_file_name() {
        assert!(temp_path(Path::new("/")).unwrap_err().is_validation());
        assert!(temp_path(Path::new("dir/..")).unwrap_err().is_validation());
    }
}
