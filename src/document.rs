//! Document loading: one uploaded file, or every .txt/.md file in a directory

use std::path::Path;
use log::{debug, trace};

const ACCEPTED_EXTENSIONS: [&str; 2] = [".txt", ".md"];

/// Where a document's text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource
{   Upload
  , Directory
    {   files: usize
    }
}

/// Text being analyzed, fixed for the duration of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document
{   text: String
  , source: DocumentSource
}

impl Document
{   /// Uploaded-file mode: decode the bytes as text, nothing else
    pub fn from_upload(bytes: &[u8])
      -> Result<Self, crate::error::Error>
    {   let text = std::str::from_utf8(bytes)
          .map_err(|e| crate::error::Error::Decode(e.to_string()))?
          .to_string();
        debug!("Loaded uploaded document ({} bytes)", text.len());
        Ok(Document
        {   text
          , source: DocumentSource::Upload
        })
    }

    /// Read an uploaded file from disk; only .txt and .md are accepted
    pub fn from_upload_path(path: &Path)
      -> Result<Self, crate::error::Error>
    {   if !has_accepted_extension(path)
        {   return Err(crate::error::Error::UnsupportedFileType(
              path.display().to_string()
            ));
        }
        let bytes = std::fs::read(path)
          .map_err(|e| {
            crate::error::Error::Io(
              format!("{}: {}", path.display(), e)
            )
          })?;
        Document::from_upload(&bytes)
    }

    /// Directory mode: concatenate matching files in listing order
    ///
    /// Each file is followed by a blank line, then trailing whitespace
    /// of the whole text is stripped. Any read failure aborts the load.
    pub fn from_directory(dir: &Path)
      -> Result<Self, crate::error::Error>
    {   debug!("Scanning {} for documents", dir.display());
        let entries = std::fs::read_dir(dir)
          .map_err(|e| {
            crate::error::Error::Io(
              format!("{}: {}", dir.display(), e)
            )
          })?;

        let mut text = String::new();
        let mut files = 0;
        for entry in entries
        {   let entry = entry?;
            let path = entry.path();
            if !path.is_file()
              || !has_accepted_extension(&path)
            {   trace!("Skipping {}", path.display());
                continue;
            }

            let contents = std::fs::read_to_string(&path)
              .map_err(|e| {
                crate::error::Error::Io(
                  format!("{}: {}", path.display(), e)
                )
              })?;
            trace!("Appending {} ({} bytes)", path.display(), contents.len());
            text.push_str(&contents);
            text.push_str("\n\n");
            files += 1;
        }

        let text = text.trim_end().to_string();
        debug!("Loaded {} files from {}", files, dir.display());
        Ok(Document
        {   text
          , source: DocumentSource::Directory { files }
        })
    }

    pub fn as_str(&self) -> &str
    {   &self.text
    }

    pub fn source(&self) -> &DocumentSource
    {   &self.source
    }

    /// An empty document means no input is available
    pub fn is_empty(&self) -> bool
    {   self.text.is_empty()
    }
}

fn has_accepted_extension(path: &Path) -> bool
{   path.file_name()
      .and_then(|name| name.to_str())
      .map(|name| {
        ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
      })
      .unwrap_or(false)
}
