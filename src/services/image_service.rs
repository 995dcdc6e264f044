//! Contact image storage.
//!
//! Uploaded bytes are written to a content directory under a random name
//! and the contact's `image` field records the resulting path. The bytes
//! never enter the database, so every instance serving the same database
//! must see the same content directory.

use crate::error::{ContactsError, ContactsResult};
use crate::services::ContactService;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Content type used when the stored extension is not recognised.
pub const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Image bytes read back from the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Extension after the last `.` of the file name.
///
/// `None` when there is no dot, when the dot starts the name (`.hidden`)
/// or when it is the last character (`photo.`).
pub fn file_extension(file_name: &str) -> Option<&str> {
    let base = Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name);
    match base.rfind('.') {
        Some(idx) if idx > 0 && idx < base.len() - 1 => Some(&base[idx + 1..]),
        _ => None,
    }
}

/// Random file name keeping the original extension.
pub fn unique_file_name(extension: Option<&str>) -> String {
    let token = Uuid::new_v4();
    match extension {
        Some(ext) => format!("{}.{}", token, ext),
        None => token.to_string(),
    }
}

/// Content type for a stored image path.
pub fn content_type_for(path: &str) -> &'static str {
    match file_extension(path).map(|e| e.to_ascii_lowercase()).as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => DEFAULT_IMAGE_CONTENT_TYPE,
    }
}

/// Writes and reads contact images.
pub struct ImageService {
    contacts: Arc<dyn ContactService>,
    upload_dir: PathBuf,
}

impl ImageService {
    pub fn new(contacts: Arc<dyn ContactService>, upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            contacts,
            upload_dir: upload_dir.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Store `bytes` as the image of `contact_id`.
    ///
    /// An empty payload is accepted and ignored: nothing is written and the
    /// contact is left untouched (`Ok(None)`). Otherwise returns the path
    /// now recorded on the contact.
    pub async fn upload(
        &self,
        contact_id: i64,
        bytes: &[u8],
        original_filename: Option<&str>,
    ) -> ContactsResult<Option<String>> {
        let mut contact = self
            .contacts
            .get_by_id(contact_id)
            .await?
            .ok_or_else(|| ContactsError::not_found("Contact", contact_id))?;

        if bytes.is_empty() {
            info!(contact_id, "Empty image upload ignored");
            return Ok(None);
        }

        let extension = original_filename.and_then(file_extension);
        let file_name = unique_file_name(extension);

        tokio::fs::create_dir_all(&self.upload_dir).await?;
        let path = self.upload_dir.join(&file_name);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to write image");
            e
        })?;

        let stored_path = path.to_string_lossy().into_owned();
        contact.image = Some(stored_path.clone());
        if let Err(e) = self.contacts.update(contact_id, contact).await {
            if let Err(remove_err) = tokio::fs::remove_file(&path).await {
                warn!(
                    path = %path.display(),
                    error = %remove_err,
                    "Failed to remove orphaned image"
                );
            }
            return Err(e);
        }

        info!(contact_id, path = %stored_path, size = bytes.len(), "Contact image stored");
        Ok(Some(stored_path))
    }

    /// Read back the image recorded on `contact_id`.
    ///
    /// Missing contact, unset image and a file that is gone from disk all
    /// report `NotFound`. So does a recorded path that resolves outside the
    /// upload directory.
    pub async fn get_image(&self, contact_id: i64) -> ContactsResult<StoredImage> {
        let image = self
            .contacts
            .get_by_id(contact_id)
            .await?
            .and_then(|c| c.image)
            .ok_or_else(|| {
                ContactsError::NotFound(format!("Contact {} has no image", contact_id))
            })?;

        let path = self.resolve_stored(&image).await?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(missing_image(&image)),
            Err(e) => {
                error!(path = %image, error = %e, "Failed to read image");
                return Err(e.into());
            }
        };

        Ok(StoredImage {
            bytes,
            content_type: content_type_for(&image),
        })
    }

    /// Canonical location of a recorded image, confined to the upload directory.
    async fn resolve_stored(&self, image: &str) -> ContactsResult<PathBuf> {
        let root = canonical(&self.upload_dir, image).await?;
        let path = canonical(Path::new(image), image).await?;

        if !path.starts_with(&root) {
            warn!(path = %image, "Recorded image lies outside the upload directory");
            return Err(missing_image(image));
        }
        Ok(path)
    }
}

async fn canonical(path: &Path, image: &str) -> ContactsResult<PathBuf> {
    match tokio::fs::canonicalize(path).await {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(missing_image(image)),
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to resolve image path");
            Err(e.into())
        }
    }
}

fn missing_image(image: &str) -> ContactsError {
    ContactsError::NotFound(format!("Image file {} is missing", image))
}
