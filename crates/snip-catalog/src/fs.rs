//! The file-system collaborator.
//!
//! All catalog and picker I/O goes through the [`FileSystem`] trait so that
//! hosts can supply their own primitives. Two implementations ship here:
//!
//! - [`LocalFs`] - the local disk, through `tokio::fs`
//! - [`MemoryFs`] - an in-memory tree for tests and embedding
//!
//! Every operation may fail independently; callers decide which failures are
//! fatal.

use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashSet;

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// Anything else (sockets, dangling links, unfollowed links).
    Other,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirEntry {
    /// File name within the listed directory.
    pub name: String,
    /// What the entry is.
    pub kind: EntryKind,
}

impl DirEntry {
    /// Creates a directory entry.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Asynchronous file-system primitives.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if `path` exists.
    fn exists(&self, path: &Utf8Path) -> impl Future<Output = bool> + Send;

    /// Lists the entries of a directory.
    fn list_directory(&self, path: &Utf8Path)
    -> impl Future<Output = io::Result<Vec<DirEntry>>> + Send;

    /// Reads the full contents of a file.
    fn read_file(&self, path: &Utf8Path) -> impl Future<Output = io::Result<Vec<u8>>> + Send;

    /// Resolves `path` to a canonical form, used to detect directory cycles.
    fn canonicalize(&self, path: &Utf8Path)
    -> impl Future<Output = io::Result<Utf8PathBuf>> + Send;
}

/// The local file system.
///
/// # Examples
///
/// ```
/// use snip_catalog::{FileSystem, LocalFs};
/// use camino::Utf8Path;
///
/// let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
/// let fs = LocalFs::new(true);
/// assert!(runtime.block_on(fs.exists(Utf8Path::new(env!("CARGO_MANIFEST_DIR")))));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs {
    follow_links: bool,
}

impl LocalFs {
    /// Creates a local file system. With `follow_links`, symbolic links are
    /// reported as the kind of their target.
    #[must_use]
    pub const fn new(follow_links: bool) -> Self {
        Self { follow_links }
    }

    async fn entry_kind(&self, entry: &tokio::fs::DirEntry) -> EntryKind {
        let file_type = match entry.file_type().await {
            Ok(file_type) => file_type,
            Err(err) => {
                tracing::debug!(path = %entry.path().display(), error = %err, "Cannot stat entry");
                return EntryKind::Other;
            }
        };

        if file_type.is_dir() {
            return EntryKind::Directory;
        }
        if file_type.is_file() {
            return EntryKind::File;
        }
        if !(file_type.is_symlink() && self.follow_links) {
            return EntryKind::Other;
        }

        match tokio::fs::metadata(entry.path()).await {
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(_) => EntryKind::Other,
            Err(err) => {
                tracing::debug!(path = %entry.path().display(), error = %err, "Dangling link");
                EntryKind::Other
            }
        }
    }
}

impl FileSystem for LocalFs {
    async fn exists(&self, path: &Utf8Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    async fn list_directory(&self, path: &Utf8Path) -> io::Result<Vec<DirEntry>> {
        let mut reader = tokio::fs::read_dir(path).await?;
        let mut entries = Vec::new();

        while let Some(entry) = reader.next_entry().await? {
            let Ok(name) = entry.file_name().into_string() else {
                tracing::warn!(dir = %path, "Skipping entry with non-UTF-8 name");
                continue;
            };
            let kind = self.entry_kind(&entry).await;
            entries.push(DirEntry { name, kind });
        }

        Ok(entries)
    }

    async fn read_file(&self, path: &Utf8Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn canonicalize(&self, path: &Utf8Path) -> io::Result<Utf8PathBuf> {
        let canonical = tokio::fs::canonicalize(path).await?;
        Utf8PathBuf::from_path_buf(canonical).map_err(|raw| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("path is not valid UTF-8: {}", raw.display()),
            )
        })
    }
}

#[derive(Debug, Default)]
struct MemoryTree {
    files: BTreeMap<Utf8PathBuf, Vec<u8>>,
    dirs: BTreeSet<Utf8PathBuf>,
    unreadable: FxHashSet<Utf8PathBuf>,
}

impl MemoryTree {
    fn add_ancestors(&mut self, path: &Utf8Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_owned());
        }
    }
}

/// An in-memory file system.
///
/// Directories are created implicitly for every added file. Paths marked
/// unreadable fail both listing and reading with `PermissionDenied`.
///
/// # Examples
///
/// ```
/// use snip_catalog::{FileSystem, MemoryFs};
/// use camino::Utf8Path;
///
/// let fs = MemoryFs::new()
///     .with_file("/snips/rust/iter.rs", "fn main() {}")
///     .with_dir("/empty");
/// assert_eq!(fs.file_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryFs {
    tree: RwLock<MemoryTree>,
    reads: Mutex<Vec<Utf8PathBuf>>,
}

impl MemoryFs {
    /// Creates an empty file system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, creating its parent directories.
    #[must_use]
    pub fn with_file(self, path: impl Into<Utf8PathBuf>, contents: impl AsRef<[u8]>) -> Self {
        self.add_file(path, contents);
        self
    }

    /// Adds an empty directory, creating its parents.
    #[must_use]
    pub fn with_dir(self, path: impl Into<Utf8PathBuf>) -> Self {
        let path = path.into();
        let mut tree = self.tree.write();
        tree.add_ancestors(&path);
        tree.dirs.insert(path);
        drop(tree);
        self
    }

    /// Marks a file or directory as unreadable.
    #[must_use]
    pub fn with_unreadable(self, path: impl Into<Utf8PathBuf>) -> Self {
        self.tree.write().unreadable.insert(path.into());
        self
    }

    /// Adds or replaces a file, creating its parent directories.
    pub fn add_file(&self, path: impl Into<Utf8PathBuf>, contents: impl AsRef<[u8]>) {
        let path = path.into();
        let mut tree = self.tree.write();
        tree.add_ancestors(&path);
        tree.files.insert(path, contents.as_ref().to_vec());
    }

    /// Number of files in the tree.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.tree.read().files.len()
    }

    /// Paths passed to [`FileSystem::read_file`], in call order.
    #[must_use]
    pub fn reads(&self) -> Vec<Utf8PathBuf> {
        self.reads.lock().clone()
    }

    fn permission_denied(path: &Utf8Path) -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, format!("{path}: permission denied"))
    }

    fn not_found(path: &Utf8Path) -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, format!("{path}: not found"))
    }
}

impl FileSystem for MemoryFs {
    async fn exists(&self, path: &Utf8Path) -> bool {
        let tree = self.tree.read();
        tree.dirs.contains(path) || tree.files.contains_key(path)
    }

    async fn list_directory(&self, path: &Utf8Path) -> io::Result<Vec<DirEntry>> {
        let tree = self.tree.read();
        if tree.unreadable.contains(path) {
            return Err(Self::permission_denied(path));
        }
        if !tree.dirs.contains(path) {
            return Err(Self::not_found(path));
        }

        let is_child = |candidate: &Utf8Path| candidate.parent() == Some(path);
        let dirs = tree
            .dirs
            .iter()
            .filter(|dir| is_child(dir))
            .filter_map(|dir| dir.file_name())
            .map(|name| DirEntry::new(name, EntryKind::Directory));
        let files = tree
            .files
            .keys()
            .filter(|file| is_child(file))
            .filter_map(|file| file.file_name())
            .map(|name| DirEntry::new(name, EntryKind::File));

        Ok(dirs.chain(files).collect())
    }

    async fn read_file(&self, path: &Utf8Path) -> io::Result<Vec<u8>> {
        self.reads.lock().push(path.to_owned());
        let tree = self.tree.read();
        if tree.unreadable.contains(path) {
            return Err(Self::permission_denied(path));
        }
        tree.files
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    async fn canonicalize(&self, path: &Utf8Path) -> io::Result<Utf8PathBuf> {
        if self.exists(path).await {
            Ok(path.to_owned())
        } else {
            Err(Self::not_found(path))
        }
    }
}
