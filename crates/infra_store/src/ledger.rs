//! File-backed warranty ledger
//!
//! Keeps issued warranties in an [`InMemoryWarrantyStore`] backed by a JSON
//! array on disk. Several processes may share one ledger file:
//!
//! - every insert holds an exclusive lock on a sidecar `<ledger>.lock` file
//!   while it reloads the ledger, checks for an existing warranty and writes
//! - lookups reload the file first, so they see warranties other processes
//!   issued after this one opened the ledger
//! - writes go to a synced temporary file in the same directory that is then
//!   renamed over the ledger, so a reader never sees a half-written file

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fd_lock::RwLock as FileLock;
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

use core_kernel::{DomainPort, PortError};
use domain_warranty::{ExtendedWarranty, Product, WarrantyPort};

use crate::adapters::InMemoryWarrantyStore;
use crate::error::StoreError;

/// Warranty store persisted to a JSON array on disk
#[derive(Debug)]
pub struct FileWarrantyLedger {
    path: PathBuf,
    lock_path: PathBuf,
    store: InMemoryWarrantyStore,
    // the file lock is per open file, this one covers threads sharing `self`
    write_guard: Mutex<()>,
}

impl FileWarrantyLedger {
    /// Opens a ledger, starting empty if the file does not exist yet
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let store = InMemoryWarrantyStore::from_warranties(read_ledger(&path)?)?;
        info!(warranties = store.len(), "Ledger opened");

        Ok(Self {
            lock_path: lock_path_for(&path),
            path,
            store,
            write_guard: Mutex::new(()),
        })
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the sidecar file locked while writing
    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    /// Warranties currently in the ledger, including ones other processes wrote
    pub fn warranties(&self) -> Result<Vec<ExtendedWarranty>, StoreError> {
        self.reload()?;
        self.store.snapshot()
    }

    /// Merges warranties found on disk that this instance has not seen yet
    fn reload(&self) -> Result<usize, StoreError> {
        let mut merged = 0;
        for warranty in read_ledger(&self.path)? {
            match self.store.insert(warranty) {
                Ok(()) => merged += 1,
                Err(StoreError::DuplicateEntry(_)) => {}
                Err(e) => return Err(e),
            }
        }
        if merged > 0 {
            debug!(merged, "Picked up warranties written elsewhere");
        }
        Ok(merged)
    }

    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(&self.store.snapshot()?)?;

        let mut tmp = NamedTempFile::new_in(parent_dir(&self.path))?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        // a failed persist drops the temporary file, which deletes it
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        debug!("Ledger written");
        Ok(())
    }

    fn append(&self, warranty: ExtendedWarranty) -> Result<(), StoreError> {
        let _guard = self.write_guard.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut lock = FileLock::new(self.open_lock_file()?);
        let _file_guard = lock.write()?;

        self.reload()?;

        let code = warranty.product_code().to_string();
        self.store.insert(warranty)?;
        if let Err(e) = self.save() {
            warn!(error = %e, "Ledger write failed, dropping warranty");
            self.store.remove(&code)?;
            return Err(e);
        }
        Ok(())
    }

    fn open_lock_file(&self) -> Result<File, StoreError> {
        Ok(OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)?)
    }
}

impl DomainPort for FileWarrantyLedger {}

impl WarrantyPort for FileWarrantyLedger {
    fn find_product_with_warranty_by_code(&self, code: &str) -> Result<Option<Product>, PortError> {
        self.reload()?;
        self.store.find_product_with_warranty_by_code(code)
    }

    fn find_by_code(&self, code: &str) -> Result<ExtendedWarranty, PortError> {
        self.reload()?;
        self.store.find_by_code(code)
    }

    #[instrument(skip(self, warranty), fields(code = %warranty.product_code()))]
    fn add(&self, warranty: ExtendedWarranty) -> Result<(), PortError> {
        Ok(self.append(warranty)?)
    }
}

fn read_ledger(path: &Path) -> Result<Vec<ExtendedWarranty>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&contents)?)
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".lock");
    PathBuf::from(name)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
