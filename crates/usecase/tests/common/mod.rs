#![allow(dead_code)]
// crates/usecase/tests/common/mod.rs
//! In-memory filesystem used to drive the lister and creator in tests.

use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    io,
    rc::Rc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use pdirfile_ports::{DirectoryBackend, DirectoryStream, RawMetadata};
use pdirfile_shared_kernel::{DirError, Result, normalize};

#[derive(Debug, Clone, Copy)]
struct Node {
    is_directory: bool,
    modified: SystemTime,
}

/// Changes applied to the tree the next time a stream is rewound.
#[derive(Debug, Clone)]
pub enum Mutation {
    AddFile(String),
    Remove(String),
}

#[derive(Debug, Default)]
struct State {
    nodes: BTreeMap<String, Node>,
    broken_metadata: BTreeSet<String>,
    refuse_create: BTreeSet<String>,
    on_rewind: Vec<Mutation>,
    create_calls: Vec<String>,
    open_calls: Vec<String>,
    fail_read_at: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct MemoryFs {
    state: Rc<RefCell<State>>,
}

fn key(path: &str) -> String {
    normalize(path).expect("test paths are non-empty").into_string()
}

fn parent_of(path: &str) -> Option<String> {
    match path.rfind('/') {
        Some(0) if path.len() > 1 => Some("/".to_string()),
        Some(0) | None => None,
        Some(idx) => Some(path[..idx].to_string()),
    }
}

impl MemoryFs {
    pub fn new() -> Self {
        let fs = Self { state: Rc::new(RefCell::new(State::default())) };
        fs.insert("/", true, 0);
        fs
    }

    fn insert(&self, path: &str, is_directory: bool, secs: u64) {
        let modified = UNIX_EPOCH + Duration::from_secs(secs);
        self.state.borrow_mut().nodes.insert(key(path), Node { is_directory, modified });
    }

    pub fn dir(self, path: &str) -> Self {
        self.insert(path, true, 0);
        self
    }

    pub fn file(self, path: &str) -> Self {
        self.insert(path, false, 0);
        self
    }

    pub fn file_at(self, path: &str, secs: u64) -> Self {
        self.insert(path, false, secs);
        self
    }

    /// `stat` on this path fails although the name shows up in listings.
    pub fn broken(self, path: &str) -> Self {
        self.state.borrow_mut().broken_metadata.insert(key(path));
        self
    }

    /// `mkdir` on this path fails with permission denied.
    pub fn refuse_create(self, path: &str) -> Self {
        self.state.borrow_mut().refuse_create.insert(path.to_string());
        self
    }

    /// Reading the entry at this position (counting `.` and `..`) fails with EIO.
    pub fn fail_read_at(self, position: usize) -> Self {
        self.state.borrow_mut().fail_read_at = Some(position);
        self
    }

    pub fn on_rewind(self, mutation: Mutation) -> Self {
        self.state.borrow_mut().on_rewind.push(mutation);
        self
    }

    pub fn exists_dir(&self, path: &str) -> bool {
        self.state.borrow().nodes.get(&key(path)).is_some_and(|n| n.is_directory)
    }

    pub fn create_calls(&self) -> Vec<String> {
        self.state.borrow().create_calls.clone()
    }

    pub fn opened(&self) -> usize {
        self.state.borrow().open_calls.len()
    }

    /// Paths exactly as handed to `open_directory`.
    pub fn open_calls(&self) -> Vec<String> {
        self.state.borrow().open_calls.clone()
    }

    fn children(&self, dir: &str) -> Vec<String> {
        let state = self.state.borrow();
        let mut names = vec![".".to_string(), "..".to_string()];
        names.extend(
            state
                .nodes
                .keys()
                .filter(|path| parent_of(path).as_deref() == Some(dir))
                .map(|path| path.rsplit('/').next().unwrap_or_default().to_string()),
        );
        names
    }
}

pub struct MemoryStream {
    fs: MemoryFs,
    dir: String,
    names: Vec<String>,
    position: usize,
}

impl DirectoryStream for MemoryStream {
    fn read_next(&mut self) -> Result<Option<String>> {
        if self.fs.state.borrow().fail_read_at == Some(self.position) {
            return Err(DirError::os_failure("read_dir", &self.dir, io::Error::from(io::ErrorKind::Other)));
        }
        let name = self.names.get(self.position).cloned();
        self.position += 1;
        Ok(name)
    }

    fn rewind(&mut self) -> Result<()> {
        let mutations = std::mem::take(&mut self.fs.state.borrow_mut().on_rewind);
        for mutation in mutations {
            match mutation {
                Mutation::AddFile(path) => self.fs.insert(&path, false, 0),
                Mutation::Remove(path) => {
                    self.fs.state.borrow_mut().nodes.remove(&key(&path));
                }
            }
        }
        self.names = self.fs.children(&self.dir);
        self.position = 0;
        Ok(())
    }
}

impl DirectoryBackend for MemoryFs {
    type Stream = MemoryStream;

    fn open_directory(&self, path: &str) -> Result<Self::Stream> {
        let dir = key(path);
        match self.state.borrow().nodes.get(&dir) {
            Some(node) if node.is_directory => {}
            Some(_) => return Err(DirError::from_open(path, io::Error::from(io::ErrorKind::NotADirectory))),
            None => return Err(DirError::from_open(path, io::Error::from(io::ErrorKind::NotFound))),
        }
        self.state.borrow_mut().open_calls.push(path.to_string());
        let names = self.children(&dir);
        Ok(MemoryStream { fs: self.clone(), dir, names, position: 0 })
    }

    fn query_metadata(&self, path: &str) -> Result<RawMetadata> {
        let k = key(path);
        let state = self.state.borrow();
        if state.broken_metadata.contains(&k) {
            return Err(DirError::MetadataUnavailable {
                path: path.to_string(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        state
            .nodes
            .get(&k)
            .map(|n| RawMetadata { modified: n.modified, is_directory: n.is_directory })
            .ok_or_else(|| DirError::MetadataUnavailable {
                path: path.to_string(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
    }

    fn create_directory(&self, path: &str) -> Result<()> {
        self.state.borrow_mut().create_calls.push(path.to_string());
        if self.state.borrow().refuse_create.contains(path) {
            return Err(DirError::os_failure("create_dir", path, io::Error::from(io::ErrorKind::PermissionDenied)));
        }
        let k = key(path);
        if self.state.borrow().nodes.contains_key(&k) {
            return Err(DirError::AlreadyExists { path: path.to_string() });
        }
        let parent_ok = parent_of(&k).is_none_or(|p| self.exists_dir(&p));
        if !parent_ok {
            return Err(DirError::os_failure("create_dir", path, io::Error::from(io::ErrorKind::NotFound)));
        }
        self.insert(&k, true, 0);
        Ok(())
    }
}
