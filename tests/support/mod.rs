#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use gemserve::config::Config;
use gemserve::gemini::dispatcher::Dispatcher;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A scratch document root, removed when dropped.
pub struct DocRoot {
    path: PathBuf,
}

impl DocRoot {
    pub fn new() -> Self {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!("gemserve-test-{}-{}", std::process::id(), n));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file(&self, rel: &str, contents: &[u8]) -> &Self {
        let target = self.path.join(rel);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(target, contents).unwrap();
        self
    }

    pub fn dir(&self, rel: &str) -> &Self {
        std::fs::create_dir_all(self.path.join(rel)).unwrap();
        self
    }

    pub fn config(&self, auto_index: bool) -> Config {
        Config {
            document_root: self.path.clone(),
            auto_index,
            ..Config::default()
        }
    }

    pub fn dispatcher(&self, auto_index: bool) -> Dispatcher {
        Dispatcher::new(Arc::new(self.config(auto_index)))
    }
}

impl Drop for DocRoot {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
