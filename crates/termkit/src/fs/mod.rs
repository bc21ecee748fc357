//! Virtual filesystem for Termkit
//!
//! A single in-memory directory tree, rebuilt from a seed for every session:
//! - [`FileTree`]: arena of directories; `parent` links are indices, never owners
//! - [`File`]: a leaf holding either text or an executable action
//! - [`DirectorySpec`]: literal tree description used to build a [`FileTree`]

mod path;
mod seed;
mod tree;

pub use seed::default_filesystem;
pub use tree::{
    Action, DirId, Directory, DirectorySpec, Executable, File, FileData, FileTree, Node, NodeSpec,
};
