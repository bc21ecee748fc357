//! Arena-backed directory tree
//!
//! Every directory lives in one `Vec` owned by [`FileTree`] and is addressed
//! by [`DirId`]. A directory's `parent` is an optional index back into the
//! arena, so the tree never holds reference cycles. Files are owned by exactly
//! one directory's `children` list.

use std::fmt;
use std::sync::Arc;

use super::path::{split_file_path, split_segments};
use crate::error::PathError;
use crate::interpreter::Session;

/// Bound action of an executable file.
///
/// Receives the session and the arguments that followed the file path on
/// the `run` command line. Effects happen through the session; there is no
/// return value.
pub type Action = Arc<dyn Fn(&mut Session, &[String]) + Send + Sync>;

/// Index of a directory inside a [`FileTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirId(usize);

impl DirId {
    /// The root directory of every tree.
    pub const ROOT: DirId = DirId(0);
}

/// Payload of an executable file.
#[derive(Clone)]
pub struct Executable {
    /// Optional usage text.
    pub description: Option<String>,
    action: Action,
}

impl Executable {
    /// Create an executable from a description and an action.
    pub fn new<F>(description: Option<String>, action: F) -> Self
    where
        F: Fn(&mut Session, &[String]) + Send + Sync + 'static,
    {
        Self {
            description,
            action: Arc::new(action),
        }
    }

    /// Shared handle to the bound action.
    ///
    /// Callers clone the handle out of the tree before invoking it so the
    /// session can be borrowed mutably for the call.
    pub fn action(&self) -> Action {
        Arc::clone(&self.action)
    }
}

impl fmt::Debug for Executable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executable")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// File contents, one variant per file kind.
#[derive(Debug, Clone)]
pub enum FileData {
    /// Literal text, also runnable as a script.
    Text(String),
    /// A bound action.
    Executable(Executable),
}

/// A named leaf of the tree.
#[derive(Debug, Clone)]
pub struct File {
    pub name: String,
    pub data: FileData,
}

impl File {
    /// Create a text file.
    pub fn text(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: FileData::Text(content.into()),
        }
    }

    /// Create an executable file.
    pub fn executable(name: impl Into<String>, executable: Executable) -> Self {
        Self {
            name: name.into(),
            data: FileData::Executable(executable),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.data, FileData::Text(_))
    }

    pub fn is_executable(&self) -> bool {
        matches!(self.data, FileData::Executable(_))
    }
}

/// A child entry of a directory.
#[derive(Debug, Clone)]
pub enum Node {
    Directory(DirId),
    File(File),
}

/// A named directory in the arena.
#[derive(Debug, Clone)]
pub struct Directory {
    name: String,
    parent: Option<DirId>,
    children: Vec<Node>,
}

impl Directory {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent directory, `None` for the root.
    pub fn parent(&self) -> Option<DirId> {
        self.parent
    }

    /// Children in declaration order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// Literal description of a directory and everything below it.
///
/// Children are declared before their parent exists, so parent links are
/// only filled in when the description is turned into a [`FileTree`].
#[derive(Debug, Clone, Default)]
pub struct DirectorySpec {
    pub name: String,
    pub children: Vec<NodeSpec>,
}

/// Literal description of a directory child.
#[derive(Debug, Clone)]
pub enum NodeSpec {
    Directory(DirectorySpec),
    File(File),
}

impl DirectorySpec {
    /// Create an empty directory description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a file.
    pub fn file(mut self, file: File) -> Self {
        self.children.push(NodeSpec::File(file));
        self
    }

    /// Append a subdirectory.
    pub fn directory(mut self, directory: DirectorySpec) -> Self {
        self.children.push(NodeSpec::Directory(directory));
        self
    }
}

/// The directory tree of one session.
#[derive(Debug, Clone)]
pub struct FileTree {
    directories: Vec<Directory>,
}

impl FileTree {
    /// Build a tree from a literal description; its top directory becomes the root.
    pub fn from_spec(spec: DirectorySpec) -> Self {
        let mut tree = Self {
            directories: Vec::new(),
        };
        let root = tree.flatten(spec);
        debug_assert_eq!(root, DirId::ROOT);
        tree.reparent(root, true);
        tree
    }

    // Pushes the directory and its subtree with every parent link unset.
    fn flatten(&mut self, spec: DirectorySpec) -> DirId {
        let id = DirId(self.directories.len());
        self.directories.push(Directory {
            name: spec.name,
            parent: None,
            children: Vec::new(),
        });

        for child in spec.children {
            let node = match child {
                NodeSpec::File(file) => Node::File(file),
                NodeSpec::Directory(sub) => Node::Directory(self.flatten(sub)),
            };
            self.directories[id.0].children.push(node);
        }
        id
    }

    /// Point every child directory of `dir` back at `dir`.
    ///
    /// With `recursive`, the whole subtree below `dir` is re-parented too.
    pub fn reparent(&mut self, dir: DirId, recursive: bool) {
        let subdirectories: Vec<DirId> = self.directories[dir.0]
            .children
            .iter()
            .filter_map(|child| match child {
                Node::Directory(id) => Some(*id),
                Node::File(_) => None,
            })
            .collect();

        for child in subdirectories {
            self.directories[child.0].parent = Some(dir);
            if recursive {
                self.reparent(child, recursive);
            }
        }
    }

    pub fn root(&self) -> DirId {
        DirId::ROOT
    }

    /// Look up a directory by id.
    ///
    /// Ids are only handed out by this tree and directories are never
    /// removed, so every id a caller holds is valid.
    pub fn directory(&self, id: DirId) -> &Directory {
        &self.directories[id.0]
    }

    /// Number of directories in the tree.
    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Create an empty subdirectory under `parent`.
    pub fn add_directory(&mut self, parent: DirId, name: impl Into<String>) -> DirId {
        let id = DirId(self.directories.len());
        self.directories.push(Directory {
            name: name.into(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.directories[parent.0].children.push(Node::Directory(id));
        id
    }

    /// Append a file to `dir`.
    pub fn add_file(&mut self, dir: DirId, file: File) {
        self.directories[dir.0].children.push(Node::File(file));
    }

    /// Name of a child entry.
    pub fn node_name<'a>(&'a self, node: &'a Node) -> &'a str {
        match node {
            Node::Directory(id) => self.directory(*id).name(),
            Node::File(file) => &file.name,
        }
    }

    /// Names of the children of `dir`, in order.
    pub fn child_names(&self, dir: DirId) -> impl Iterator<Item = &str> {
        self.directory(dir)
            .children
            .iter()
            .map(move |child| self.node_name(child))
    }

    /// Absolute display path of `dir`: every ancestor's name followed by `/`.
    ///
    /// The root's empty name yields the leading `/`, so the root is `/` and
    /// `games` below it is `/games/`.
    pub fn display_path(&self, dir: DirId) -> String {
        let mut result = String::new();
        let mut current = Some(dir);
        while let Some(id) = current {
            let directory = self.directory(id);
            result.insert(0, '/');
            result.insert_str(0, &directory.name);
            current = directory.parent;
        }
        result
    }

    /// Resolve a directory path relative to `cwd`.
    ///
    /// A path whose first segment equals the root's name (the empty string)
    /// starts at the root; any other path starts at `cwd`. A trailing slash
    /// is ignored. `.` stays put and `..` moves to the parent.
    pub fn resolve_directory(&self, cwd: DirId, path: &str) -> Result<DirId, PathError> {
        let mut segments = split_segments(path);
        let mut current = cwd;

        if segments.first().copied() == Some(self.directory(DirId::ROOT).name()) {
            current = DirId::ROOT;
            segments.remove(0);
        }

        if segments.last().is_some_and(|segment| segment.is_empty()) {
            segments.pop();
        }

        for segment in segments {
            match segment {
                "." => continue,
                ".." => {
                    current = self
                        .directory(current)
                        .parent
                        .ok_or(PathError::RootHasNoParent)?;
                }
                name => {
                    let child = self
                        .directory(current)
                        .children
                        .iter()
                        .find(|child| self.node_name(child) == name);
                    current = match child {
                        None => return Err(PathError::DirectoryNotFound(name.to_string())),
                        Some(Node::File(file)) => return Err(PathError::IsAFile(file.name.clone())),
                        Some(Node::Directory(id)) => *id,
                    };
                }
            }
        }

        Ok(current)
    }

    /// Resolve a file path relative to `cwd`.
    ///
    /// The directory portion resolves as in [`resolve_directory`](Self::resolve_directory)
    /// and defaults to `cwd`. When several files in that directory share the
    /// name, the first one wins.
    pub fn resolve_file(&self, cwd: DirId, path: &str) -> Result<&File, PathError> {
        let file_path =
            split_file_path(path).ok_or_else(|| PathError::Malformed(path.to_string()))?;

        let dir = match file_path.directory {
            Some(directory) => self.resolve_directory(cwd, directory)?,
            None => cwd,
        };

        self.directory(dir)
            .children
            .iter()
            .find_map(|child| match child {
                Node::File(file) if file.name == file_path.name => Some(file),
                _ => None,
            })
            .ok_or_else(|| PathError::FileNotFound {
                name: file_path.name.to_string(),
                directory: self.display_path(dir),
            })
    }
}

impl Default for FileTree {
    fn default() -> Self {
        Self::from_spec(DirectorySpec::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FileTree {
        FileTree::from_spec(
            DirectorySpec::new("")
                .file(File::text("readme.txt", "hello"))
                .directory(
                    DirectorySpec::new("a")
                        .directory(DirectorySpec::new("b").file(File::text("deep.txt", "deep")))
                        .file(File::text("note.txt", "note")),
                )
                .directory(DirectorySpec::new("My Folder")),
        )
    }

    fn dir_named(tree: &FileTree, path: &str) -> DirId {
        tree.resolve_directory(DirId::ROOT, path).unwrap()
    }

    #[test]
    fn test_from_spec_sets_parents() {
        let tree = sample();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.directory(DirId::ROOT).parent(), None);

        let a = dir_named(&tree, "a");
        let b = dir_named(&tree, "a/b");
        assert_eq!(tree.directory(a).parent(), Some(DirId::ROOT));
        assert_eq!(tree.directory(b).parent(), Some(a));
    }

    #[test]
    fn test_reparent_non_recursive_only_touches_direct_children() {
        let mut tree = FileTree {
            directories: Vec::new(),
        };
        let root = tree.flatten(
            DirectorySpec::new("").directory(DirectorySpec::new("a").directory(DirectorySpec::new("b"))),
        );
        tree.reparent(root, false);

        assert_eq!(tree.directory(DirId(1)).parent(), Some(root));
        assert_eq!(tree.directory(DirId(2)).parent(), None);
    }

    #[test]
    fn test_display_path() {
        let tree = sample();
        assert_eq!(tree.display_path(DirId::ROOT), "/");
        assert_eq!(tree.display_path(dir_named(&tree, "a/b")), "/a/b/");
    }

    #[test]
    fn test_resolve_absolute_and_relative() {
        let tree = sample();
        let a = dir_named(&tree, "/a");
        let b = tree.resolve_directory(a, "b").unwrap();
        assert_eq!(tree.directory(b).name(), "b");
        assert_eq!(tree.resolve_directory(b, "/").unwrap(), DirId::ROOT);
        assert_eq!(tree.resolve_directory(b, "").unwrap(), DirId::ROOT);
    }

    #[test]
    fn test_resolve_dot_and_dotdot() {
        let tree = sample();
        let b = dir_named(&tree, "a/b");
        assert_eq!(tree.resolve_directory(b, ".").unwrap(), b);
        assert_eq!(tree.resolve_directory(b, "../..").unwrap(), DirId::ROOT);
        assert_eq!(tree.resolve_directory(b, "./../b/").unwrap(), b);
    }

    #[test]
    fn test_resolve_parent_of_root_fails() {
        let tree = sample();
        assert_eq!(
            tree.resolve_directory(DirId::ROOT, ".."),
            Err(PathError::RootHasNoParent)
        );
    }

    #[test]
    fn test_resolve_missing_and_file_segments() {
        let tree = sample();
        assert_eq!(
            tree.resolve_directory(DirId::ROOT, "a/missing"),
            Err(PathError::DirectoryNotFound("missing".into()))
        );
        assert_eq!(
            tree.resolve_directory(DirId::ROOT, "readme.txt"),
            Err(PathError::IsAFile("readme.txt".into()))
        );
    }

    #[test]
    fn test_resolve_name_with_space() {
        let tree = sample();
        let folder = dir_named(&tree, "My Folder");
        assert_eq!(tree.directory(folder).name(), "My Folder");
    }

    #[test]
    fn test_resolve_file() {
        let tree = sample();
        let a = dir_named(&tree, "a");
        assert_eq!(tree.resolve_file(a, "note.txt").unwrap().name, "note.txt");
        assert_eq!(tree.resolve_file(a, "b/deep.txt").unwrap().name, "deep.txt");
        assert_eq!(tree.resolve_file(a, "/readme.txt").unwrap().name, "readme.txt");
    }

    #[test]
    fn test_resolve_file_failures() {
        let tree = sample();
        assert_eq!(
            tree.resolve_file(DirId::ROOT, "a/").unwrap_err(),
            PathError::Malformed("a/".into())
        );
        assert_eq!(
            tree.resolve_file(DirId::ROOT, "a").unwrap_err(),
            PathError::FileNotFound {
                name: "a".into(),
                directory: "/".into()
            }
        );
        assert_eq!(
            tree.resolve_file(DirId::ROOT, "nope/x.txt").unwrap_err(),
            PathError::DirectoryNotFound("nope".into())
        );
    }

    #[test]
    fn test_resolve_file_duplicate_names_first_wins() {
        let mut tree = sample();
        tree.add_file(DirId::ROOT, File::text("readme.txt", "second"));
        match &tree.resolve_file(DirId::ROOT, "readme.txt").unwrap().data {
            FileData::Text(text) => assert_eq!(text, "hello"),
            FileData::Executable(_) => panic!("expected text file"),
        }
    }

    #[test]
    fn test_add_directory() {
        let mut tree = sample();
        let new = tree.add_directory(DirId::ROOT, "new");
        assert_eq!(tree.directory(new).parent(), Some(DirId::ROOT));
        assert_eq!(dir_named(&tree, "/new/"), new);
        assert_eq!(
            tree.child_names(DirId::ROOT).collect::<Vec<_>>(),
            vec!["readme.txt", "a", "My Folder", "new"]
        );
    }
}
