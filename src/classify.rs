//! On-disk folder classification.
//!
//! When the user descends into an item, the engine takes a snapshot of the
//! item's content folder and buckets every file by purpose. The snapshot is
//! what navigation lists as "item-internal categories"; it is derived data
//! and never persisted.

mod walk;

use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};
use crate::lang::Language;

/// The purpose buckets a file can classify into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    /// Modifiable source data (`psd`, `clip`, `blend`, `fbx`).
    Modify,
    /// Textures (`png`, `jpg`).
    Texture,
    /// Documentation (`txt`, `md`, `pdf`).
    Document,
    /// Unity packages (`unitypackage`).
    Package,
    /// Everything under the item's material folder, regardless of extension.
    Material,
    /// Anything else.
    Unknown,
}

impl FileCategory {
    /// All buckets, in display order.
    pub const ALL: [FileCategory; 6] = [
        FileCategory::Modify,
        FileCategory::Texture,
        FileCategory::Document,
        FileCategory::Package,
        FileCategory::Material,
        FileCategory::Unknown,
    ];

    /// Buckets a file extension (without the dot, any case).
    /// The material bucket is assigned by folder, never by extension.
    pub fn from_extension(extension: &str) -> Self {
        let ext = extension.to_ascii_lowercase();
        match ext.as_str() {
            "psd" | "clip" | "blend" | "fbx" => Self::Modify,
            "png" | "jpg" => Self::Texture,
            "txt" | "md" | "pdf" => Self::Document,
            "unitypackage" => Self::Package,
            _ => Self::Unknown,
        }
    }

    fn name_ja(self) -> &'static str {
        match self {
            Self::Modify => "改変用データ",
            Self::Texture => "テクスチャ",
            Self::Document => "ドキュメント",
            Self::Package => "Unityパッケージ",
            Self::Material => "マテリアル",
            Self::Unknown => "不明",
        }
    }

    pub fn display_name(self, lang: Language) -> &'static str {
        lang.translate(self.name_ja())
    }
}

/// A classified file: name plus full path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileData {
    pub file_name: String,
    pub file_path: PathBuf,
}

impl FileData {
    fn new(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            file_name,
            file_path: path,
        }
    }

    /// The file extension, lowercased, without the dot.
    pub fn extension(&self) -> Option<String> {
        self.file_path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
    }
}

/// A point-in-time classification snapshot of an item's folders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderInfo {
    modify: Vec<FileData>,
    textures: Vec<FileData>,
    documents: Vec<FileData>,
    packages: Vec<FileData>,
    materials: Vec<FileData>,
    unknown: Vec<FileData>,
    errors: usize,
}

impl FolderInfo {
    /// Classifies the item folder at `item_path`, plus the side material
    /// folder when one is configured.
    ///
    /// A missing item folder is the caller-visible "broken item" condition.
    /// Unreadable subpaths inside an existing folder are skipped and
    /// counted; they never fail the whole classification. A missing
    /// material folder is likewise skipped.
    pub fn classify(item_path: &Path, material_path: Option<&Path>) -> Result<Self> {
        if !item_path.is_dir() {
            return Err(CatalogError::BrokenItemFolder(item_path.to_path_buf()));
        }

        let mut info = FolderInfo::default();

        let mut files = Vec::new();
        walk::collect_files(item_path, &mut files, &mut info.errors);
        for path in files {
            let bucket = match path.extension() {
                Some(ext) => FileCategory::from_extension(&ext.to_string_lossy()),
                None => FileCategory::Unknown,
            };
            info.bucket_mut(bucket).push(FileData::new(path));
        }

        if let Some(material) = material_path.filter(|path| !path.as_os_str().is_empty()) {
            if material.is_dir() {
                let mut files = Vec::new();
                walk::collect_files(material, &mut files, &mut info.errors);
                info.materials.extend(files.into_iter().map(FileData::new));
            } else {
                log::warn!("material folder is missing, skipping: {}", material.display());
            }
        }

        for category in FileCategory::ALL {
            info.bucket_mut(category)
                .sort_by(|a, b| a.file_name.cmp(&b.file_name));
        }

        Ok(info)
    }

    fn bucket_mut(&mut self, category: FileCategory) -> &mut Vec<FileData> {
        match category {
            FileCategory::Modify => &mut self.modify,
            FileCategory::Texture => &mut self.textures,
            FileCategory::Document => &mut self.documents,
            FileCategory::Package => &mut self.packages,
            FileCategory::Material => &mut self.materials,
            FileCategory::Unknown => &mut self.unknown,
        }
    }

    /// The files of one bucket, ordered by file name.
    pub fn files(&self, category: FileCategory) -> &[FileData] {
        match category {
            FileCategory::Modify => &self.modify,
            FileCategory::Texture => &self.textures,
            FileCategory::Document => &self.documents,
            FileCategory::Package => &self.packages,
            FileCategory::Material => &self.materials,
            FileCategory::Unknown => &self.unknown,
        }
    }

    pub fn count(&self, category: FileCategory) -> usize {
        self.files(category).len()
    }

    /// Every classified file, bucket by bucket in display order.
    pub fn all_files(&self) -> Vec<&FileData> {
        FileCategory::ALL
            .iter()
            .flat_map(|category| self.files(*category))
            .collect()
    }

    pub fn total(&self) -> usize {
        FileCategory::ALL
            .iter()
            .map(|category| self.count(*category))
            .sum()
    }

    /// Number of entries skipped because they could not be read.
    pub fn errors(&self) -> usize {
        self.errors
    }
}
