//! JSON 写出服务 - 业务能力层
//!
//! 只负责"把文档写到磁盘"，不关心文档怎么来的

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::models::QuizDocument;

/// JSON 写出服务
///
/// - 输出目录不存在时自动创建
/// - 两空格缩进，非 ASCII 字符原样输出
pub struct JsonWriter {
    output_dir: PathBuf,
    output_file: String,
}

impl JsonWriter {
    pub fn new(output_dir: impl Into<PathBuf>, output_file: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            output_file: output_file.into(),
        }
    }

    /// 输出文件完整路径
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// 写出文档，返回写入的文件路径
    pub fn write(&self, document: &QuizDocument) -> ConvertResult<PathBuf> {
        ensure_dir(&self.output_dir)?;

        let json = serde_json::to_string_pretty(document)?;
        let path = self.output_path();

        debug!("写入 {} 字节到 {}", json.len(), path.display());

        fs::write(&path, json).map_err(|source| ConvertError::WriteFailed {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

fn ensure_dir(dir: &Path) -> ConvertResult<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| ConvertError::OutputDirFailed {
        path: dir.to_path_buf(),
        source,
    })
}
