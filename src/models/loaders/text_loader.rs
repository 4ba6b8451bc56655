use std::fs;
use std::path::Path;

use crate::error::{ConvertError, ConvertResult};

/// 读取原始题目文本（UTF-8）
pub fn load_input_text(input_path: &Path) -> ConvertResult<String> {
    tracing::info!("正在读取输入文件: {}", input_path.display());

    let text = fs::read_to_string(input_path)
        .map_err(|e| ConvertError::input_read_failed(input_path, e))?;

    tracing::info!("从输入文件读取了 {} 个字符", text.chars().count());

    Ok(text)
}
