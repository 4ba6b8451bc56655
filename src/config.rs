use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConvertError, ConvertResult};

/// 程序配置
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 原始题目文本文件
    pub input_file: PathBuf,
    /// 输出 JSON 文件名
    pub output_file: String,
    /// 输出目录（不存在时自动创建）
    pub output_dir: PathBuf,
    /// 题库标题
    pub title: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("mechanical_2020_raw.txt"),
            output_file: "mechanical_2020.json".to_string(),
            output_dir: ["data", "yearWise", "isro", "mechanical"].iter().collect(),
            title: "ISRO Scientist/Engineer ME - 2020".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置，缺省的字段使用默认值
    pub fn from_toml_file(path: &Path) -> ConvertResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConvertError::ConfigReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConvertError::ConfigParseFailed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 从 TOML 字符串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 输出文件完整路径
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}
