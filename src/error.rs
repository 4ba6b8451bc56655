use std::path::PathBuf;

use thiserror::Error;

/// 转换流程中止的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalStage {
    /// 读取配置文件
    Config,
    /// 读取输入文本
    Input,
    /// 正则提取题目
    Extraction,
    /// 写出 JSON
    Output,
}

impl std::fmt::Display for FatalStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FatalStage::Config => "配置",
            FatalStage::Input => "输入",
            FatalStage::Extraction => "提取",
            FatalStage::Output => "输出",
        };
        write!(f, "{}", name)
    }
}

/// 转换错误类型
///
/// 每个变体都是致命错误：调用方应终止本次运行并返回非零退出码。
/// 单道题答案字母无效不属于错误，由转换服务以占位答案处理。
#[derive(Debug, Error)]
pub enum ConvertError {
    /// 配置文件读取失败
    #[error("无法读取配置文件 {}: {source}", .path.display())]
    ConfigReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 配置文件解析失败
    #[error("无法解析配置文件 {}: {source}", .path.display())]
    ConfigParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// 输入文件不存在
    #[error("输入文件不存在: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// 输入文件读取失败
    #[error("读取输入文件失败 ({}): {source}", .path.display())]
    InputReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 提取正则编译失败
    #[error("题目匹配正则无效: {0}")]
    Pattern(#[from] regex::Error),

    /// 没有匹配到任何题目
    #[error("在 {} 中没有找到符合格式的题目，请检查输入文件格式", .path.display())]
    NoQuestionsFound { path: PathBuf },

    /// 输出目录创建失败
    #[error("无法创建输出目录 {}: {source}", .path.display())]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    SerializeFailed(#[from] serde_json::Error),

    /// 输出文件写入失败
    #[error("写入输出文件失败 ({}): {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// 错误发生的阶段
    pub fn kind(&self) -> FatalStage {
        match self {
            ConvertError::ConfigReadFailed { .. } | ConvertError::ConfigParseFailed { .. } => {
                FatalStage::Config
            }
            ConvertError::InputNotFound { .. } | ConvertError::InputReadFailed { .. } => {
                FatalStage::Input
            }
            ConvertError::Pattern(_) | ConvertError::NoQuestionsFound { .. } => {
                FatalStage::Extraction
            }
            ConvertError::OutputDirFailed { .. }
            | ConvertError::SerializeFailed(_)
            | ConvertError::WriteFailed { .. } => FatalStage::Output,
        }
    }

    /// 创建输入读取错误，文件不存在时归为 `InputNotFound`
    pub fn input_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ConvertError::InputNotFound { path }
        } else {
            ConvertError::InputReadFailed { path, source }
        }
    }
}

/// 转换结果类型
pub type ConvertResult<T> = Result<T, ConvertError>;
