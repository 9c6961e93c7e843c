//! 外围层（词库加载、词表增删改）的错误类型；核心的分类/规范化/渲染函数不会失败。

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// 读取词库文件失败
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 词库文件第 `line` 行格式错误（行号从 1 开始）
    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// 要更新/删除的对象不存在
    #[error("not found: {0}")]
    NotFound(String),
}
