//! 文件操作错误定义

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    /// 文件无法打开或读取
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// `dxf` crate 解析失败
    #[error("DXF error: {0}")]
    Dxf(String),
}
