//! 加载错误定义
//!
//! 所有失败都在加载边界处转换为 `LoadError` 返回值，
//! 不会以panic形式越过管线边界。

use dpa_file::FileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    /// 文件缺失、损坏或格式不受支持
    #[error("failed to load drawing: {0}")]
    Parse(#[from] FileError),

    /// 解析成功但没有产生任何可渲染图元
    #[error("drawing loaded but no visible entities")]
    NoVisibleEntities,
}
