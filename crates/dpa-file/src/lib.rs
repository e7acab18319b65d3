//! DPA 文件解析与元数据提取
//!
//! 通过 `dxf` crate 读取DXF图纸，转换为内部文档模型，
//! 并从中派生摘要元数据。本crate从不自行解释原始字节。

pub mod document;
pub mod dxf_io;
pub mod error;
pub mod metadata;

pub use document::DrawingDocument;
pub use dxf_io::load_document;
pub use error::FileError;
pub use metadata::{extract_metadata, unit_label, DrawingMetadata, EntitySummary};
