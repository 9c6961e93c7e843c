//! `jade_core`：纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：CLI/GUI/服务端都能复用同一套查询分发逻辑
//! - **分层清晰**：search（分发）-> classifier（判定）-> normalizer（规范化）-> store（查询）
//! - **存储可替换**：词库与词表都只是 trait，具体实现在 `jade_dict`
pub mod classifier;
pub mod error;
pub mod filter;
pub mod model;
pub mod search;
pub mod store;
