//! 拼音相关：声调对照表、查询串规范化、展示渲染。

pub mod normalize;
pub mod render;
pub mod tone;

pub use normalize::{PinyinNormalizer, normalize};
pub use render::{render_accented, render_display};
