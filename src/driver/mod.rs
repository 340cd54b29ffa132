//! # 驱动层
//!
//! 定义远程浏览器自动化驱动的抽象接口。批量命令通过该接口发出所有元素查询
//! 和交互操作；选择器语义、可见性轮询和单次调用超时都由外部驱动负责。
//!
//! ## 主要功能
//! - **可见性等待**: 等待选择器匹配的元素变为可见
//! - **元素查询**: 按文档顺序解析选择器匹配的全部元素
//! - **元素交互**: 对已解析的元素引用发出点击
//! - **视口滚动**: 相对元素自然位置按偏移量滚动视口
//!
//! ## 模块结构
//! - `traits`: 驱动会话的核心 trait 定义
//! - `types`: 元素引用等数据类型
//! - `mock`: 用于测试的 Mock 实现（可脚本化、带命令日志）
//!
//! ## 使用示例
//! ```rust,no_run
//! use browser_batch::driver::DriverSession;
//! use std::sync::Arc;
//!
//! # async fn example(session: Arc<dyn DriverSession>) -> Result<(), browser_batch::Error> {
//! // 解析元素集合
//! let elements = session.query_elements(".item").await?;
//! println!("Matched {} elements", elements.len());
//! # Ok(())
//! # }
//! ```

pub mod traits;
pub mod types;
pub mod mock;

pub use traits::DriverSession;
pub use types::ElementHandle;

// Re-export mock for development/testing
pub use mock::{DriverCommand, MockDriverSession};
