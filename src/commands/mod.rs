//! # 批量命令层
//!
//! 在驱动会话之上提供多元素便捷操作，把原始的元素查询和点击/滚动动作组合成
//! 更高级的命令。
//!
//! ## 主要命令
//! - **wait_for_all_visible**: 并发等待多个选择器全部可见
//! - **get_number_of_elements**: 统计选择器匹配的元素数量
//! - **click_nth_element**: 点击第 n 个匹配元素（从 1 开始计数）
//! - **click_first_element / click_last_element**: 点击首个/末个匹配元素
//! - **scroll_and_click**: 滚动、停顿等待浮动元素消失后点击
//!
//! ## 架构设计
//! 命令通过 [`BatchCommands`] 扩展 trait 的缺省方法提供，并对所有驱动会话
//! 做 blanket 实现，调用方可以像使用会话原生操作一样使用它们。
//! [`BatchSession`] 将共享的驱动句柄与配置绑定，为省略的参数补上配置缺省值。
//!
//! ## 模块结构
//! - `batch`: 批量命令的扩展 trait 实现
//! - `session`: 绑定配置缺省值的会话包装
//!
//! ## 使用示例
//! ```rust,no_run
//! use browser_batch::{BatchCommands, DriverSession};
//! use std::sync::Arc;
//!
//! # async fn example(session: Arc<dyn DriverSession>) -> Result<(), browser_batch::Error> {
//! session.wait_for_all_visible(&[".header", ".sidebar"]).await?;
//! session.click_first_element(".result").await?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod session;


pub use batch::{BatchCommands, DEFAULT_SETTLE_PAUSE_MS};
pub use session::BatchSession;
