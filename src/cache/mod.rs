//! 对象缓存层
//!
//! 通过插件注册表在启动时选择后端（moka 内存缓存或 Redis），
//! 主要用于 JWT 中间件的 token -> 用户 查询加速。

pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个缓存后端插件
///
/// 后端类型需要提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $backend:ty) => {
        #[ctor::ctor]
        fn _register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let backend = <$backend>::new()
                            .map_err($crate::errors::StudyHubError::cache_connection)?;
                        Ok(Box::new(backend) as Box<dyn $crate::cache::ObjectCache>)
                    })
                        as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
