pub mod cache;

pub use cache::{CacheError, CacheResult, CounterCache, MemoryCache, RedisCache};
