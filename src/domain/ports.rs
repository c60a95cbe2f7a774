use crate::domain::model::{Assignment, Pair};
use crate::utils::error::{Result, SantaError};

/// 查詢兩人是否為不能配對的情侶
pub trait ForbiddenPairs {
    fn is_forbidden(&self, a: &str, b: &str) -> bool;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn max_attempts(&self) -> usize;
    fn reveal_delay_ms(&self) -> u64;
    fn seed(&self) -> Option<u64>;
}

/// 顯示層：只負責呈現核心已算好的結果
pub trait Renderer {
    fn show_step(&mut self, index: usize, pair: &Pair, is_last: bool) -> Result<()>;
    fn show_results(&mut self, assignment: &Assignment) -> Result<()>;
    fn show_error(&mut self, error: &SantaError) -> Result<()>;
}

pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}
