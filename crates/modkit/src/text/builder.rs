use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

use crate::logging::Logger;

/// Spaces per indentation level
pub const INDENT_WIDTH: usize = 4;

/// A free list of reusable string buffers.
///
/// Buffers handed out by [`StringBuilderPool::get`] are always empty but keep
/// the capacity they grew to while in use.
#[derive(Debug, Default)]
pub struct StringBuilderPool {
    free: Mutex<Vec<String>>,
}

impl StringBuilderPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a cleared buffer from the pool, allocating when it is empty
    pub fn get(&self) -> String {
        let mut free = self.free.lock().unwrap_or_else(PoisonError::into_inner);
        match free.pop() {
            Some(mut buffer) => {
                buffer.clear();
                buffer
            }
            None => String::new(),
        }
    }

    /// Return a buffer for reuse
    pub fn put(&self, buffer: String) {
        self.free
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(buffer);
    }

    /// Take a buffer that goes back to the pool when dropped
    pub fn acquire(&self) -> PooledString<'_> {
        PooledString {
            buffer: self.get(),
            pool: self,
        }
    }

    /// Number of idle buffers
    pub fn len(&self) -> usize {
        self.free.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A pooled `String`; derefs to the buffer and returns it to its pool on drop
pub struct PooledString<'a> {
    buffer: String,
    pool: &'a StringBuilderPool,
}

impl PooledString<'_> {
    /// Copy the contents out, leaving the buffer in place
    pub fn to_owned_string(&self) -> String {
        self.buffer.clone()
    }
}

impl Deref for PooledString<'_> {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buffer
    }
}

impl DerefMut for PooledString<'_> {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buffer
    }
}

impl fmt::Write for PooledString<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for PooledString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.buffer, f)
    }
}

impl Drop for PooledString<'_> {
    fn drop(&mut self) {
        self.pool.put(std::mem::take(&mut self.buffer));
    }
}

/// Builder-style helpers for `String`
pub trait StringBuilderExt {
    /// Append `line` indented by `indent` levels, followed by a newline
    fn add_indented_line(&mut self, line: &str, indent: usize) -> &mut Self;

    /// Post the current contents as a log message
    fn print(&mut self, logger: &Logger) -> &mut Self;
}

impl StringBuilderExt for String {
    fn add_indented_line(&mut self, line: &str, indent: usize) -> &mut Self {
        self.extend(std::iter::repeat_n(' ', indent * INDENT_WIDTH));
        self.push_str(line);
        self.push('\n');
        self
    }

    fn print(&mut self, logger: &Logger) -> &mut Self {
        logger.log(self);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogChannel, test_support::RecordingSink};
    use std::fmt::Write;
    use std::sync::Arc;

    #[test]
    fn test_get_from_empty_pool() {
        let pool = StringBuilderPool::new();
        assert!(pool.is_empty());
        assert!(pool.get().is_empty());
    }

    #[test]
    fn test_put_then_get_reuses_cleared_buffer() {
        let pool = StringBuilderPool::new();
        let mut buffer = String::with_capacity(64);
        buffer.push_str("stale");
        pool.put(buffer);
        assert_eq!(pool.len(), 1);

        let reused = pool.get();
        assert!(reused.is_empty());
        assert!(reused.capacity() >= 64);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pooled_string_returns_on_drop() {
        let pool = StringBuilderPool::new();
        {
            let mut pooled = pool.acquire();
            write!(pooled, "{}:{}", "a", 1).unwrap();
            pooled.push_str("!");
            assert_eq!(pooled.as_str(), "a:1!");
            assert_eq!(pooled.to_owned_string(), "a:1!");
            assert!(pool.is_empty());
        }
        assert_eq!(pool.len(), 1);
        assert!(pool.acquire().is_empty());
    }

    #[test]
    fn test_add_indented_line() {
        let mut text = String::new();
        text.add_indented_line("root", 0)
            .add_indented_line("child", 1)
            .add_indented_line("leaf", 2);
        assert_eq!(text, "root\n    child\n        leaf\n");
    }

    #[test]
    fn test_print_posts_contents() {
        let sink = Arc::new(RecordingSink::default());
        let logger = Logger::with_sink(sink.clone());
        let mut text = String::from("hello");
        text.print(&logger);
        assert_eq!(sink.messages(), vec![(LogChannel::Log, "hello".to_string())]);
    }
}
