/// Generation statistics
///
/// Tracks messages and bytes written, line-size extremes and throughput.

use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone)]
pub struct GenerationStats {
    start_time: Option<Instant>,
    finish_time: Option<Instant>,
    total_messages: u64,
    total_bytes: u64,
    min_line_len: Option<usize>,
    max_line_len: Option<usize>,
}

impl GenerationStats {
    pub fn new() -> Self {
        GenerationStats {
            start_time: None,
            finish_time: None,
            total_messages: 0,
            total_bytes: 0,
            min_line_len: None,
            max_line_len: None,
        }
    }

    /// Mark the start of a run; later calls are ignored
    pub fn start(&mut self) {
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
        }
    }

    /// Record one written line
    pub fn record_message(&mut self, size: usize) {
        self.start();
        self.total_messages += 1;
        self.total_bytes += size as u64;
        self.min_line_len = Some(self.min_line_len.map_or(size, |m| m.min(size)));
        self.max_line_len = Some(self.max_line_len.map_or(size, |m| m.max(size)));
    }

    /// Freeze elapsed time at the end of a run
    pub fn finish(&mut self) {
        self.start();
        self.finish_time = Some(Instant::now());
    }

    /// Elapsed time, up to `finish()` if it was called
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|st| match self.finish_time {
            Some(end) => end.duration_since(st),
            None => st.elapsed(),
        })
    }

    pub fn messages_per_sec(&self) -> f64 {
        self.rate(self.total_messages)
    }

    pub fn bytes_per_sec(&self) -> f64 {
        self.rate(self.total_bytes)
    }

    fn rate(&self, count: u64) -> f64 {
        match self.elapsed() {
            Some(elapsed) if elapsed.as_secs_f64() > 0.0 => count as f64 / elapsed.as_secs_f64(),
            _ => 0.0,
        }
    }

    pub fn total_messages(&self) -> u64 {
        self.total_messages
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn min_line_len(&self) -> Option<usize> {
        self.min_line_len
    }

    pub fn max_line_len(&self) -> Option<usize> {
        self.max_line_len
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Emit a summary at info level
    pub fn log_summary(&self) {
        info!(
            messages = self.total_messages,
            bytes = self.total_bytes,
            min_line_len = ?self.min_line_len,
            max_line_len = ?self.max_line_len,
            elapsed = ?self.elapsed(),
            messages_per_sec = format_args!("{:.2}", self.messages_per_sec()),
            bytes_per_sec = format_args!("{:.2}", self.bytes_per_sec()),
            "Generation complete"
        );
    }
}

impl Default for GenerationStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_message() {
        let mut stats = GenerationStats::new();
        stats.record_message(2010);
        stats.record_message(2003);
        assert_eq!(stats.total_messages(), 2);
        assert_eq!(stats.total_bytes(), 4013);
        assert_eq!(stats.min_line_len(), Some(2003));
        assert_eq!(stats.max_line_len(), Some(2010));
    }

    #[test]
    fn test_empty_stats() {
        let stats = GenerationStats::new();
        assert_eq!(stats.elapsed(), None);
        assert_eq!(stats.messages_per_sec(), 0.0);
        assert_eq!(stats.min_line_len(), None);
    }

    #[test]
    fn test_finish_freezes_elapsed() {
        let mut stats = GenerationStats::new();
        stats.record_message(10);
        stats.finish();
        let first = stats.elapsed().unwrap();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(stats.elapsed().unwrap(), first);
    }

    #[test]
    fn test_reset() {
        let mut stats = GenerationStats::new();
        stats.record_message(10);
        stats.finish();
        stats.reset();
        assert_eq!(stats.total_messages(), 0);
        assert_eq!(stats.elapsed(), None);
    }
}
