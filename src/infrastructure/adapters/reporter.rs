//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    interactive: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stdout이 TTY일 때만 섹션 제목을 강조한다.
    pub fn new() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        if self.interactive {
            println!("\x1b[1m== {name} ==\x1b[0m");
        } else {
            println!("== {name} ==");
        }
    }

    fn kv(&self, key: &str, value: &str) {
        println!("{:<10}: {}", key, value);
    }

    fn raw(&self, line: &str) {
        println!("{}", line);
    }
}
