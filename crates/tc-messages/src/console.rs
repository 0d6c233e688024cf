//! Where fatal messages go and how the process ends.

use std::process;

/// Output channel for messages that end the process.
pub trait ErrorConsole {
    fn print_error(&self, message: &str);

    /// Terminate with `code`. Called after every message was printed.
    fn exit(&self, code: i32) -> !;
}

/// Prints to stderr and exits the real process.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessConsole;

impl ErrorConsole for ProcessConsole {
    fn print_error(&self, message: &str) {
        eprintln!("{message}");
    }

    fn exit(&self, code: i32) -> ! {
        process::exit(code)
    }
}

/// Process exit status for an HTTP response code.
pub fn http_exit_code(response_code: &str) -> i32 {
    match response_code.trim().parse::<u16>() {
        Ok(401 | 403) => 3,
        Ok(400..=499) => 4,
        Ok(500..=599) => 5,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_http_codes_to_exit_status() {
        assert_eq!(http_exit_code("401"), 3);
        assert_eq!(http_exit_code("403"), 3);
        assert_eq!(http_exit_code("404"), 4);
        assert_eq!(http_exit_code("400"), 4);
        assert_eq!(http_exit_code("503"), 5);
        assert_eq!(http_exit_code("200"), 1);
        assert_eq!(http_exit_code(""), 1);
        assert_eq!(http_exit_code("teapot"), 1);
    }
}
