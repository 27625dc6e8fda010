use std::process::ExitStatus;

/// Exit code used when the child's status cannot be determined.
pub const UNKNOWN_EXIT_CODE: i32 = 1;

/// Map a child's exit status onto a process exit code.
///
/// On Unix a signal-terminated child maps to `128 + signal`, the shell
/// convention.
pub fn normalize_exit(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(code) = status.code() {
            code
        } else if let Some(sig) = status.signal() {
            128 + sig
        } else {
            UNKNOWN_EXIT_CODE
        }
    }
    #[cfg(not(unix))]
    {
        status.code().unwrap_or(UNKNOWN_EXIT_CODE)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn plain_exit_codes_pass_through() {
        assert_eq!(normalize_exit(ExitStatus::from_raw(0)), 0);
        assert_eq!(normalize_exit(ExitStatus::from_raw(3 << 8)), 3);
    }

    #[test]
    fn signals_map_to_128_plus_signal() {
        // raw wait status 9 == killed by SIGKILL
        assert_eq!(normalize_exit(ExitStatus::from_raw(9)), 137);
    }
}
