//! Operating system abstraction layer (Linux)
//!
//! Random bytes come from the kernel through the `getrandom` system call,
//! which draws from the same pool as `/dev/urandom` but blocks until that
//! pool has been initialized once at boot.

use std::io;

use libc::{c_void, getrandom};

use crate::error::Error;

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// This function repeatedly calls the Linux `getrandom` system call until
/// the entire buffer is filled. Partial reads are handled transparently,
/// and calls interrupted by a signal (`EINTR`) are restarted.
///
/// # Errors
/// Returns [`Error::Entropy`] with the number of bytes already written if
/// `getrandom` fails for any other reason.
pub(crate) fn try_sys_random(buf: &mut [u8]) -> Result<(), Error> {
    fill_with(buf, |rest| {
        let ret = unsafe { getrandom(rest.as_mut_ptr() as *mut c_void, rest.len(), 0) };

        if ret < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(ret as usize)
        }
    })
}

/// Drives `read` over the unfilled tail of `buf` until it is full.
fn fill_with<F>(buf: &mut [u8], mut read: F) -> Result<(), Error>
where
    F: FnMut(&mut [u8]) -> io::Result<usize>,
{
    let mut filled = 0;

    while filled < buf.len() {
        match read(&mut buf[filled..]) {
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                tracing::error!(filled, error = %err, "getrandom() failed");
                return Err(Error::Entropy { filled, source: err });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use libc::{EINTR, EIO};

    use super::fill_with;
    use crate::error::Error;

    #[test]
    fn test_fill_with_accumulates_short_reads() {
        let mut buf = [0u8; 10];
        let mut calls = 0;

        fill_with(&mut buf, |rest| {
            calls += 1;
            let n = rest.len().min(3);
            rest[..n].fill(0xaa);
            Ok(n)
        })
        .unwrap();

        assert_eq!(calls, 4);
        assert_eq!(buf, [0xaa; 10]);
    }

    #[test]
    fn test_fill_with_restarts_on_eintr() {
        let mut buf = [0u8; 8];
        let mut results = vec![
            Ok(4),
            Err(io::Error::from_raw_os_error(EINTR)),
            Ok(4),
        ]
        .into_iter();

        fill_with(&mut buf, |_| results.next().unwrap()).unwrap();

        assert!(results.next().is_none());
    }

    #[test]
    fn test_fill_with_reports_partial_count_on_failure() {
        let mut buf = [0u8; 16];
        let mut results = vec![Ok(5), Ok(2), Err(io::Error::from_raw_os_error(EIO))].into_iter();

        let err = fill_with(&mut buf, |_| results.next().unwrap()).unwrap_err();

        match &err {
            Error::Entropy { filled, source } => {
                assert_eq!(*filled, 7);
                assert_eq!(source.raw_os_error(), Some(EIO));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(
            err.to_string()
                .starts_with("OS entropy facility failed after 7 bytes: "),
            "{err}"
        );
    }

    #[test]
    fn test_fill_with_empty_buffer_never_reads() {
        let mut buf = [0u8; 0];

        fill_with(&mut buf, |_| panic!("read called for an empty buffer")).unwrap();
    }
}
