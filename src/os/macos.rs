use libc::arc4random_buf;

use crate::error::Error;

/// `arc4random_buf` cannot fail and always fills the whole buffer.
pub(crate) fn try_sys_random(buf: &mut [u8]) -> Result<(), Error> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }

    Ok(())
}
