use std::io;

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

use crate::error::Error;

pub(crate) fn try_sys_random(buf: &mut [u8]) -> Result<(), Error> {
    let mut filled = 0;

    // BCryptGenRandom takes a u32 length.
    for chunk in buf.chunks_mut(u32::MAX as usize) {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                chunk.as_mut_ptr(),
                chunk.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            let err = io::Error::other(format!("BCryptGenRandom failed with status {status:#x}"));
            tracing::error!(filled, error = %err, "BCryptGenRandom failed");
            return Err(Error::Entropy { filled, source: err });
        }

        filled += chunk.len();
    }

    Ok(())
}
