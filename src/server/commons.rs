use http::HeaderValue;
use libc::{c_char, c_int, size_t};
use log::warn;

lazy_static! {
    pub static ref HOSTNAME: String = hostname();
    pub static ref HOSTNAME_HEADER: HeaderValue = hostname_header();
}

const FALLBACK_HOSTNAME: &str = "localhost";

fn hostname_header() -> HeaderValue {
    HeaderValue::from_str(&HOSTNAME).unwrap_or_else(|_| HeaderValue::from_static(FALLBACK_HOSTNAME))
}

pub fn get_hostname_header() -> &'static HeaderValue {
    &HOSTNAME_HEADER
}

extern "C" {
    fn gethostname(name: *mut c_char, size: size_t) -> c_int;
}

/// Calls `gethostname`, falling back to `localhost` when it fails.
fn hostname() -> String {
    let buffer_len: usize = 255;
    let mut buffer: Vec<u8> = vec![0; buffer_len];

    let error = unsafe { gethostname(buffer.as_mut_ptr() as *mut c_char, buffer_len as size_t) };

    if error != 0 {
        warn!("gethostname failed with code {}", error);
        return FALLBACK_HOSTNAME.to_string();
    }

    // Find the end of the string and truncate the vector to that length
    let len = buffer.iter().position(|b| *b == 0).unwrap_or(buffer_len);
    buffer.truncate(len);

    match String::from_utf8(buffer) {
        Ok(hostname) => hostname,
        Err(err) => {
            warn!("Hostname is not valid UTF-8: {}", err);
            FALLBACK_HOSTNAME.to_string()
        }
    }
}
