use schemelet::error::{Error, ErrorKind};


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

/// Result text of running `s`, panicking on failure.
pub fn result<S: AsRef<str>>(s: S) -> String {
    setup();
    match schemelet::run(s.as_ref()) {
        Ok(val) => val,
        Err(err) => panic!("{:?} failed: {}", s.as_ref(), err),
    }
}

/// Kind of the error from running `s`, panicking on success.
pub fn error_kind<S: AsRef<str>>(s: S) -> ErrorKind {
    setup();
    match schemelet::run(s.as_ref()) {
        Ok(val) => panic!("{:?} unexpectedly gave {}", s.as_ref(), val),
        Err(err) => err.kind(),
    }
}

#[allow(dead_code)]
pub fn run<S: AsRef<str>>(s: S) -> Result<String, Error> {
    setup();
    schemelet::run(s.as_ref())
}
