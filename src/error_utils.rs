use std::io::{Error, ErrorKind};

pub fn error(msg: String) -> Error {
    return Error::new(ErrorKind::Other, msg);
}

pub fn missing_setting_error(name: &str) -> Error {
    return Error::new(ErrorKind::NotFound, format!("Failed to retrieve the {} value!", name));
}
