pub mod json;
pub mod password;
pub mod path;
