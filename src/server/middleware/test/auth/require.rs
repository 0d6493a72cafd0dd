use super::*;

mod require_ownership;
