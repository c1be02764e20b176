pub(crate) mod constants;
pub(crate) mod error;
pub(crate) mod prime;
pub(crate) mod string_hash;
pub(crate) mod time;

#[cfg(test)]
pub(crate) mod test_utils;
