pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

#[macro_export]
macro_rules! verify_index {
    ($what:expr, $index:expr, $len:expr) => {{
        $crate::result::verify_index($what, $index, $len)?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

/// Fails with an out-of-bounds error unless `index < len`.
#[inline]
pub fn verify_index(what: &str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_bounds(what, index, len)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn out_of_bounds(what: &str, index: usize, len: usize) -> Result<()> {
    Err(crate::error::ErrorKind::OutOfBounds {
        what: what.to_string(),
        index,
        len,
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(len: usize, index: usize) -> Result<usize> {
        crate::verify_arg!(len, len > 0);
        crate::verify_index!("slot", index, len);
        Ok(index)
    }

    #[test]
    fn test_verify_macros() {
        assert_eq!(checked(4, 3).unwrap(), 3);
        assert!(checked(4, 4).unwrap_err().is_out_of_bounds());
        let err = checked(0, 0).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument len: len > 0");
    }
}
