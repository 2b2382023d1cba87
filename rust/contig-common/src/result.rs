pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
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

/// Checks that `index` lies in the half-open range `[0, len)`.
#[inline]
pub fn verify_index(operation: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_range(operation, index, len)
    }
}

/// Checks that `index` lies in the closed range `[0, len]`, i.e. it is a valid
/// insertion point.
#[inline]
pub fn verify_position(operation: &'static str, index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        out_of_range(operation, index, len)
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
pub fn out_of_range(operation: &'static str, index: usize, len: usize) -> Result<()> {
    Err(crate::error::Error::out_of_range(operation, index, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(len: usize, capacity: usize) -> Result<()> {
        verify_arg!(len, len <= capacity);
        Ok(())
    }

    #[test]
    fn test_verify_arg_macro() {
        assert!(checked(3, 5).is_ok());
        let err = checked(4, 3).unwrap_err();
        assert!(err.is_invalid_arg());
        assert_eq!(err.to_string(), "invalid argument len: len <= capacity");
    }

    #[test]
    fn test_verify_index_bounds() {
        assert!(verify_index("at", 0, 1).is_ok());
        assert!(verify_index("at", 1, 1).unwrap_err().is_out_of_range());
        assert!(verify_index("at", 0, 0).is_err());
    }

    #[test]
    fn test_verify_position_includes_end() {
        assert!(verify_position("insert_at", 0, 0).is_ok());
        assert!(verify_position("insert_at", 3, 3).is_ok());
        assert!(verify_position("insert_at", 4, 3).unwrap_err().is_out_of_range());
    }
}
