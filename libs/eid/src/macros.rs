//! Macro front-ends for the precondition guards.
//!
//! Each macro takes the same leading arguments as its function and an
//! optional percent-style message with arguments. Message arguments go
//! through [`Arg::from`](crate::Arg), so any type with a `From` impl works.
//!
//! # Example
//!
//! ```ignore
//! check_argument!(amount > 0, "20150718:075101")?;
//! check_state!(conn.is_open(), "20150718:075102", "connection %s closed", name)?;
//! let user = check_not_null!(lookup(id), "20150718:075103", "no user %d", id)?;
//! let slot = check_element_index!(i, len, "20150718:075104")?;
//! ```

/// Expands to [`check_argument`](crate::preconditions::check_argument) or its
/// `_msg` form.
#[macro_export]
macro_rules! check_argument {
    ($expr:expr, $eid:expr $(,)?) => {
        $crate::preconditions::check_argument($expr, $eid)
    };
    ($expr:expr, $eid:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::preconditions::check_argument_msg(
            $expr,
            $eid,
            $fmt,
            &[$($crate::Arg::from($arg)),*],
        )
    };
}

/// Expands to [`check_state`](crate::preconditions::check_state) or its
/// `_msg` form.
#[macro_export]
macro_rules! check_state {
    ($expr:expr, $eid:expr $(,)?) => {
        $crate::preconditions::check_state($expr, $eid)
    };
    ($expr:expr, $eid:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::preconditions::check_state_msg(
            $expr,
            $eid,
            $fmt,
            &[$($crate::Arg::from($arg)),*],
        )
    };
}

/// Expands to [`check_not_null`](crate::preconditions::check_not_null) or its
/// `_msg` form.
#[macro_export]
macro_rules! check_not_null {
    ($reference:expr, $eid:expr $(,)?) => {
        $crate::preconditions::check_not_null($reference, $eid)
    };
    ($reference:expr, $eid:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::preconditions::check_not_null_msg(
            $reference,
            $eid,
            $fmt,
            &[$($crate::Arg::from($arg)),*],
        )
    };
}

/// Expands to [`check_element_index`](crate::preconditions::check_element_index)
/// or its `_msg` form.
#[macro_export]
macro_rules! check_element_index {
    ($index:expr, $size:expr, $eid:expr $(,)?) => {
        $crate::preconditions::check_element_index($index, $size, $eid)
    };
    ($index:expr, $size:expr, $eid:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::preconditions::check_element_index_msg(
            $index,
            $size,
            $eid,
            $fmt,
            &[$($crate::Arg::from($arg)),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    const ID: &str = "20150718:075046";

    #[test]
    fn test_check_argument_macro() {
        assert!(check_argument!(true, ID).is_ok());
        let err = check_argument!(false, ID, "PI value is %.2f", std::f64::consts::PI).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::IllegalArgument));
        assert!(err.to_string().contains("PI value is 3.14"));
    }

    #[test]
    fn test_check_state_macro() {
        let err = check_state!(false, ID, "%s is closed", "pool").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::IllegalState));
        assert_eq!(err.to_string(), format!("[{ID}|pool is closed]"));
    }

    #[test]
    fn test_check_not_null_macro() {
        assert_eq!(check_not_null!(Some(5), ID).unwrap(), 5);
        let err = check_not_null!(None::<u8>, ID, "user %d", 42i32).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::NullReference));
        assert!(err.to_string().contains("user 42"));
    }

    #[test]
    fn test_check_element_index_macro() {
        assert_eq!(check_element_index!(1, 3, ID).unwrap(), 1);
        let err = check_element_index!(3, 3, ID, "slot %d of %d", 3i64, 3i64).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::IndexOutOfBounds));
        assert!(err.to_string().contains("slot 3 of 3"));
    }

    #[test]
    fn test_macro_reports_macro_call_site() {
        let err = check_state!(false, ID).unwrap_err();
        let reference = err.eid().unwrap().reference().to_string();
        assert!(reference.contains("macros.rs"));
    }
}
