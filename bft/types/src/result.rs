use std::fmt::{Debug, Display};

/// Assertions on `Result`s, so that tests can chain a call, its expected
/// outcome and the next step:
///
/// ```rust,ignore
/// validator
///     .to_borsh_vec()
///     .should_succeed_and_equal(validator.encode())
///     .deserialize_borsh::<Validator>()
///     .should_succeed_and_equal(validator);
/// ```
pub trait ResultExt: Sized {
    type Success;
    type Error;

    /// Panic unless the result is `Ok`. Returns the value.
    fn should_succeed(self) -> Self::Success;

    /// Panic unless the result is `Ok` with a value equal to `expect`.
    fn should_succeed_and_equal<U>(self, expect: U) -> Self::Success
    where
        Self::Success: Debug + PartialEq<U>,
        U: Debug;

    /// Panic unless the result is `Err`. Returns the error.
    fn should_fail(self) -> Self::Error;

    /// Panic unless the result is `Err` and the error message contains
    /// `expect`.
    fn should_fail_with_error<U>(self, expect: U) -> Self::Error
    where
        Self::Error: Display,
        U: Display;
}

impl<T, E> ResultExt for Result<T, E>
where
    T: Debug,
    E: Display,
{
    type Error = E;
    type Success = T;

    fn should_succeed(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("expected ok, got error: {err}"),
        }
    }

    fn should_succeed_and_equal<U>(self, expect: U) -> T
    where
        Self::Success: Debug + PartialEq<U>,
        U: Debug,
    {
        let value = self.should_succeed();
        assert!(
            value == expect,
            "ok with unexpected value! expected: {expect:?}, got: {value:?}"
        );
        value
    }

    fn should_fail(self) -> E {
        match self {
            Err(err) => err,
            Ok(value) => panic!("expected error, got ok: {value:?}"),
        }
    }

    fn should_fail_with_error<U>(self, expect: U) -> E
    where
        Self::Error: Display,
        U: Display,
    {
        let err = self.should_fail();
        let expect = expect.to_string();
        assert!(
            err.to_string().contains(&expect),
            "error with unexpected message! expected to contain: {expect}, got: {err}"
        );
        err
    }
}

// ----------------------------------- tests -----------------------------------
