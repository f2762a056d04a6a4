//! Result Code Tests - Taxonomy, Predicates, and Exception Bridging
//!
//! Covers the sign-bit discipline across the code space, the well-known
//! failure encodings, and the full promote/demote cycle between result
//! codes and Rust error handling at an ABI boundary.

mod common;

use nanocom::{catch_hresult, catch_hresult_with, ComError, Guid, Hresult, HresultError};

#[test]
fn test_predicates_partition_the_code_space() {
    for bits in [
        0u32,
        1,
        0x7FFF_FFFF,
        0x8000_0000,
        0x8000_4001,
        0x8007_0057,
        0xFFFF_FFFF,
    ] {
        let code = Hresult::from_bits(bits);
        assert_ne!(code.is_success(), code.is_failure(), "{code}");
        assert_eq!(code.is_failure(), bits & 0x8000_0000 != 0, "{code}");
    }
}

#[test]
fn test_well_known_encoding() {
    assert_eq!(Hresult::FAILURE_INVALID_ARGUMENT.to_bits(), 0x8007_0057);
    assert_eq!(Hresult::FAILURE_OUT_OF_MEMORY.to_bits(), 0x8007_000E);
    assert_eq!(Hresult::FAILURE_NO_INTERFACE.to_bits(), 0x8000_4002);
}

#[test]
fn test_os_error_encoding_rule() {
    for code in [5u16, 87, 1168, 2250] {
        assert_eq!(
            Hresult::from_win32(code).to_bits(),
            0x8007_0000 | code as u32
        );
        assert!(Hresult::from_win32(code).is_failure());
    }
}

#[test]
fn test_question_mark_propagation() {
    fn probe(code: Hresult) -> Result<&'static str, HresultError> {
        code.ok()?;
        Ok("reached")
    }

    assert_eq!(probe(Hresult::OK).unwrap(), "reached");
    let err = probe(Hresult::FAILURE_NOT_READY).unwrap_err();
    assert_eq!(err.code(), Hresult::FAILURE_NOT_READY);
}

#[test]
fn test_throw_then_catch_restores_the_code() {
    // Promote a failure into an unwind, cross some frames, demote it back.
    fn inner() {
        Hresult::FAILURE_OUT_OF_MEMORY.throw_if_failure();
    }
    fn outer() -> Result<(), ComError> {
        inner();
        Ok(())
    }

    assert_eq!(catch_hresult(outer), Hresult::FAILURE_OUT_OF_MEMORY);
}

#[test]
fn test_catch_maps_conditions_per_table() {
    let cases: Vec<(ComError, Hresult)> = vec![
        (ComError::OutOfMemory, Hresult::FAILURE_OUT_OF_MEMORY),
        (
            ComError::InvalidArgument("negative length".into()),
            Hresult::FAILURE_INVALID_ARGUMENT,
        ),
        (
            ComError::NotFound("no such row".into()),
            Hresult::FAILURE_NOT_FOUND,
        ),
        (ComError::NotImplemented, Hresult::FAILURE_NOT_IMPLEMENTED),
        (
            ComError::NoInterface(Guid::NIL),
            Hresult::FAILURE_NO_INTERFACE,
        ),
        (
            ComError::Unexpected("invariant broken".into()),
            Hresult::FAILURE_UNEXPECTED,
        ),
    ];
    for (condition, expected) in cases {
        assert_eq!(catch_hresult(|| Err(condition)), expected);
    }
}

#[test]
fn test_catch_success_is_ok() {
    assert_eq!(catch_hresult(|| Ok(())), Hresult::OK);
}

#[test]
fn test_catch_foreign_panic_falls_back() {
    assert_eq!(
        catch_hresult(|| panic!("unrelated assertion")),
        Hresult::FAILURE_UNEXPECTED
    );
    assert_eq!(
        catch_hresult_with(|| panic!("unrelated assertion"), || {
            Hresult::FAILURE_ABORT
        }),
        Hresult::FAILURE_ABORT
    );
}

#[test]
fn test_codes_survive_the_boundary_untranslated() {
    // A code produced on one side of the ABI reads back bit-identical on
    // the other, whatever route it took.
    for code in [
        Hresult::FAILURE_PENDING,
        Hresult::FAILURE_ACCESS_DENIED,
        Hresult::FAILURE_DEVICE_REMOVED,
    ] {
        let via_err = catch_hresult(move || Err(HresultError::new(code).into()));
        assert_eq!(via_err, code);

        let via_panic = catch_hresult(move || {
            code.throw_if_failure();
            Ok(())
        });
        assert_eq!(via_panic, code);
    }
}
