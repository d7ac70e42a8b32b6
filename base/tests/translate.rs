//! Translation of result codes through the process-wide tables, as the
//! `ex` and `event` halves of a binding would use it.

use fmod_base::{Error, RawCode, ResultCode, result_to_error, translate};

fn expected(code: ResultCode) -> Result<(), Error> {
    if code.is_ok() { Ok(()) } else { Err(Error::Native(code)) }
}

#[test]
fn success_code_is_no_error() {
    assert_eq!(result_to_error(0i32), Ok(()));
}

#[test]
fn file_not_found() {
    let err = result_to_error(23i32).unwrap_err();
    assert_eq!(err, Error::Native(ResultCode::FileNotfound));
    assert_eq!(err.to_string(), "File not found.");
}

#[test]
fn unsigned_bit_pattern_matches_signed() {
    assert_eq!(result_to_error(23u32), result_to_error(23i32));
}

#[test]
fn float_is_unsupported() {
    let err = result_to_error(23.0f64).unwrap_err();
    assert_eq!(err, Error::UnsupportedKind { type_name: "f64" });
    assert!(err.to_string().contains("f64"));
}

#[test]
fn string_is_unsupported() {
    let err = result_to_error(String::from("23")).unwrap_err();
    assert!(matches!(err, Error::UnsupportedKind { .. }));
    assert!(err.to_string().contains("String"));
}

#[test]
fn unassigned_value_is_unknown() {
    let err = result_to_error(999999i32).unwrap_err();
    assert_eq!(err, Error::UnknownCode(RawCode::Signed(999999)));
    assert!(err.to_string().contains("999999"));

    let err = result_to_error(65536u64).unwrap_err();
    assert!(err.to_string().contains("65536"));
}

#[test]
fn every_code_through_every_kind() {
    for &code in ResultCode::ALL {
        let v = code.value();
        let want = expected(code);
        assert_eq!(result_to_error(v as i8), want, "{code} as i8");
        assert_eq!(result_to_error(v as i16), want, "{code} as i16");
        assert_eq!(result_to_error(v as i32), want, "{code} as i32");
        assert_eq!(result_to_error(v as i64), want, "{code} as i64");
        assert_eq!(result_to_error(v as isize), want, "{code} as isize");
        assert_eq!(result_to_error(v as u8), want, "{code} as u8");
        assert_eq!(result_to_error(v as u16), want, "{code} as u16");
        assert_eq!(result_to_error(v), want, "{code} as u32");
        assert_eq!(result_to_error(v as u64), want, "{code} as u64");
        assert_eq!(result_to_error(v as usize), want, "{code} as usize");
        assert_eq!(translate(v), want, "{code} static");
    }
}

#[test]
fn messages_are_fixed_text() {
    assert_eq!(
        result_to_error(14i32).unwrap_err().to_string(),
        "DSP connection error.  Connection possibly caused a cyclic dependancy.  \
         Or tried to connect a tree too many units deep (more than 128)."
    );
    assert_eq!(
        result_to_error(30u8).unwrap_err().to_string(),
        "The HTTP request timed out."
    );
}

#[test]
fn concurrent_translation_is_stable() {
    let inputs = [0i64, 23, 43, 95, 96, -1, 999999];
    let baseline: Vec<_> = inputs.iter().map(|&v| result_to_error(v)).collect();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let got: Vec<_> = inputs.iter().map(|&v| result_to_error(v)).collect();
                    assert_eq!(got, baseline);
                }
            });
        }
    });
}
