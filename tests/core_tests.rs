use mobilityid::{
    CheckDigitError, CountryRegistry, ISO_CODE_LEN, IdError, IdFormat, Iso3166, din_check_digit,
    is_known_country_code, iso_check_digit,
};

// ---------------------------------------------------------------------------
// DIN check digit
// ---------------------------------------------------------------------------

#[test]
fn din_check_digit_vectors() {
    let cases = [
        ("INTNM000071", '9'),
        ("INTNM000110", 'X'),
        ("INTNM000124", '0'),
        ("INTNM000114", '6'),
        ("INTNM000191", '5'),
        ("NLTNM012204", '5'),
    ];
    for (code, expected) in cases {
        assert_eq!(din_check_digit(code), expected, "code {code}");
    }
}

#[test]
fn din_check_digit_is_total() {
    assert_eq!(din_check_digit(""), '0');
    let d = din_check_digit("ÄÖÜ-*/");
    assert!(d.is_ascii_digit() || d == 'X');
}

// ---------------------------------------------------------------------------
// ISO / EMI3 check digit
// ---------------------------------------------------------------------------

#[test]
fn iso_check_digit_vectors() {
    let cases = [
        ("NN123ABCDEFGHI", 'T'),
        ("FRXYZ123456789", '2'),
        ("ITA1B2C3E4F5G6", '4'),
        ("ESZU8WOX834H1D", 'R'),
        ("PT73902837ABCZ", 'Z'),
        ("DE83DUIEN83QGZ", 'D'),
        ("DE83DUIEN83ZGQ", 'M'),
        ("DE8AA001234567", '0'),
        ("NLTNMC00122045", 'K'),
        ("NLTNMC33122045", 'P'),
        ("NLTNM001234567", 'X'),
    ];
    for (code, expected) in cases {
        assert_eq!(iso_check_digit(code), Ok(expected), "code {code}");
    }
}

#[test]
fn iso_check_digit_input_errors() {
    assert_eq!(
        iso_check_digit("NLTNMC0012204"),
        Err(CheckDigitError::Length {
            expected: ISO_CODE_LEN,
            actual: 13
        })
    );
    assert_eq!(
        iso_check_digit("NLTNMC0012204-"),
        Err(CheckDigitError::InvalidCharacter('-'))
    );
    // 14 chars but not 14 bytes
    assert!(matches!(
        iso_check_digit("NLTNMC0012204Ä"),
        Err(CheckDigitError::Length { actual: 15, .. })
    ));
}

// ---------------------------------------------------------------------------
// Country registry
// ---------------------------------------------------------------------------

#[test]
fn builtin_registry() {
    assert!(Iso3166.is_valid_country_code("NL"));
    assert!(Iso3166.is_valid_country_code("DE"));
    assert!(!Iso3166.is_valid_country_code("ZZ"));
    assert!(is_known_country_code("IN"));
}

#[test]
fn closure_registry() {
    let dach = |code: &str| matches!(code, "DE" | "AT" | "CH");
    assert!(dach.is_valid_country_code("AT"));
    assert!(!dach.is_valid_country_code("NL"));
}

// ---------------------------------------------------------------------------
// Errors and formats
// ---------------------------------------------------------------------------

#[test]
fn format_names() {
    assert_eq!(IdFormat::DinContract.to_string(), "DIN contract ID");
    assert_eq!(IdFormat::IsoEvse.to_string(), "ISO EVSE ID");
}

#[test]
fn error_messages() {
    let err = IdError::Conversion {
        from: IdFormat::Emi3Contract,
        to: IdFormat::DinContract,
        reason: "instance value is too long".into(),
    };
    assert_eq!(
        err.to_string(),
        "cannot convert EMI3 contract ID to DIN contract ID: instance value is too long"
    );
    assert!(err.is_conversion_error());

    let err = IdError::CheckDigitMismatch {
        provided: 'A',
        computed: 'K',
    };
    assert_eq!(
        err.to_string(),
        "provided check digit 'A' doesn't match computed one 'K'"
    );
}
