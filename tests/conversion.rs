//! 변환 공식과 오류 처리 회귀 테스트.
use unit_converter_toolbox::conversion::{convert, ConversionError};

#[test]
fn inch_to_centimeter() {
    let v = convert("Inch", "Centimeter", "1").unwrap();
    assert!((v - 2.54).abs() < 1e-9, "got {v}");
}

#[test]
fn kilometer_to_meter() {
    let v = convert("Kilometer", "Meter", "2").unwrap();
    assert!((v - 2000.0).abs() < 1e-9, "got {v}");
}

#[test]
fn mile_to_kilometer() {
    // 1 mile = 1609.34 m
    let v = convert("Mile", "Kilometer", "1").unwrap();
    assert!((v - 1.60934).abs() < 1e-9, "got {v}");
}

#[test]
fn pound_to_kilogram() {
    let v = convert("Pound", "Kilogram", "1").unwrap();
    assert!((v - 0.453592).abs() < 1e-9, "got {v}");
}

#[test]
fn ounce_to_gram() {
    let v = convert("Ounce", "Gram", "1").unwrap();
    assert!((v - 28.3495).abs() < 1e-6, "got {v}");
}

#[test]
fn ton_to_kilogram() {
    let v = convert("Ton", "Kilogram", "1").unwrap();
    assert!((v - 907.185).abs() < 1e-9, "got {v}");
}

#[test]
fn celsius_to_fahrenheit() {
    let v = convert("Celsius", "Fahrenheit", "100").unwrap();
    assert!((v - 212.0).abs() < 1e-9, "got {v}");
}

#[test]
fn kelvin_to_celsius() {
    let v = convert("Kelvin", "Celsius", "0").unwrap();
    assert!((v + 273.15).abs() < 1e-9, "got {v}");
}

#[test]
fn fahrenheit_to_kelvin() {
    // 32°F = 0°C = 273.15K
    let v = convert("Fahrenheit", "Kelvin", "32").unwrap();
    assert!((v - 273.15).abs() < 1e-9, "got {v}");
}

#[test]
fn negative_kelvin_is_not_rejected() {
    // 물리적으로 불가능한 값도 공식대로 계산한다.
    let v = convert("Celsius", "Kelvin", "-300").unwrap();
    assert!((v + 26.85).abs() < 1e-9, "got {v}");
}

#[test]
fn value_with_surrounding_whitespace() {
    let v = convert("Meter", "Centimeter", " 2.5 ").unwrap();
    assert!((v - 250.0).abs() < 1e-9, "got {v}");
}

#[test]
fn cross_category_is_unsupported() {
    match convert("Meter", "Kilogram", "5") {
        Err(ConversionError::Unsupported { from, to }) => {
            assert_eq!(from, "Meter");
            assert_eq!(to, "Kilogram");
        }
        other => panic!("expected Unsupported, got {other:?}"),
    }
}

#[test]
fn length_temperature_pair_is_unsupported() {
    assert!(matches!(
        convert("Celsius", "Meter", "5"),
        Err(ConversionError::Unsupported { .. })
    ));
    assert!(matches!(
        convert("Inch", "Kelvin", "5"),
        Err(ConversionError::Unsupported { .. })
    ));
}

#[test]
fn weight_temperature_pair_is_unsupported() {
    assert!(matches!(
        convert("Kilogram", "Fahrenheit", "5"),
        Err(ConversionError::Unsupported { .. })
    ));
    assert!(matches!(
        convert("Celsius", "Pound", "5"),
        Err(ConversionError::Unsupported { .. })
    ));
}

#[test]
fn unknown_unit_is_unsupported() {
    assert!(matches!(
        convert("Furlong", "Meter", "5"),
        Err(ConversionError::Unsupported { .. })
    ));
}

#[test]
fn lowercase_name_is_unsupported() {
    // 단위 이름은 대소문자를 구분한다.
    assert!(matches!(
        convert("inch", "Meter", "1"),
        Err(ConversionError::Unsupported { .. })
    ));
}

#[test]
fn blank_value_is_invalid() {
    assert!(matches!(
        convert("Inch", "Meter", ""),
        Err(ConversionError::InvalidInput(_))
    ));
    assert!(matches!(
        convert("Inch", "Meter", "   "),
        Err(ConversionError::InvalidInput(_))
    ));
}

#[test]
fn non_numeric_value_is_invalid() {
    assert!(matches!(
        convert("Inch", "Meter", "abc"),
        Err(ConversionError::InvalidInput(_))
    ));
}

#[test]
fn non_finite_value_is_invalid() {
    // "inf"/"NaN"은 f64 파싱에는 성공하지만 유한하지 않으므로 거부한다.
    assert!(matches!(
        convert("Inch", "Meter", "inf"),
        Err(ConversionError::InvalidInput(_))
    ));
    assert!(matches!(
        convert("Inch", "Meter", "NaN"),
        Err(ConversionError::InvalidInput(_))
    ));
}

#[test]
fn invalid_value_checked_before_identity() {
    // 같은 단위 이름이라도 값 파싱이 먼저다.
    assert!(matches!(
        convert("Meter", "Meter", "abc"),
        Err(ConversionError::InvalidInput(_))
    ));
}
