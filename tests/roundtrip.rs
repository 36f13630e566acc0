//! 항등 변환, 분류, 동일 분류 내 왕복 변환 성질 테스트.
use unit_converter_toolbox::category::Category;
use unit_converter_toolbox::conversion::{classify, convert};

const LENGTH_UNITS: [&str; 7] = [
    "Inch",
    "Foot",
    "Yard",
    "Mile",
    "Centimeter",
    "Meter",
    "Kilometer",
];
const WEIGHT_UNITS: [&str; 5] = ["Pound", "Ounce", "Ton", "Gram", "Kilogram"];
const TEMPERATURE_UNITS: [&str; 3] = ["Celsius", "Fahrenheit", "Kelvin"];

fn assert_roundtrip(units: &[&str], value: f64) {
    for from in units {
        for to in units {
            let forward = convert(from, to, &value.to_string()).unwrap();
            let back = convert(to, from, &forward.to_string()).unwrap();
            let tol = 1e-6 * value.abs().max(1.0);
            assert!(
                (back - value).abs() <= tol,
                "{from}->{to}->{from}: {back} vs {value}"
            );
        }
    }
}

#[test]
fn length_roundtrip() {
    assert_roundtrip(&LENGTH_UNITS, 3.25);
}

#[test]
fn weight_roundtrip() {
    assert_roundtrip(&WEIGHT_UNITS, 12.5);
}

#[test]
fn temperature_roundtrip() {
    assert_roundtrip(&TEMPERATURE_UNITS, 36.6);
    assert_roundtrip(&TEMPERATURE_UNITS, -40.0);
}

#[test]
fn identity_returns_value_unchanged() {
    for unit in LENGTH_UNITS
        .iter()
        .chain(WEIGHT_UNITS.iter())
        .chain(TEMPERATURE_UNITS.iter())
    {
        let v = convert(unit, unit, "3.5").unwrap();
        assert_eq!(v, 3.5, "{unit}");
    }
}

#[test]
fn identity_applies_to_unknown_names() {
    // 이름이 문자열로 같기만 하면 분류하지 않고 그대로 돌려준다.
    let v = convert("Furlong", "Furlong", "42").unwrap();
    assert_eq!(v, 42.0);
}

#[test]
fn classify_known_units() {
    assert_eq!(classify("Inch"), Some(Category::Length));
    assert_eq!(classify("Kilometer"), Some(Category::Length));
    assert_eq!(classify("Ton"), Some(Category::Weight));
    assert_eq!(classify("Gram"), Some(Category::Weight));
    assert_eq!(classify("Kelvin"), Some(Category::Temperature));
}

#[test]
fn classify_unknown_unit() {
    assert_eq!(classify("Furlong"), None);
    assert_eq!(classify("meter"), None);
    assert_eq!(classify(""), None);
}

#[test]
fn every_unit_belongs_to_one_category() {
    for unit in LENGTH_UNITS {
        assert_eq!(classify(unit), Some(Category::Length), "{unit}");
    }
    for unit in WEIGHT_UNITS {
        assert_eq!(classify(unit), Some(Category::Weight), "{unit}");
    }
    for unit in TEMPERATURE_UNITS {
        assert_eq!(classify(unit), Some(Category::Temperature), "{unit}");
    }
}
