use serde::{Deserialize, Serialize};

/// 무게 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Pound,
    Ounce,
    Ton,
    Gram,
    Kilogram,
}

fn to_kg(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilogram => value,
        WeightUnit::Gram => value * 0.001,
        WeightUnit::Pound => value * 0.453592,
        WeightUnit::Ounce => value * 0.0283495,
        WeightUnit::Ton => value * 907.185,
    }
}

fn from_kg(value_kg: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kilogram => value_kg,
        WeightUnit::Gram => value_kg * 1000.0,
        WeightUnit::Pound => value_kg / 0.453592,
        WeightUnit::Ounce => value_kg / 0.0283495,
        WeightUnit::Ton => value_kg / 907.185,
    }
}

/// 무게를 다른 단위로 변환한다.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    let base = to_kg(value, from);
    from_kg(base, to)
}

/// 단위의 정식 이름을 돌려준다.
pub fn weight_unit_name(unit: WeightUnit) -> &'static str {
    match unit {
        WeightUnit::Pound => "Pound",
        WeightUnit::Ounce => "Ounce",
        WeightUnit::Ton => "Ton",
        WeightUnit::Gram => "Gram",
        WeightUnit::Kilogram => "Kilogram",
    }
}
