use crate::category::Category;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 비어 있거나 유한한 수로 해석할 수 없는 입력값
    InvalidInput(String),
    /// 같은 분류로 묶이지 않는 단위 쌍
    Unsupported { from: String, to: String },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::InvalidInput(v) => write!(f, "잘못된 입력값: {v:?}"),
            ConversionError::Unsupported { from, to } => {
                write!(f, "지원하지 않는 변환: {from} -> {to}")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 단위 이름을 분류로 매핑한다. 알 수 없는 이름이면 None.
pub fn classify(unit: &str) -> Option<Category> {
    if parse_length_unit(unit).is_some() {
        Some(Category::Length)
    } else if parse_weight_unit(unit).is_some() {
        Some(Category::Weight)
    } else if parse_temperature_unit(unit).is_some() {
        Some(Category::Temperature)
    } else {
        None
    }
}

/// 문자열로 전달된 단위명과 값을 받아 지정된 단위로 환산한다.
///
/// 단위 이름은 대소문자를 구분하는 정식 표기(`Inch`, `Celsius` 등)를 기대한다.
/// 두 이름이 완전히 같으면 분류와 무관하게 값을 그대로 돌려준다.
pub fn convert(from_unit: &str, to_unit: &str, raw_value: &str) -> Result<f64, ConversionError> {
    let value = parse_value(raw_value)?;
    if from_unit == to_unit {
        return Ok(value);
    }
    if let (Some(from), Some(to)) = (parse_length_unit(from_unit), parse_length_unit(to_unit)) {
        return Ok(convert_length(value, from, to));
    }
    if let (Some(from), Some(to)) = (parse_weight_unit(from_unit), parse_weight_unit(to_unit)) {
        return Ok(convert_weight(value, from, to));
    }
    if let (Some(from), Some(to)) = (
        parse_temperature_unit(from_unit),
        parse_temperature_unit(to_unit),
    ) {
        return Ok(convert_temperature(value, from, to));
    }
    Err(ConversionError::Unsupported {
        from: from_unit.to_string(),
        to: to_unit.to_string(),
    })
}

fn parse_value(raw: &str) -> Result<f64, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::InvalidInput(raw.to_string()));
    }
    // "inf"/"NaN" 문자열도 f64로 파싱되므로 유한성 검사를 별도로 한다.
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| ConversionError::InvalidInput(raw.to_string()))?;
    if !value.is_finite() {
        return Err(ConversionError::InvalidInput(raw.to_string()));
    }
    Ok(value)
}

pub fn parse_length_unit(s: &str) -> Option<LengthUnit> {
    match s {
        "Inch" => Some(LengthUnit::Inch),
        "Foot" => Some(LengthUnit::Foot),
        "Yard" => Some(LengthUnit::Yard),
        "Mile" => Some(LengthUnit::Mile),
        "Centimeter" => Some(LengthUnit::Centimeter),
        "Meter" => Some(LengthUnit::Meter),
        "Kilometer" => Some(LengthUnit::Kilometer),
        _ => None,
    }
}

pub fn parse_weight_unit(s: &str) -> Option<WeightUnit> {
    match s {
        "Pound" => Some(WeightUnit::Pound),
        "Ounce" => Some(WeightUnit::Ounce),
        "Ton" => Some(WeightUnit::Ton),
        "Gram" => Some(WeightUnit::Gram),
        "Kilogram" => Some(WeightUnit::Kilogram),
        _ => None,
    }
}

pub fn parse_temperature_unit(s: &str) -> Option<TemperatureUnit> {
    match s {
        "Celsius" => Some(TemperatureUnit::Celsius),
        "Fahrenheit" => Some(TemperatureUnit::Fahrenheit),
        "Kelvin" => Some(TemperatureUnit::Kelvin),
        _ => None,
    }
}
