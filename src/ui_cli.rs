use std::io::{self, Write};

use crate::app::AppError;
use crate::category::Category;
use crate::config::Config;
use crate::conversion::{self, ConversionError};
use crate::i18n::{keys, Translator};
use crate::units::{length_unit_name, temperature_unit_name, weight_unit_name};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    ListUnits,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_UNITS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::ListUnits),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
///
/// 숫자가 아닌 값은 다시 입력받고, 지원하지 않는 단위 쌍은 오류로 돌려준다.
pub fn handle_convert(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    println!("{}", tr.t(keys::CONVERT_NOTE_CASE));
    let mut value_raw = read_line(tr.t(keys::CONVERT_PROMPT_VALUE))?;
    let from_raw = read_line(tr.t(keys::CONVERT_PROMPT_FROM_UNIT))?;
    let from_unit = from_raw.trim();
    let to_raw = read_line(tr.t(keys::CONVERT_PROMPT_TO_UNIT))?;
    let to_unit = resolve_to_unit(to_raw.trim(), from_unit, cfg);
    loop {
        match conversion::convert(from_unit, to_unit, value_raw.trim()) {
            Ok(result) => {
                println!("{} {result} {to_unit}", tr.t(keys::CONVERT_RESULT));
                return Ok(());
            }
            Err(ConversionError::InvalidInput(_)) => {
                println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
                value_raw = read_line(tr.t(keys::CONVERT_PROMPT_VALUE))?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// 변환 단위를 비워두면 입력 단위 분류의 기본 단위로 변환한다.
fn resolve_to_unit<'a>(entered: &'a str, from_unit: &str, cfg: &Config) -> &'a str {
    if !entered.is_empty() {
        return entered;
    }
    match conversion::classify(from_unit) {
        Some(Category::Length) => length_unit_name(cfg.default_units.length),
        Some(Category::Weight) => weight_unit_name(cfg.default_units.weight),
        Some(Category::Temperature) => temperature_unit_name(cfg.default_units.temperature),
        // 알 수 없는 입력 단위는 변환 단계에서 Unsupported로 처리된다.
        None => entered,
    }
}

/// 지원 단위 목록을 분류별로 출력한다.
pub fn handle_list_units(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNITS_HEADING));
    println!("{}", tr.t(keys::UNITS_LENGTH_LINE));
    println!("{}", tr.t(keys::UNITS_WEIGHT_LINE));
    println!("{}", tr.t(keys::UNITS_TEMPERATURE_LINE));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} ({})",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language,
        tr.language_code()
    );
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.language = "ko".to_string(),
        "2" => cfg.language = "en-us".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
