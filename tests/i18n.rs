//! 언어 결정과 번역기 폴백 회귀 테스트.
use unit_converter_toolbox::i18n::{keys, resolve_language, Translator};

#[test]
fn translator_reports_active_language_code() {
    assert_eq!(Translator::new_with_pack("en-us", None).language_code(), "en");
    assert_eq!(Translator::new_with_pack("ko", None).language_code(), "ko");
    // 알 수 없는 코드는 ko로 폴백한다.
    assert_eq!(Translator::new_with_pack("fr", None).language_code(), "ko");
}

#[test]
fn english_translation_with_korean_base() {
    let tr = Translator::new_with_pack("en-us", None);
    assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
    let tr = Translator::new_with_pack("ko", None);
    assert_eq!(tr.t(keys::ERROR_PREFIX), "오류");
}

#[test]
fn cli_flag_takes_priority_over_config() {
    assert_eq!(resolve_language("en", Some("ko")), "en");
    assert_eq!(resolve_language("auto", Some("ko")), "ko");
}
