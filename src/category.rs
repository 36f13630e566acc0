/// 다루는 단위 분류를 나타낸다.
///
/// 길이/무게는 곱셈 기반 기준 단위(m, kg)를, 온도는 섭씨를 피벗으로 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Length,
    Weight,
    Temperature,
}
