//! Domain layer
//! 인스턴스 선택/검증 규칙(엔티티/값 객체/오류)을 외부 의존성 없이 표현한다.

pub mod error;
pub mod instance;
